//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::{Config, ServerState};

/// 构建完整的应用路由 (也用于 oneshot 测试)
pub fn app(state: ServerState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::employees::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).map_err(std::io::Error::other)?,
        };

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🦀 Employee Gateway starting on {}", addr);
        tracing::info!("    upstream: {}", self.config.upstream_base_url);
        tracing::info!("    environment: {}", self.config.environment);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app(state))
            .with_graceful_shutdown(shutdown)
            .await
    }
}
