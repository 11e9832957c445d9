//! 核心模块 - 配置、状态与服务器
//!
//! - [`Config`] - 环境变量驱动的配置
//! - [`ServerState`] - 共享服务状态
//! - [`Server`] - HTTP 服务器

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, app};
pub use state::ServerState;
