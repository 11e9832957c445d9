//! Error types and the failure wire shape

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// The primary error type for the gateway. Carries a stable
/// [`ErrorCode`] plus a human-readable message; converts directly into
/// an HTTP response via [`axum::response::IntoResponse`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the kind of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Upstream request could not be executed
    pub fn upstream_unavailable(detail: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ApiRequestFailure, detail)
    }

    /// Upstream payload failed to decode
    pub fn bad_upstream_payload(detail: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::JsonParseFailure, detail)
    }

    /// Anything that escaped classification; the original message is
    /// kept for server-side logging, never sent to the client
    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Unexpected, detail)
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Failure wire shape: `{"error": "ERR-201", "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        // Unclassified errors expose only the generic message; whatever
        // detail the error carries stays server-side.
        let message = if err.code == ErrorCode::Unexpected {
            err.code.message().to_string()
        } else {
            err.message.clone()
        };
        Self {
            error: err.code.code().to_string(),
            message,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.code.http_status();
        let body = ErrorBody::from(&self);

        if self.code == ErrorCode::Unexpected {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "Unclassified error surfaced to client"
            );
        }

        (status, Json(body)).into_response()
    }
}
