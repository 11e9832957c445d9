//! Unified error system for the employee gateway
//!
//! This module provides a comprehensive error handling system with:
//! - [`ErrorCode`]: Standardized error codes for all error kinds
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and message
//! - [`ErrorBody`]: The `{error, message}` wire shape for failures
//!
//! # Error Code Ranges
//!
//! - ERR-1xx: Upstream/transport errors
//! - ERR-2xx: Business errors
//! - ERR-3xx: Validation errors
//! - GENERAL_ERROR: anything unclassified
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorBody};
//!
//! // Create an error with the default message for the code
//! let err = AppError::new(ErrorCode::NoRecordsFound);
//! assert_eq!(err.code.code(), "ERR-201");
//!
//! // Convert to a wire body
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.error, "ERR-201");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
