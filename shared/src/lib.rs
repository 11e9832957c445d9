//! Shared types for the employee gateway
//!
//! Types used by both the gateway server and the mock upstream service:
//!
//! - **Error system** (`error`): unified error codes, categories and
//!   HTTP response mapping
//! - **Models** (`models`): wire-level employee payloads

pub mod error;
pub mod models;

// Re-export 公共类型
pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use models::{Employee, EmployeeCreate};
