//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 错误类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`validation`] - 创建输入校验

pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
