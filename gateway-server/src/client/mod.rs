//! 上游员工服务客户端
//!
//! # 结构
//!
//! - [`dto`] - 上游信封与 create 应答形状
//! - [`http`] - reqwest 适配器, 实现 [`EmployeeApi`]

pub mod dto;
pub mod http;

pub use http::{EmployeeApi, UpstreamClient};
