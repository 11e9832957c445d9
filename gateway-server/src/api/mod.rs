//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`employees`] - 员工管理接口 (代理上游员工服务)

pub mod employees;
pub mod health;
