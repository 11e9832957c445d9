//! 业务服务模块
//!
//! - [`employee`] - 员工用例编排 (查询、聚合、创建、删除)

pub mod employee;

pub use employee::EmployeeService;
