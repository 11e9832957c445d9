//! Employee Gateway Server - 员工数据网关
//!
//! # 架构概述
//!
//! 本模块是网关的主入口。网关自身无持久化，所有员工数据由上游
//! employee-records 服务管理，网关负责：
//!
//! - **HTTP API** (`api`): 对外 RESTful 接口与错误映射
//! - **业务编排** (`services`): 聚合、搜索、创建/删除用例
//! - **上游客户端** (`client`): 基于 reqwest 的上游适配器
//! - **输入校验** (`utils::validation`): 创建请求的字段校验
//!
//! # 模块结构
//!
//! ```text
//! gateway-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 员工用例编排
//! ├── client/        # 上游 HTTP 客户端
//! └── utils/         # 日志、校验等工具
//! ```

pub mod api;
pub mod client;
pub mod core;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use client::{EmployeeApi, UpstreamClient};
pub use core::{Config, Server, ServerState, app};
pub use services::EmployeeService;
pub use shared::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
    ______                ______      __
   / ____/___ ___  ____  / ____/___ _/ /____
  / __/ / __ `__ \/ __ \/ / __/ __ `/ __/ _ \
 / /___/ / / / / / /_/ / /_/ / /_/ / /_/  __/
/_____/_/ /_/ /_/ .___/\____/\__,_/\__/\___/
               /_/
    "#
    );
}
