use std::sync::Arc;
use std::time::Duration;

use shared::AppResult;

use crate::client::{EmployeeApi, UpstreamClient};
use crate::core::Config;
use crate::services::EmployeeService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 网关无持久化，状态只由配置与无状态服务组成。
/// 使用 Arc 实现浅拷贝，每个请求克隆的成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | employees | EmployeeService | 员工用例编排 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工服务
    pub employees: EmployeeService,
}

impl ServerState {
    /// 创建服务器状态：按配置构造上游客户端与服务
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let client = UpstreamClient::new(
            &config.upstream_base_url,
            Duration::from_millis(config.request_timeout_ms),
        )?;
        Ok(Self {
            config: config.clone(),
            employees: EmployeeService::new(Arc::new(client)),
        })
    }

    /// 使用自定义上游实现创建状态 (测试场景)
    pub fn with_api(config: Config, api: Arc<dyn EmployeeApi>) -> Self {
        Self {
            config,
            employees: EmployeeService::new(api),
        }
    }
}
