//! HTTP 客户端 - 上游员工服务适配器
//!
//! 所有上游通信集中在这里。错误归类两条线:
//! 请求发不出去 / 非 2xx → ERR-101, 应答体解不开 → ERR-102。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{AppError, AppResult, Employee, EmployeeCreate};

use crate::client::dto::{CreatedEmployee, Envelope};

/// 上游删除成功应答中必含的标记子串
pub const DELETE_SUCCESS_MARKER: &str = "successfully! deleted Record";

/// 上游员工服务接口
///
/// 服务层只依赖这个 trait; 测试用内存实现替换真实客户端。
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// 全量员工列表
    async fn list_all(&self) -> AppResult<Vec<Employee>>;
    /// 按 ID 查询, 上游未知 ID 返回 `None` 而不是错误
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Employee>>;
    /// 创建员工, 返回带上游分配 ID 的记录
    async fn create(&self, payload: &EmployeeCreate) -> AppResult<Employee>;
    /// 删除员工, 按应答文本判断成败
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "upstream returned non-success status");
            return Err(AppError::upstream_unavailable(format!(
                "upstream answered {status}: {text}"
            )));
        }
        response
            .json()
            .await
            .map_err(|e| AppError::bad_upstream_payload(e.to_string()))
    }
}

#[async_trait]
impl EmployeeApi for UpstreamClient {
    async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;
        let envelope: Envelope<Vec<Employee>> = self.handle_response(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Employee>> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream_unavailable(format!(
                "upstream answered {status} for id {id}"
            )));
        }

        // 未知 ID 时上游返回 200 带空体或 data:null
        let text = response
            .text()
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let envelope: Envelope<Employee> = serde_json::from_str(&text)
            .map_err(|e| AppError::bad_upstream_payload(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn create(&self, payload: &EmployeeCreate) -> AppResult<Employee> {
        let url = format!("{}/create", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;
        let envelope: Envelope<CreatedEmployee> = self.handle_response(response).await?;
        let created = envelope
            .data
            .ok_or_else(|| AppError::bad_upstream_payload("create answer carried no record"))?;
        Ok(created.into())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let url = format!("{}/delete/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream_unavailable(format!(
                "upstream answered {status} for delete {id}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;
        Ok(text.contains(DELETE_SUCCESS_MARKER))
    }
}
