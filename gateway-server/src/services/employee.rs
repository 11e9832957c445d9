//! Employee Service
//!
//! 员工用例编排。所有上游访问走 [`EmployeeApi`] trait; 业务规则
//! (空集报错、过滤、聚合、删除前解析姓名) 全部集中在这一层,
//! handler 不做判断。

use std::sync::Arc;

use shared::{AppError, AppResult, Employee, EmployeeCreate, ErrorCode};

use crate::client::EmployeeApi;
use crate::utils::validation::validate_id;

/// 员工服务
#[derive(Clone)]
pub struct EmployeeService {
    api: Arc<dyn EmployeeApi>,
}

impl EmployeeService {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self { api }
    }

    /// 全量列表; 上游空集按 ERR-201 处理
    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let employees = self.api.list_all().await?;
        if employees.is_empty() {
            return Err(AppError::new(ErrorCode::NoRecordsFound));
        }
        tracing::info!(count = employees.len(), "fetched employees from upstream");
        Ok(employees)
    }

    /// 大小写敏感的姓名子串过滤, 保持上游顺序
    pub async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        let matched: Vec<Employee> = self
            .list_all()
            .await?
            .into_iter()
            .filter(|e| e.name.contains(fragment))
            .collect();
        if matched.is_empty() {
            return Err(AppError::new(ErrorCode::EmployeeNameNotFound));
        }
        tracing::info!(count = matched.len(), fragment, "name search matched");
        Ok(matched)
    }

    /// 所有员工中的最高工资
    pub async fn highest_salary(&self) -> AppResult<i64> {
        let employees = self.list_all().await?;
        let mut salaries = Vec::with_capacity(employees.len());
        for employee in &employees {
            salaries.push(parse_salary(employee)?);
        }
        // list_all 已拒绝空集
        let highest = salaries.into_iter().max().unwrap_or_default();
        tracing::info!(highest, "computed highest salary");
        Ok(highest)
    }

    /// 工资前十的姓名, 降序; 同薪保持上游相对顺序
    pub async fn top_earner_names(&self) -> AppResult<Vec<String>> {
        let employees = self.list_all().await?;
        let mut ranked: Vec<(i64, &Employee)> = Vec::with_capacity(employees.len());
        for employee in &employees {
            ranked.push((parse_salary(employee)?, employee));
        }
        // 稳定排序, 平局保持原顺序
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        let names = ranked
            .into_iter()
            .take(10)
            .map(|(_, e)| e.name.clone())
            .collect();
        tracing::info!(?names, "computed top earners");
        Ok(names)
    }

    /// 按 ID 查询; 空 ID → ERR-301, 上游未知 ID → ERR-201
    pub async fn get_by_id(&self, id: &str) -> AppResult<Employee> {
        validate_id(id)?;
        let employee = self
            .api
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::NoRecordsFound))?;
        tracing::info!(%id, "found employee");
        Ok(employee)
    }

    /// 创建员工 (输入已由 validator 归一化)
    pub async fn create(&self, payload: EmployeeCreate) -> AppResult<Employee> {
        let employee = self.api.create(&payload).await?;
        tracing::info!(id = %employee.id, "created employee");
        Ok(employee)
    }

    /// 删除员工, 返回被删记录的姓名
    ///
    /// 删除前先按 ID 解析记录 (拿到姓名, 顺带让 ERR-201/ERR-301 先于
    /// 删除请求发生)。上游删除结果只记日志, 不改变返回值。
    pub async fn delete_by_id(&self, id: &str) -> AppResult<String> {
        validate_id(id)?;
        let employee = self.get_by_id(id).await?;
        let deleted = self.api.delete(id).await?;
        if deleted {
            tracing::info!(%id, name = %employee.name, "deleted employee");
        } else {
            tracing::warn!(%id, "upstream reported delete failure");
        }
        Ok(employee.name)
    }
}

/// 工资在线路上是十进制字符串; 解析失败视为上游数据损坏 (ERR-102)
fn parse_salary(employee: &Employee) -> AppResult<i64> {
    employee.salary.trim().parse::<i64>().map_err(|_| {
        AppError::bad_upstream_payload(format!(
            "employee {} carries non-numeric salary {:?}",
            employee.id, employee.salary
        ))
    })
}
