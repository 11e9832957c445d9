//! Employee API Handlers
//!
//! 只做提取与转发，业务规则在 [`crate::services::EmployeeService`]。

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use shared::Employee;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::convert_and_validate;

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await?;
    Ok(Json(employees))
}

/// Search employees by name fragment (case sensitive substring)
pub async fn search(
    State(state): State<ServerState>,
    Path(q): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.search_by_name(&q).await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// Highest salary across all employees
pub async fn highest_salary(State(state): State<ServerState>) -> AppResult<Json<i64>> {
    let salary = state.employees.highest_salary().await?;
    Ok(Json(salary))
}

/// Names of the ten highest earning employees
pub async fn top_earner_names(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let names = state.employees.top_earner_names().await?;
    Ok(Json(names))
}

/// Create a new employee
///
/// 入参是原始 JSON, 字段校验 (ERR-302..ERR-307) 在转换阶段完成。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<Employee>> {
    let input = payload.as_object().cloned().unwrap_or_default();
    let create = convert_and_validate(&input)?;
    let employee = state.employees.create(create).await?;
    Ok(Json(employee))
}

/// Delete an employee, returning the deleted employee's name
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    let name = state.employees.delete_by_id(&id).await?;
    Ok(Json(name))
}
