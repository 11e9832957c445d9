//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as exposed by the gateway and stored upstream.
///
/// Field names on the wire follow the upstream read shape
/// (`employee_name`, `employee_salary`, ...). Salary and age are
/// decimal strings on the wire; parsing happens at the use site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: String,
    #[serde(rename = "employee_age")]
    pub age: String,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email")]
    pub email: String,
}

/// Create employee payload sent to the upstream `/create` endpoint.
///
/// Produced by the input validator; never carries an id (the upstream
/// assigns one). Numeric fields stay string-encoded for onward
/// transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub salary: String,
    pub age: String,
    pub title: String,
    pub email: String,
}
