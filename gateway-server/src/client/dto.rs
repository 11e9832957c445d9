//! 上游应答 DTO
//!
//! 上游把所有 JSON 应答包在 `{"data": ..., "status": ...}` 信封里。
//! 读取形状用 `employee_*` 字段名 (直接解码为 [`shared::Employee`]);
//! create 应答形状不同: `name`/`salary`/`age` 是裸字段名。

use serde::Deserialize;
use shared::Employee;

/// 上游统一信封
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    #[allow(dead_code)]
    pub status: Option<String>,
}

/// create 应答中的员工记录
///
/// 上游创建接口回显的记录用裸 `name`/`salary`/`age`, 但 title/email
/// 仍带 `employee_` 前缀; alias 两种写法都接受。
#[derive(Debug, Deserialize)]
pub struct CreatedEmployee {
    pub id: String,
    pub name: String,
    pub salary: String,
    pub age: String,
    #[serde(alias = "employee_title", default)]
    pub title: String,
    #[serde(alias = "employee_email", default)]
    pub email: String,
}

impl From<CreatedEmployee> for Employee {
    fn from(c: CreatedEmployee) -> Self {
        Employee {
            id: c.id,
            name: c.name,
            salary: c.salary,
            age: c.age,
            title: c.title,
            email: c.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_null_data_as_none() {
        let env: Envelope<Employee> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(env.data.is_none());
    }

    #[test]
    fn created_employee_accepts_both_title_spellings() {
        let bare: CreatedEmployee = serde_json::from_str(
            r#"{"id":"1","name":"A","salary":"10","age":"30","title":"Dev","email":"a@x"}"#,
        )
        .unwrap();
        assert_eq!(bare.title, "Dev");

        let prefixed: CreatedEmployee = serde_json::from_str(
            r#"{"id":"2","name":"B","salary":"20","age":"40","employee_title":"Ops","employee_email":"b@x"}"#,
        )
        .unwrap();
        assert_eq!(prefixed.title, "Ops");
        assert_eq!(prefixed.email, "b@x");
    }

    #[test]
    fn created_employee_converts_to_employee() {
        let created: CreatedEmployee = serde_json::from_str(
            r#"{"id":"9","name":"C","salary":"30","age":"50","title":"QA","email":"c@x"}"#,
        )
        .unwrap();
        let employee: Employee = created.into();
        assert_eq!(employee.id, "9");
        assert_eq!(employee.name, "C");
        assert_eq!(employee.salary, "30");
    }
}
