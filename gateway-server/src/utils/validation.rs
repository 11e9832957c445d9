//! Input validation helpers
//!
//! 创建输入是一张松散的 JSON map; 这里按固定顺序 (name → salary → age)
//! 校验并归一化成 [`EmployeeCreate`]。每条失败规则对应一个稳定错误码,
//! 见 [`shared::ErrorCode`]。

use serde_json::{Map, Value};
use shared::{AppError, AppResult, EmployeeCreate, ErrorCode};

/// 年龄上限 (含)
pub const MAX_AGE: i64 = 100;

/// Validate a path id: ERR-301 when empty or whitespace.
pub fn validate_id(id: &str) -> AppResult<()> {
    if id.trim().is_empty() {
        return Err(AppError::new(ErrorCode::MissingId));
    }
    Ok(())
}

/// Convert a raw creation map into a normalized payload.
///
/// 规则顺序固定, 第一条失败立即返回:
///
/// | 字段 | 规则 | 错误码 |
/// |------|------|--------|
/// | name | 必填, 字符串, 去空白后非空 | ERR-302 |
/// | salary | 必填, 整数编码的字符串 | ERR-303 |
/// | salary | >= 0 | ERR-304 |
/// | age | 必填, 整数编码的字符串 | ERR-305 |
/// | age | >= 0 | ERR-306 |
/// | age | <= 100 | ERR-307 |
///
/// title / email 可选, 缺省为空串透传。
pub fn convert_and_validate(input: &Map<String, Value>) -> AppResult<EmployeeCreate> {
    let name = match input.get("name").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Err(AppError::new(ErrorCode::InvalidOrEmptyName)),
    };

    let (salary_raw, salary) =
        parse_integer_field(input.get("salary"), ErrorCode::InvalidOrMissingSalary)?;
    if salary < 0 {
        return Err(AppError::new(ErrorCode::SalaryBelowZero));
    }

    let (age_raw, age) = parse_integer_field(input.get("age"), ErrorCode::InvalidOrEmptyAge)?;
    if age < 0 {
        return Err(AppError::new(ErrorCode::AgeBelowZero));
    }
    if age > MAX_AGE {
        return Err(AppError::new(ErrorCode::AgeOverLimit));
    }

    // 字符串编码的数字原样透传
    Ok(EmployeeCreate {
        name,
        salary: salary_raw,
        age: age_raw,
        title: optional_text(input.get("title")),
        email: optional_text(input.get("email")),
    })
}

/// 数字字段在线路上是字符串; JSON 数字或其他类型一律拒绝
fn parse_integer_field(value: Option<&Value>, code: ErrorCode) -> AppResult<(String, i64)> {
    let parsed = match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().map(|n| (trimmed.to_string(), n))
        }
        _ => None,
    };
    parsed.ok_or_else(|| AppError::new(code))
}

fn optional_text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}
