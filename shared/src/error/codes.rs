//! Unified error codes for the employee gateway
//!
//! Error codes are stable string tags used by clients to discriminate
//! failures without parsing messages. They are organized by range:
//! - ERR-1xx: Upstream/transport errors
//! - ERR-2xx: Business errors
//! - ERR-3xx: Validation errors
//! - GENERAL_ERROR: unclassified errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its string tag (e.g. `"ERR-201"`) for cross-language
/// compatibility with existing API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ErrorCode {
    // ==================== ERR-1xx: Upstream ====================
    /// Upstream REST request could not be executed
    ApiRequestFailure,
    /// Upstream response body failed to parse as the expected shape
    JsonParseFailure,

    // ==================== ERR-2xx: Business ====================
    /// No employee records available
    NoRecordsFound,
    /// Name search matched nothing
    EmployeeNameNotFound,

    // ==================== ERR-3xx: Validation ====================
    /// Employee id was empty or absent
    MissingId,
    /// Name missing or not a string
    InvalidOrEmptyName,
    /// Salary missing, not a string, or not numeric
    InvalidOrMissingSalary,
    /// Salary parsed below zero
    SalaryBelowZero,
    /// Age missing, not a string, or not numeric
    InvalidOrEmptyAge,
    /// Age parsed below zero
    AgeBelowZero,
    /// Age parsed above 100
    AgeOverLimit,

    // ==================== Unclassified ====================
    /// Anything not matching the kinds above
    Unexpected,
}

impl ErrorCode {
    /// Stable wire tag for this code
    pub fn code(&self) -> &'static str {
        match self {
            Self::ApiRequestFailure => "ERR-101",
            Self::JsonParseFailure => "ERR-102",
            Self::NoRecordsFound => "ERR-201",
            Self::EmployeeNameNotFound => "ERR-202",
            Self::MissingId => "ERR-301",
            Self::InvalidOrEmptyName => "ERR-302",
            Self::InvalidOrMissingSalary => "ERR-303",
            Self::SalaryBelowZero => "ERR-304",
            Self::InvalidOrEmptyAge => "ERR-305",
            Self::AgeBelowZero => "ERR-306",
            Self::AgeOverLimit => "ERR-307",
            Self::Unexpected => "GENERAL_ERROR",
        }
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ApiRequestFailure => "REST API request execution failed",
            Self::JsonParseFailure => "Failed to parse JSON data",
            Self::NoRecordsFound => "Employee data not found",
            Self::EmployeeNameNotFound => "No matching employees for the provided name",
            Self::MissingId => "Employee ID cannot be empty",
            Self::InvalidOrEmptyName => "Name is either empty or invalid",
            Self::InvalidOrMissingSalary => "Salary is either missing or invalid",
            Self::SalaryBelowZero => "Salary must be non-negative",
            Self::InvalidOrEmptyAge => "Age is either empty or invalid",
            Self::AgeBelowZero => "Age must be a positive value",
            Self::AgeOverLimit => "Age cannot be above 100",
            Self::Unexpected => "An unexpected error occurred",
        }
    }

    /// Numeric range value used for category classification
    ///
    /// `Unexpected` has no wire number; it sits in the 9xx range.
    pub(crate) fn numeric(&self) -> u16 {
        match self {
            Self::ApiRequestFailure => 101,
            Self::JsonParseFailure => 102,
            Self::NoRecordsFound => 201,
            Self::EmployeeNameNotFound => 202,
            Self::MissingId => 301,
            Self::InvalidOrEmptyName => 302,
            Self::InvalidOrMissingSalary => 303,
            Self::SalaryBelowZero => 304,
            Self::InvalidOrEmptyAge => 305,
            Self::AgeBelowZero => 306,
            Self::AgeOverLimit => 307,
            Self::Unexpected => 900,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.code().to_string()
    }
}

/// Error returned when a string tag does not name a known error code
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct InvalidErrorCode(pub String);

impl TryFrom<String> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ERR-101" => Ok(Self::ApiRequestFailure),
            "ERR-102" => Ok(Self::JsonParseFailure),
            "ERR-201" => Ok(Self::NoRecordsFound),
            "ERR-202" => Ok(Self::EmployeeNameNotFound),
            "ERR-301" => Ok(Self::MissingId),
            "ERR-302" => Ok(Self::InvalidOrEmptyName),
            "ERR-303" => Ok(Self::InvalidOrMissingSalary),
            "ERR-304" => Ok(Self::SalaryBelowZero),
            "ERR-305" => Ok(Self::InvalidOrEmptyAge),
            "ERR-306" => Ok(Self::AgeBelowZero),
            "ERR-307" => Ok(Self::AgeOverLimit),
            "GENERAL_ERROR" => Ok(Self::Unexpected),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}
