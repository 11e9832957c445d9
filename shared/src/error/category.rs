//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - ERR-1xx: Upstream errors (transport and payload decoding)
/// - ERR-2xx: Business errors (policy decisions over valid data)
/// - ERR-3xx: Validation errors (rejected before any upstream call)
/// - everything else: Unexpected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Upstream errors (ERR-1xx)
    Upstream,
    /// Business errors (ERR-2xx)
    Business,
    /// Validation errors (ERR-3xx)
    Validation,
    /// Unclassified errors
    Unexpected,
}

impl ErrorCategory {
    /// Determine category from an error code
    pub fn from_code(code: ErrorCode) -> Self {
        match code.numeric() {
            100..200 => Self::Upstream,
            200..300 => Self::Business,
            300..400 => Self::Validation,
            _ => Self::Unexpected,
        }
    }
}

impl ErrorCode {
    /// Category this code belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(*self)
    }
}
