//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    ///
    /// Every classified kind answers 400, including upstream failures;
    /// the facade does not distinguish its own faults from bad input at
    /// the status level, only via the error code. Unclassified errors
    /// answer 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
