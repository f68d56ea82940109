//! Shared HTTP error response body.
//!
//! Every resource module maps its domain errors onto this one shape so that
//! clients see a consistent `{ code, message }` envelope. The resolution
//! failure body in particular must be byte-identical across resources: it
//! never names the resource, the id, or whether the failure was a missing
//! row or someone else's row.

use serde::Serialize;

use crate::domain::resolver::NOT_FOUND_MESSAGE;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    /// The uniform resolution-failure body.
    ///
    /// Takes no arguments on purpose: a missing course, a unit under someone
    /// else's course, and a task with a broken chain all serialize to exactly
    /// this body.
    pub fn not_found() -> Self {
        Self {
            code: "RESOURCE_NOT_FOUND".to_string(),
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn resource_in_use(message: impl Into<String>) -> Self {
        Self {
            code: "RESOURCE_IN_USE".to_string(),
            message: message.into(),
        }
    }

    pub fn profile_exists(message: impl Into<String>) -> Self {
        Self {
            code: "PROFILE_EXISTS".to_string(),
            message: message.into(),
        }
    }

    pub fn profile_not_found(message: impl Into<String>) -> Self {
        Self {
            code: "PROFILE_NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    /// Generic 500 body. Internal details go to the log, never to the client.
    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn error_response_not_found_is_uniform() {
        let error = ErrorResponse::not_found();
        assert_eq!(error.code, "RESOURCE_NOT_FOUND");
        assert_eq!(error.message, "Not found.");
    }

    #[test]
    fn error_response_not_found_serializes_to_fixed_body() {
        let json = serde_json::to_string(&ErrorResponse::not_found()).unwrap();
        assert_eq!(json, r#"{"code":"RESOURCE_NOT_FOUND","message":"Not found."}"#);
    }

    #[test]
    fn error_response_internal_hides_details() {
        let error = ErrorResponse::internal();
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, "An internal error occurred");
    }

    #[test]
    fn error_response_conflict_bodies_carry_codes() {
        assert_eq!(
            ErrorResponse::resource_in_use("Course still has units").code,
            "RESOURCE_IN_USE"
        );
        assert_eq!(
            ErrorResponse::profile_exists("already registered").code,
            "PROFILE_EXISTS"
        );
        assert_eq!(
            ErrorResponse::profile_not_found("no profile").code,
            "PROFILE_NOT_FOUND"
        );
    }
}
