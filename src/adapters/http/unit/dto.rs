//! HTTP DTOs for unit endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::unit::Unit;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnitRequest {
    pub title: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Request to update a unit. PUT semantics: every field is required, an
/// absent deadline clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUnitRequest {
    pub title: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Unit view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UnitResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Unit> for UnitResponse {
    fn from(unit: Unit) -> Self {
        Self {
            id: unit.id().to_string(),
            course_id: unit.course_id().to_string(),
            title: unit.title().to_string(),
            deadline: unit.deadline(),
            created_at: unit.created_at().as_datetime().to_rfc3339(),
            updated_at: unit.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CourseId, UnitId};

    #[test]
    fn create_unit_request_deserializes_without_deadline() {
        let json = r#"{"title": "Ownership"}"#;
        let req: CreateUnitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Ownership");
        assert!(req.deadline.is_none());
    }

    #[test]
    fn create_unit_request_deserializes_with_deadline() {
        let json = r#"{"title": "Ownership", "deadline": "2099-03-15"}"#;
        let req: CreateUnitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.deadline, NaiveDate::from_ymd_opt(2099, 3, 15));
    }

    #[test]
    fn unit_response_conversion() {
        let unit = Unit::new(
            UnitId::new(),
            CourseId::new(),
            "Borrowing".to_string(),
            None,
        )
        .unwrap();

        let response: UnitResponse = unit.into();
        assert_eq!(response.title, "Borrowing");
        assert!(response.deadline.is_none());
    }

    #[test]
    fn unit_response_omits_null_deadline() {
        let unit = Unit::new(
            UnitId::new(),
            CourseId::new(),
            "Borrowing".to_string(),
            None,
        )
        .unwrap();

        let response: UnitResponse = unit.into();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("deadline").is_none());
    }
}
