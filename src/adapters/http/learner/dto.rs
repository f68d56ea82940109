//! HTTP DTOs for learner profile endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::learner::LearnerProfile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register a learner profile. The principal id comes from the
/// bearer token, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterLearnerRequest {
    pub display_name: String,
    pub birth_date: NaiveDate,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Learner profile view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct LearnerResponse {
    pub user_id: String,
    pub display_name: String,
    pub birth_date: NaiveDate,
    pub created_at: String,
}

impl From<LearnerProfile> for LearnerResponse {
    fn from(profile: LearnerProfile) -> Self {
        Self {
            user_id: profile.user_id().to_string(),
            display_name: profile.display_name().to_string(),
            birth_date: profile.birth_date(),
            created_at: profile.created_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn register_learner_request_deserializes() {
        let json = r#"{"display_name": "Alice", "birth_date": "2001-05-20"}"#;
        let req: RegisterLearnerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.display_name, "Alice");
        assert_eq!(req.birth_date, NaiveDate::from_ymd_opt(2001, 5, 20).unwrap());
    }

    #[test]
    fn register_learner_request_requires_birth_date() {
        let json = r#"{"display_name": "Alice"}"#;
        assert!(serde_json::from_str::<RegisterLearnerRequest>(json).is_err());
    }

    #[test]
    fn learner_response_conversion() {
        let profile = LearnerProfile::new(
            UserId::new("user-123").unwrap(),
            "Alice".to_string(),
            NaiveDate::from_ymd_opt(2001, 5, 20).unwrap(),
        )
        .unwrap();

        let response: LearnerResponse = profile.into();
        assert_eq!(response.user_id, "user-123");
        assert_eq!(response.display_name, "Alice");
    }
}
