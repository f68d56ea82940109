//! Learner-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Learner profile errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnerError {
    /// The caller already registered a profile.
    AlreadyRegistered,
    /// The caller has not registered a profile yet.
    NotRegistered,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl LearnerError {
    pub fn already_registered() -> Self {
        LearnerError::AlreadyRegistered
    }
    pub fn not_registered() -> Self {
        LearnerError::NotRegistered
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LearnerError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        LearnerError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            LearnerError::AlreadyRegistered => ErrorCode::ProfileExists,
            LearnerError::NotRegistered => ErrorCode::ProfileNotFound,
            LearnerError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            LearnerError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            LearnerError::AlreadyRegistered => {
                "A profile is already registered for this user".to_string()
            }
            LearnerError::NotRegistered => "No profile registered for this user".to_string(),
            LearnerError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            LearnerError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for LearnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LearnerError {}

impl From<DomainError> for LearnerError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::TooLong
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidDeadline => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                LearnerError::ValidationFailed {
                    field,
                    message: err.message,
                }
            }
            ErrorCode::ProfileExists => LearnerError::AlreadyRegistered,
            ErrorCode::ProfileNotFound => LearnerError::NotRegistered,
            _ => LearnerError::Infrastructure(err.to_string()),
        }
    }
}
