//! Course-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::resolver::{ChainConfigError, ResolveError, NOT_FOUND_MESSAGE};

/// Course-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// Course could not be resolved. Deliberately carries no cause.
    NotFound,
    /// Owner already has a course with this name.
    DuplicateName(String),
    /// Course still has units and cannot be deleted.
    InUse,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Resolver or registry wiring is broken.
    Config(ChainConfigError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CourseError {
    pub fn not_found() -> Self {
        CourseError::NotFound
    }
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        CourseError::DuplicateName(name.into())
    }
    pub fn in_use() -> Self {
        CourseError::InUse
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CourseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CourseError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CourseError::NotFound => ErrorCode::ResourceNotFound,
            CourseError::DuplicateName(_) => ErrorCode::DuplicateName,
            CourseError::InUse => ErrorCode::ResourceInUse,
            CourseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CourseError::Config(_) => ErrorCode::ConfigurationError,
            CourseError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            CourseError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            CourseError::DuplicateName(name) => {
                format!("You already have a course named {}", name)
            }
            CourseError::InUse => "Course still has units and cannot be deleted".to_string(),
            CourseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CourseError::Config(err) => err.to_string(),
            CourseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CourseError {}

impl From<DomainError> for CourseError {
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
                CourseError::ValidationFailed {
                    field,
                    message: err.message,
                }
            }
            ErrorCode::ResourceNotFound => CourseError::NotFound,
            ErrorCode::DuplicateName => CourseError::DuplicateName(
                err.details
                    .get("name")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            ErrorCode::ResourceInUse => CourseError::InUse,
            _ => CourseError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ResolveError> for CourseError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => CourseError::NotFound,
            ResolveError::Config(config) => CourseError::Config(config),
            ResolveError::Infrastructure(infra) => CourseError::Infrastructure(infra.to_string()),
        }
    }
}
