//! Task-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::resolver::{ChainConfigError, ResolveError, NOT_FOUND_MESSAGE};

/// Task-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task could not be resolved. Deliberately carries no cause.
    NotFound,
    /// Unit already has a task with this title.
    DuplicateTitle(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Resolver or registry wiring is broken.
    Config(ChainConfigError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl TaskError {
    pub fn not_found() -> Self {
        TaskError::NotFound
    }
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        TaskError::DuplicateTitle(title.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TaskError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TaskError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TaskError::NotFound => ErrorCode::ResourceNotFound,
            TaskError::DuplicateTitle(_) => ErrorCode::DuplicateName,
            TaskError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TaskError::Config(_) => ErrorCode::ConfigurationError,
            TaskError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TaskError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            TaskError::DuplicateTitle(title) => {
                format!("This unit already has a task titled {}", title)
            }
            TaskError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TaskError::Config(err) => err.to_string(),
            TaskError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TaskError {}

impl From<DomainError> for TaskError {
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
                TaskError::ValidationFailed {
                    field,
                    message: err.message,
                }
            }
            ErrorCode::ResourceNotFound => TaskError::NotFound,
            ErrorCode::DuplicateName => TaskError::DuplicateTitle(
                err.details
                    .get("title")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            _ => TaskError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ResolveError> for TaskError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => TaskError::NotFound,
            ResolveError::Config(config) => TaskError::Config(config),
            ResolveError::Infrastructure(infra) => TaskError::Infrastructure(infra.to_string()),
        }
    }
}
