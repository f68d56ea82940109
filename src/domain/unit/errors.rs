//! Unit-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::resolver::{ChainConfigError, ResolveError, NOT_FOUND_MESSAGE};

/// Unit-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Unit or its course could not be resolved. Deliberately carries no
    /// indication of which.
    NotFound,
    /// Course already has a unit with this title.
    DuplicateTitle(String),
    /// Unit still has tasks and cannot be deleted.
    InUse,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Resolver or registry wiring is broken.
    Config(ChainConfigError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl UnitError {
    pub fn not_found() -> Self {
        UnitError::NotFound
    }
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        UnitError::DuplicateTitle(title.into())
    }
    pub fn in_use() -> Self {
        UnitError::InUse
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UnitError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UnitError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            UnitError::NotFound => ErrorCode::ResourceNotFound,
            UnitError::DuplicateTitle(_) => ErrorCode::DuplicateName,
            UnitError::InUse => ErrorCode::ResourceInUse,
            UnitError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UnitError::Config(_) => ErrorCode::ConfigurationError,
            UnitError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            UnitError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            UnitError::DuplicateTitle(title) => {
                format!("This course already has a unit titled {}", title)
            }
            UnitError::InUse => "Unit still has tasks and cannot be deleted".to_string(),
            UnitError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UnitError::Config(err) => err.to_string(),
            UnitError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UnitError {}

impl From<DomainError> for UnitError {
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
                UnitError::ValidationFailed {
                    field,
                    message: err.message,
                }
            }
            ErrorCode::ResourceNotFound => UnitError::NotFound,
            ErrorCode::DuplicateName => UnitError::DuplicateTitle(
                err.details
                    .get("title")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            ErrorCode::ResourceInUse => UnitError::InUse,
            _ => UnitError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ResolveError> for UnitError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => UnitError::NotFound,
            ResolveError::Config(config) => UnitError::Config(config),
            ResolveError::Infrastructure(infra) => UnitError::Infrastructure(infra.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_the_uniform_message() {
        assert_eq!(UnitError::not_found().message(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn duplicate_title_mentions_the_title() {
        let err = UnitError::duplicate_title("Ownership");
        assert_eq!(
            err.message(),
            "This course already has a unit titled Ownership"
        );
    }

    #[test]
    fn resolve_not_found_converts_to_unit_not_found() {
        let err: UnitError = ResolveError::NotFound.into();
        assert_eq!(err, UnitError::NotFound);
    }
}
