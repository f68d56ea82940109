//! Authentication types for the domain layer.
//!
//! These types represent the authenticated principal extracted from a JWT
//! token. They have **no external dependencies** - any OIDC provider can
//! populate them via the `TokenValidator` port.
//!
//! # Design Decisions
//!
//! - `Principal` contains only the claims the application actually uses
//! - `AuthError` is domain-centric, not provider-specific
//! - Types are `Clone` for easy use in request handlers
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after JWT validation:
//! let principal = Principal {
//!     id: UserId::new("user-123")?,
//!     email: "learner@example.com".to_string(),
//!     display_name: Some("Alice".to_string()),
//! };
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(principal);
//! ```

use super::UserId;
use thiserror::Error;

/// Authenticated principal extracted from a validated JWT.
///
/// This is a **domain type** with no provider dependencies. The principal is
/// the root of every ownership chain: courses belong to it directly, units
/// and tasks belong to it through their parents.
#[derive(Debug, Clone)]
pub struct Principal {
    /// The unique user identifier from the auth provider (token subject).
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available (may come from `name` or `preferred_username` claim).
    pub display_name: Option<String>,
}

impl Principal {
    /// Creates a new principal.
    ///
    /// This is typically called by the `TokenValidator` adapter after
    /// successfully validating a JWT token.
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
        }
    }

    /// Returns the principal's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors that can occur during token validation.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the auth provider's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
