//! Mock authentication adapter for testing.
//!
//! Implements the `TokenValidator` port for use in tests, avoiding the need
//! for a real OIDC provider.
//!
//! # Example
//!
//! ```ignore
//! use learntrack::adapters::auth::MockTokenValidator;
//! use learntrack::domain::foundation::{Principal, UserId};
//!
//! // Create a validator that accepts specific tokens
//! let validator = MockTokenValidator::new()
//!     .with_principal("valid-token", Principal::new(
//!         UserId::new("user-123").unwrap(),
//!         "learner@example.com",
//!         Some("Test Learner".to_string()),
//!     ));
//!
//! // Use in tests
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Principal, UserId};
use crate::ports::TokenValidator;

/// Mock token validator for testing.
///
/// Stores a map of tokens to principals. Tokens not in the map return
/// `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockTokenValidator {
    /// Map of valid tokens to their associated principals
    tokens: RwLock<HashMap<String, Principal>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a principal.
    ///
    /// When `validate()` is called with this token, it returns the associated
    /// principal.
    pub fn with_principal(self, token: impl Into<String>, principal: Principal) -> Self {
        self.tokens.write().unwrap().insert(token.into(), principal);
        self
    }

    /// Adds a valid token with a simple test principal.
    ///
    /// Convenience method that creates a principal with the given ID.
    pub fn with_test_principal(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let principal = Principal::new(
            UserId::new(&user_id).unwrap(),
            format!("{}@test.example.com", user_id),
            Some(format!("Test Learner {}", user_id)),
        );
        self.with_principal(token, principal)
    }

    /// Forces all validations to return the specified error.
    ///
    /// Useful for testing error handling paths.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, principal: Principal) {
        self.tokens.write().unwrap().insert(token.into(), principal);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.read().unwrap().len()
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        // Check for forced error
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        // Look up the token
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
