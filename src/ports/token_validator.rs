//! Token validation port for JWT bearer tokens.
//!
//! This port defines the contract for validating access tokens and extracting
//! the principal. It is provider-agnostic - the application never mints
//! tokens; login and logout live entirely in the external identity provider.
//!
//! # Security Requirements
//!
//! All implementations MUST validate:
//! - **Issuer (iss)**: Token must come from the expected auth provider
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Principal};

/// Validates access tokens and extracts the principal.
///
/// This is the primary port for authentication. HTTP middleware uses this
/// to validate Bearer tokens before any resolution takes place.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Validate issuer, audience, and expiry claims
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate a JWT access token and return the authenticated principal.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw JWT token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<Principal, AuthError>;
}
