//! Authentication adapters.
//!
//! Implementations of the `TokenValidator` port:
//!
//! - `oidc` - Production OIDC implementation (JWKS-backed JWT validation)
//! - `mock` - Test implementation that doesn't require an external provider

mod mock;
mod oidc;

pub use mock::MockTokenValidator;
pub use oidc::{OidcConfig, OidcTokenValidator};
