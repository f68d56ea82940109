//! Learner profile repository port.
//!
//! Defines the contract for persisting learner registration profiles.
//!
//! # Design
//!
//! - **Keyed by principal**: one profile per token subject, no separate
//!   profile identifier
//! - **No credentials**: token issuance lives in the external identity
//!   provider; this stores registration data only

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::learner::LearnerProfile;
use async_trait::async_trait;

/// Repository port for learner profile persistence.
#[async_trait]
pub trait LearnerRepository: Send + Sync {
    /// Save a new profile.
    ///
    /// # Errors
    ///
    /// - `ProfileExists` if the principal already registered
    /// - `DatabaseError` on persistence failure
    async fn save(&self, profile: &LearnerProfile) -> Result<(), DomainError>;

    /// Find the profile registered for a principal.
    ///
    /// Returns `None` if the principal never registered.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, DomainError>;

    /// Check whether a principal already registered.
    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError>;
}
