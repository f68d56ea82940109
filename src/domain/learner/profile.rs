//! Learner profile entity.
//!
//! One profile per authenticated user. The profile is keyed by the external
//! identity subject rather than a generated ID, so registration is naturally
//! idempotent at the storage layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Maximum length for a learner display name.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Learner profile - per-user registration data.
///
/// # Invariants
///
/// - `display_name` is 1-100 characters after trimming
/// - `birth_date` lies strictly in the past
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Identity subject this profile belongs to.
    user_id: UserId,

    /// Name shown in the UI.
    display_name: String,

    /// Learner's date of birth.
    birth_date: NaiveDate,

    /// When the profile was registered.
    created_at: Timestamp,
}

impl LearnerProfile {
    /// Create a new learner profile.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the display name is empty or too long, or if
    ///   the birth date is today or in the future
    pub fn new(
        user_id: UserId,
        display_name: String,
        birth_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::validate_display_name(&display_name)?;
        Self::validate_birth_date(birth_date)?;

        Ok(Self {
            user_id,
            display_name,
            birth_date,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        user_id: UserId,
        display_name: String,
        birth_date: NaiveDate,
        created_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            display_name,
            birth_date,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the owning user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns when the profile was registered.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the display name.
    fn validate_display_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "display_name",
                "Display name cannot be empty",
            ));
        }
        if trimmed.len() > MAX_DISPLAY_NAME_LENGTH {
            return Err(DomainError::validation(
                "display_name",
                format!(
                    "Display name must be {} characters or less",
                    MAX_DISPLAY_NAME_LENGTH
                ),
            ));
        }
        Ok(())
    }

    /// Validates that the birth date is strictly in the past.
    fn validate_birth_date(birth_date: NaiveDate) -> Result<(), DomainError> {
        if birth_date >= Timestamp::today() {
            return Err(DomainError::validation(
                "birth_date",
                "Birth date must be in the past",
            ));
        }
        Ok(())
    }
}
