//! Unit aggregate entity.
//!
//! Units split a course into teachable chunks. Each unit belongs to exactly
//! one course and never references its owner directly; access always flows
//! through the parent course.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Timestamp, UnitId};

/// Maximum length for a unit title.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Unit aggregate - a chunk of a course.
///
/// # Invariants
///
/// - `title` is 1-100 characters after trimming
/// - `deadline`, when present, lies strictly in the future at the time it
///   is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier for this unit.
    id: UnitId,

    /// Course this unit belongs to.
    course_id: CourseId,

    /// Unit title, unique within its course.
    title: String,

    /// Optional completion deadline.
    deadline: Option<NaiveDate>,

    /// When the unit was created.
    created_at: Timestamp,

    /// When the unit was last updated.
    updated_at: Timestamp,
}

impl Unit {
    /// Create a new unit.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty or too long
    /// - `InvalidDeadline` if a deadline is supplied and not in the future
    pub fn new(
        id: UnitId,
        course_id: CourseId,
        title: String,
        deadline: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_deadline(deadline)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            course_id,
            title,
            deadline,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a unit from persistence (no validation).
    pub fn reconstitute(
        id: UnitId,
        course_id: CourseId,
        title: String,
        deadline: Option<NaiveDate>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            course_id,
            title,
            deadline,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the unit ID.
    pub fn id(&self) -> &UnitId {
        &self.id
    }

    /// Returns the parent course ID.
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Returns the unit title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional deadline.
    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns when the unit was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the unit was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Retitle the unit.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty or too long
    pub fn retitle(&mut self, new_title: String) -> Result<(), DomainError> {
        Self::validate_title(&new_title)?;

        self.title = new_title;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Set or clear the deadline.
    ///
    /// # Errors
    ///
    /// - `InvalidDeadline` if a deadline is supplied and not in the future
    pub fn reschedule(&mut self, deadline: Option<NaiveDate>) -> Result<(), DomainError> {
        Self::validate_deadline(deadline)?;

        self.deadline = deadline;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the unit title.
    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }

    /// Validates the optional deadline.
    fn validate_deadline(deadline: Option<NaiveDate>) -> Result<(), DomainError> {
        if let Some(date) = deadline {
            if date <= Timestamp::today() {
                return Err(DomainError::new(
                    ErrorCode::InvalidDeadline,
                    "Deadline must be in the future",
                )
                .with_detail("field", "deadline"));
            }
        }
        Ok(())
    }
}
