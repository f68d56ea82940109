//! Course aggregate entity.
//!
//! Courses are the top-level container for learning material. Each course
//! belongs to one principal and carries two planning deadlines; units nest
//! under it and tasks under those.
//!
//! # Ownership
//!
//! The course is the only kind with a direct owner reference. Everything
//! below it derives ownership through the chain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Timestamp, UserId};

/// Maximum length for a course name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Course aggregate - an owned container of units.
///
/// # Invariants
///
/// - `name` is 1-100 characters after trimming
/// - `final_deadline` lies strictly in the future when set
/// - `mid_deadline` lies strictly before `final_deadline`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for this course.
    id: CourseId,

    /// Principal who owns this course.
    owner_id: UserId,

    /// Course name, unique per owner.
    name: String,

    /// Midpoint deadline, before the final one.
    mid_deadline: NaiveDate,

    /// Final deadline for the whole course.
    final_deadline: NaiveDate,

    /// When the course was created.
    created_at: Timestamp,

    /// When the course was last updated.
    updated_at: Timestamp,
}

impl Course {
    /// Create a new course.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty or too long
    /// - `InvalidDeadline` if the deadlines violate the ordering rules
    pub fn new(
        id: CourseId,
        owner_id: UserId,
        name: String,
        mid_deadline: NaiveDate,
        final_deadline: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_deadlines(mid_deadline, final_deadline)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner_id,
            name,
            mid_deadline,
            final_deadline,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a course from persistence (no validation).
    pub fn reconstitute(
        id: CourseId,
        owner_id: UserId,
        name: String,
        mid_deadline: NaiveDate,
        final_deadline: NaiveDate,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            mid_deadline,
            final_deadline,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the course ID.
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the midpoint deadline.
    pub fn mid_deadline(&self) -> NaiveDate {
        self.mid_deadline
    }

    /// Returns the final deadline.
    pub fn final_deadline(&self) -> NaiveDate {
        self.final_deadline
    }

    /// Returns when the course was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the course was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rename the course.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty or too long
    pub fn rename(&mut self, new_name: String) -> Result<(), DomainError> {
        Self::validate_name(&new_name)?;

        self.name = new_name;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Move both deadlines.
    ///
    /// # Errors
    ///
    /// - `InvalidDeadline` if the new deadlines violate the ordering rules
    pub fn reschedule(
        &mut self,
        mid_deadline: NaiveDate,
        final_deadline: NaiveDate,
    ) -> Result<(), DomainError> {
        Self::validate_deadlines(mid_deadline, final_deadline)?;

        self.mid_deadline = mid_deadline;
        self.final_deadline = final_deadline;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the course name.
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Name must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    /// Validates the deadline pair.
    fn validate_deadlines(mid: NaiveDate, last: NaiveDate) -> Result<(), DomainError> {
        if last <= Timestamp::today() {
            return Err(DomainError::new(
                ErrorCode::InvalidDeadline,
                "Final deadline must be in the future",
            )
            .with_detail("field", "final_deadline"));
        }
        if mid >= last {
            return Err(DomainError::new(
                ErrorCode::InvalidDeadline,
                "Mid deadline must be before the final deadline",
            )
            .with_detail("field", "mid_deadline"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn future(days: i64) -> NaiveDate {
        Timestamp::today() + Duration::days(days)
    }

    fn test_course() -> Course {
        Course::new(
            CourseId::new(),
            test_user_id(),
            "Rust Fundamentals".to_string(),
            future(30),
            future(60),
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_course_keeps_fields() {
        let course = test_course();
        assert_eq!(course.name(), "Rust Fundamentals");
        assert_eq!(course.owner_id(), &test_user_id());
        assert_eq!(course.mid_deadline(), future(30));
        assert_eq!(course.final_deadline(), future(60));
    }

    #[test]
    fn new_course_rejects_empty_name() {
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            "".to_string(),
            future(30),
            future(60),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_course_rejects_whitespace_name() {
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            "   ".to_string(),
            future(30),
            future(60),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_course_rejects_too_long_name() {
        let long_name = "x".repeat(MAX_NAME_LENGTH + 1);
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            long_name,
            future(30),
            future(60),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_course_rejects_past_final_deadline() {
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            "History".to_string(),
            future(-60),
            future(-30),
        );
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDeadline);
        assert!(err.message.contains("future"));
    }

    #[test]
    fn new_course_rejects_final_deadline_today() {
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            "History".to_string(),
            future(-1),
            Timestamp::today(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_course_rejects_mid_after_final() {
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            "History".to_string(),
            future(60),
            future(30),
        );
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDeadline);
        assert!(err.message.contains("before"));
    }

    #[test]
    fn new_course_rejects_mid_equal_to_final() {
        let result = Course::new(
            CourseId::new(),
            test_user_id(),
            "History".to_string(),
            future(30),
            future(30),
        );
        assert!(result.is_err());
    }

    // Mutation tests

    #[test]
    fn rename_replaces_name() {
        let mut course = test_course();
        course.rename("Advanced Rust".to_string()).unwrap();
        assert_eq!(course.name(), "Advanced Rust");
    }

    #[test]
    fn rename_rejects_empty_name() {
        let mut course = test_course();
        assert!(course.rename("".to_string()).is_err());
        assert_eq!(course.name(), "Rust Fundamentals");
    }

    #[test]
    fn reschedule_moves_both_deadlines() {
        let mut course = test_course();
        course.reschedule(future(10), future(20)).unwrap();
        assert_eq!(course.mid_deadline(), future(10));
        assert_eq!(course.final_deadline(), future(20));
    }

    #[test]
    fn reschedule_rejects_inverted_deadlines() {
        let mut course = test_course();
        assert!(course.reschedule(future(20), future(10)).is_err());
        assert_eq!(course.mid_deadline(), future(30));
    }
}
