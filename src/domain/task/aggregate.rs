//! Task aggregate entity.
//!
//! Tasks are the leaves of the hierarchy: concrete pieces of work inside a
//! unit. They carry a completion flag and reference only their unit; the
//! owning principal is reached through the full chain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, TaskId, Timestamp, UnitId};

/// Maximum length for a task title.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Task aggregate - a single piece of work within a unit.
///
/// # Invariants
///
/// - `title` is 1-100 characters after trimming
/// - `done` starts false; completing an already-done task is a no-op
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    id: TaskId,

    /// Unit this task belongs to.
    unit_id: UnitId,

    /// Task title, unique within its unit.
    title: String,

    /// Optional due date. Unlike course and unit deadlines this may lie in
    /// the past: tasks are often logged after the fact.
    deadline: Option<NaiveDate>,

    /// Whether the task is finished.
    done: bool,

    /// When the task was created.
    created_at: Timestamp,

    /// When the task was last updated.
    updated_at: Timestamp,
}

impl Task {
    /// Create a new open task.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty or too long
    pub fn new(
        id: TaskId,
        unit_id: UnitId,
        title: String,
        deadline: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            unit_id,
            title,
            deadline,
            done: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a task from persistence (no validation).
    pub fn reconstitute(
        id: TaskId,
        unit_id: UnitId,
        title: String,
        deadline: Option<NaiveDate>,
        done: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            unit_id,
            title,
            deadline,
            done,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the task ID.
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the parent unit ID.
    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    /// Returns the task title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional due date.
    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns whether the task is finished.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns when the task was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the task was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Retitle the task.
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

    /// Set or clear the due date.
    pub fn reschedule(&mut self, deadline: Option<NaiveDate>) {
        self.deadline = deadline;
        self.updated_at = Timestamp::now();
    }

    /// Mark the task finished. Idempotent.
    ///
    /// Returns true if the call changed anything.
    pub fn complete(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        self.updated_at = Timestamp::now();
        true
    }

    /// Reopen a finished task. Idempotent.
    pub fn reopen(&mut self) -> bool {
        if !self.done {
            return false;
        }
        self.done = false;
        self.updated_at = Timestamp::now();
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the task title.
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
}
