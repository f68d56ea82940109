//! Task repository port.
//!
//! Defines the contract for persisting and retrieving Task aggregates.
//!
//! # Design
//!
//! - **Unit-scoped**: list queries are always by parent unit
//! - **Uniqueness support**: `title_taken` backs the per-unit title rule

use crate::domain::foundation::{DomainError, TaskId, UnitId};
use crate::domain::task::Task;
use async_trait::async_trait;

/// Repository port for Task aggregate persistence.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Save a new task.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, task: &Task) -> Result<(), DomainError>;

    /// Update an existing task.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the task doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, task: &Task) -> Result<(), DomainError>;

    /// Find a task by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError>;

    /// Find all tasks belonging to a unit, ordered by title.
    async fn find_by_unit(&self, unit_id: &UnitId) -> Result<Vec<Task>, DomainError>;

    /// Check whether a unit already has a task with this title.
    ///
    /// `exclude` skips one task (the one being updated) from the check.
    async fn title_taken(
        &self,
        unit_id: &UnitId,
        title: &str,
        exclude: Option<&TaskId>,
    ) -> Result<bool, DomainError>;

    /// Count tasks belonging to a unit.
    async fn count_by_unit(&self, unit_id: &UnitId) -> Result<u32, DomainError>;

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the task doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &TaskId) -> Result<(), DomainError>;
}
