//! Course repository port.
//!
//! Defines the contract for persisting and retrieving Course aggregates.
//!
//! # Design
//!
//! - **Owner-scoped**: list queries are always by owner
//! - **Uniqueness support**: `name_taken` backs the per-owner name rule
//! - **No authorization**: ownership checks happen in chain resolution,
//!   before a repository is ever touched

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for Course aggregate persistence.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Save a new course.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, course: &Course) -> Result<(), DomainError>;

    /// Update an existing course.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the course doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, course: &Course) -> Result<(), DomainError>;

    /// Find a course by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Find all courses owned by a principal, ordered by name.
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Course>, DomainError>;

    /// Check whether an owner already has a course with this name.
    ///
    /// `exclude` skips one course (the one being updated) from the check.
    async fn name_taken(
        &self,
        owner: &UserId,
        name: &str,
        exclude: Option<&CourseId>,
    ) -> Result<bool, DomainError>;

    /// Delete a course.
    ///
    /// Callers must refuse deletion while units still reference the course;
    /// implementations back that rule with a referential constraint.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the course doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn course_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CourseRepository) {}
    }
}
