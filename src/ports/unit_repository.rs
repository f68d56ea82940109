//! Unit repository port.
//!
//! Defines the contract for persisting and retrieving Unit aggregates.
//!
//! # Design
//!
//! - **Course-scoped**: list queries are always by parent course
//! - **Uniqueness support**: `title_taken` backs the per-course title rule
//! - **Protection support**: `count_by_course` lets course deletion refuse
//!   while units still exist

use crate::domain::foundation::{CourseId, DomainError, UnitId};
use crate::domain::unit::Unit;
use async_trait::async_trait;

/// Repository port for Unit aggregate persistence.
#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// Save a new unit.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, unit: &Unit) -> Result<(), DomainError>;

    /// Update an existing unit.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the unit doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, unit: &Unit) -> Result<(), DomainError>;

    /// Find a unit by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UnitId) -> Result<Option<Unit>, DomainError>;

    /// Find all units belonging to a course, ordered by title.
    async fn find_by_course(&self, course_id: &CourseId) -> Result<Vec<Unit>, DomainError>;

    /// Check whether a course already has a unit with this title.
    ///
    /// `exclude` skips one unit (the one being updated) from the check.
    async fn title_taken(
        &self,
        course_id: &CourseId,
        title: &str,
        exclude: Option<&UnitId>,
    ) -> Result<bool, DomainError>;

    /// Count units belonging to a course.
    async fn count_by_course(&self, course_id: &CourseId) -> Result<u32, DomainError>;

    /// Delete a unit.
    ///
    /// Callers must refuse deletion while tasks still reference the unit;
    /// implementations back that rule with a referential constraint.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the unit doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &UnitId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn unit_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UnitRepository) {}
    }
}
