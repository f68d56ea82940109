//! DeleteCourseHandler - Command handler for deleting empty courses.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::course::CourseError;
use crate::domain::foundation::{CourseId, UserId};
use crate::domain::resolver::ResourceKind;
use crate::ports::{CourseRepository, UnitRepository};

/// Command to delete a course.
#[derive(Debug, Clone)]
pub struct DeleteCourseCommand {
    pub principal: UserId,
    pub course_id: CourseId,
}

/// Handler for deleting courses.
///
/// Deletion is refused while units still hang off the course. The repository
/// enforces the same rule with a referential constraint, so the pre-check
/// here exists to produce the specific error rather than a storage failure.
pub struct DeleteCourseHandler {
    resolver: Arc<OwnershipResolver>,
    courses: Arc<dyn CourseRepository>,
    units: Arc<dyn UnitRepository>,
}

impl DeleteCourseHandler {
    pub fn new(
        resolver: Arc<OwnershipResolver>,
        courses: Arc<dyn CourseRepository>,
        units: Arc<dyn UnitRepository>,
    ) -> Self {
        Self {
            resolver,
            courses,
            units,
        }
    }

    pub async fn handle(&self, cmd: DeleteCourseCommand) -> Result<(), CourseError> {
        self.resolver
            .resolve(
                &cmd.principal,
                &[],
                ResourceKind::Course,
                cmd.course_id.into(),
            )
            .await?;

        if self.units.count_by_course(&cmd.course_id).await? > 0 {
            return Err(CourseError::InUse);
        }

        self.courses.delete(&cmd.course_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCourseRepository, InMemoryResourceDirectory, InMemoryStore, InMemoryUnitRepository,
    };
    use crate::domain::course::Course;
    use crate::domain::foundation::{Timestamp, UnitId};
    use crate::domain::resolver::RelationRegistry;
    use crate::domain::unit::Unit;
    use chrono::Duration;

    fn principal() -> UserId {
        UserId::new("auth0|teacher-1").unwrap()
    }

    fn test_course(owner: &UserId) -> Course {
        Course::new(
            CourseId::new(),
            owner.clone(),
            "Rust Fundamentals".to_string(),
            Timestamp::today() + Duration::days(30),
            Timestamp::today() + Duration::days(60),
        )
        .unwrap()
    }

    fn handler_over(store: InMemoryStore) -> DeleteCourseHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        DeleteCourseHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryCourseRepository::new(store.clone())),
            Arc::new(InMemoryUnitRepository::new(store)),
        )
    }

    #[tokio::test]
    async fn deletes_empty_course() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let handler = handler_over(store.clone());

        handler
            .handle(DeleteCourseCommand {
                principal: principal(),
                course_id,
            })
            .await
            .unwrap();

        assert_eq!(store.course_count(), 0);
    }

    #[tokio::test]
    async fn refuses_course_that_still_has_units() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let unit = Unit::new(UnitId::new(), course_id, "Week one".to_string(), None).unwrap();
        let store = InMemoryStore::new().with_course(course).with_unit(unit);
        let handler = handler_over(store.clone());

        let result = handler
            .handle(DeleteCourseCommand {
                principal: principal(),
                course_id,
            })
            .await;

        assert_eq!(result, Err(CourseError::InUse));
        assert_eq!(store.course_count(), 1);
    }

    #[tokio::test]
    async fn foreign_course_cannot_be_deleted() {
        let course = test_course(&UserId::new("auth0|someone-else").unwrap());
        let course_id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let handler = handler_over(store.clone());

        let result = handler
            .handle(DeleteCourseCommand {
                principal: principal(),
                course_id,
            })
            .await;

        assert_eq!(result, Err(CourseError::NotFound));
        assert_eq!(store.course_count(), 1);
    }
}
