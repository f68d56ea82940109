//! CreateUnitHandler - Command handler for creating units under a course.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::unit::{Unit, UnitError};
use crate::ports::UnitRepository;

/// Command to create a unit inside one of the caller's courses.
#[derive(Debug, Clone)]
pub struct CreateUnitCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub title: String,
    pub deadline: Option<NaiveDate>,
}

/// Handler for creating units.
pub struct CreateUnitHandler {
    resolver: Arc<OwnershipResolver>,
    units: Arc<dyn UnitRepository>,
}

impl CreateUnitHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, units: Arc<dyn UnitRepository>) -> Self {
        Self { resolver, units }
    }

    pub async fn handle(&self, cmd: CreateUnitCommand) -> Result<Unit, UnitError> {
        // 1. The parent course must be the caller's own
        let chain = [ChainLink::new(
            "course_id",
            ResourceKind::Course,
            cmd.course_id,
        )];
        self.resolver
            .resolve_parents(&cmd.principal, &chain)
            .await?;

        // 2. Build the aggregate (field validation happens here)
        let unit = Unit::new(UnitId::new(), cmd.course_id, cmd.title, cmd.deadline)?;

        // 3. Per-course title uniqueness
        if self
            .units
            .title_taken(&cmd.course_id, unit.title(), None)
            .await?
        {
            return Err(UnitError::duplicate_title(unit.title()));
        }

        // 4. Persist
        self.units.save(&unit).await?;
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryResourceDirectory, InMemoryStore, InMemoryUnitRepository,
    };
    use crate::domain::course::Course;
    use crate::domain::foundation::Timestamp;
    use crate::domain::resolver::RelationRegistry;
    use chrono::Duration;

    fn future(days: i64) -> NaiveDate {
        Timestamp::today() + Duration::days(days)
    }

    fn principal() -> UserId {
        UserId::new("auth0|teacher-1").unwrap()
    }

    fn test_course(owner: &UserId) -> Course {
        Course::new(
            CourseId::new(),
            owner.clone(),
            "Rust Fundamentals".to_string(),
            future(30),
            future(60),
        )
        .unwrap()
    }

    fn handler_over(store: InMemoryStore) -> CreateUnitHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        CreateUnitHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryUnitRepository::new(store)),
        )
    }

    fn command(course_id: CourseId, title: &str) -> CreateUnitCommand {
        CreateUnitCommand {
            principal: principal(),
            course_id,
            title: title.to_string(),
            deadline: None,
        }
    }

    #[tokio::test]
    async fn creates_unit_under_own_course() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let handler = handler_over(store.clone());

        let unit = handler.handle(command(course_id, "Week one")).await.unwrap();

        assert_eq!(unit.title(), "Week one");
        assert_eq!(unit.course_id(), &course_id);
        assert_eq!(store.unit_count(), 1);
    }

    #[tokio::test]
    async fn accepts_future_deadline() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let handler = handler_over(InMemoryStore::new().with_course(course));

        let mut cmd = command(course_id, "Week one");
        cmd.deadline = Some(future(7));
        let unit = handler.handle(cmd).await.unwrap();

        assert_eq!(unit.deadline(), Some(future(7)));
    }

    #[tokio::test]
    async fn rejects_past_deadline() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let handler = handler_over(InMemoryStore::new().with_course(course));

        let mut cmd = command(course_id, "Week one");
        cmd.deadline = Some(future(-1));
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(UnitError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn rejects_duplicate_title_in_same_course() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let handler = handler_over(store.clone());

        handler.handle(command(course_id, "Week one")).await.unwrap();
        let result = handler.handle(command(course_id, "Week one")).await;

        assert_eq!(
            result,
            Err(UnitError::DuplicateTitle("Week one".to_string()))
        );
        assert_eq!(store.unit_count(), 1);
    }

    #[tokio::test]
    async fn allows_same_title_in_different_courses() {
        let first = test_course(&principal());
        let second = Course::new(
            CourseId::new(),
            principal(),
            "Advanced Rust".to_string(),
            future(30),
            future(60),
        )
        .unwrap();
        let first_id = *first.id();
        let second_id = *second.id();
        let store = InMemoryStore::new().with_course(first).with_course(second);
        let handler = handler_over(store.clone());

        handler.handle(command(first_id, "Week one")).await.unwrap();
        let result = handler.handle(command(second_id, "Week one")).await;

        assert!(result.is_ok());
        assert_eq!(store.unit_count(), 2);
    }

    #[tokio::test]
    async fn foreign_course_cannot_receive_units() {
        let course = test_course(&UserId::new("auth0|someone-else").unwrap());
        let course_id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let handler = handler_over(store.clone());

        let result = handler.handle(command(course_id, "Week one")).await;

        assert_eq!(result, Err(UnitError::NotFound));
        assert_eq!(store.unit_count(), 0);
    }

    #[tokio::test]
    async fn missing_course_reads_as_not_found() {
        let handler = handler_over(InMemoryStore::new());

        let result = handler.handle(command(CourseId::new(), "Week one")).await;

        assert_eq!(result, Err(UnitError::NotFound));
    }
}
