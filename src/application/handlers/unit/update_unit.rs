//! UpdateUnitHandler - Command handler for replacing a unit's fields.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::unit::{Unit, UnitError};
use crate::ports::UnitRepository;

/// Command to update a unit. Full replacement: omitting the deadline clears it.
#[derive(Debug, Clone)]
pub struct UpdateUnitCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
    pub title: String,
    pub deadline: Option<NaiveDate>,
}

/// Handler for updating units.
pub struct UpdateUnitHandler {
    resolver: Arc<OwnershipResolver>,
    units: Arc<dyn UnitRepository>,
}

impl UpdateUnitHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, units: Arc<dyn UnitRepository>) -> Self {
        Self { resolver, units }
    }

    pub async fn handle(&self, cmd: UpdateUnitCommand) -> Result<Unit, UnitError> {
        let chain = [ChainLink::new(
            "course_id",
            ResourceKind::Course,
            cmd.course_id,
        )];
        self.resolver
            .resolve(
                &cmd.principal,
                &chain,
                ResourceKind::Unit,
                cmd.unit_id.into(),
            )
            .await?;

        let mut unit = self
            .units
            .find_by_id(&cmd.unit_id)
            .await?
            .ok_or(UnitError::NotFound)?;
        unit.retitle(cmd.title)?;
        unit.reschedule(cmd.deadline)?;

        if self
            .units
            .title_taken(unit.course_id(), unit.title(), Some(unit.id()))
            .await?
        {
            return Err(UnitError::duplicate_title(unit.title()));
        }

        self.units.update(&unit).await?;
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

    fn test_course() -> Course {
        Course::new(
            CourseId::new(),
            principal(),
            "Rust Fundamentals".to_string(),
            future(30),
            future(60),
        )
        .unwrap()
    }

    fn handler_over(store: InMemoryStore) -> UpdateUnitHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        UpdateUnitHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryUnitRepository::new(store)),
        )
    }

    fn command(course_id: CourseId, unit_id: UnitId, title: &str) -> UpdateUnitCommand {
        UpdateUnitCommand {
            principal: principal(),
            course_id,
            unit_id,
            title: title.to_string(),
            deadline: None,
        }
    }

    #[tokio::test]
    async fn replaces_title_and_clears_deadline() {
        let course = test_course();
        let course_id = *course.id();
        let unit = Unit::new(
            UnitId::new(),
            course_id,
            "Week one".to_string(),
            Some(future(7)),
        )
        .unwrap();
        let unit_id = *unit.id();
        let store = InMemoryStore::new().with_course(course).with_unit(unit);
        let handler = handler_over(store.clone());

        let updated = handler
            .handle(command(course_id, unit_id, "Week 1: Basics"))
            .await
            .unwrap();

        assert_eq!(updated.title(), "Week 1: Basics");
        assert!(updated.deadline().is_none());
        assert_eq!(store.unit(&unit_id).unwrap().title(), "Week 1: Basics");
    }

    #[tokio::test]
    async fn retitling_onto_a_sibling_title_conflicts() {
        let course = test_course();
        let course_id = *course.id();
        let keep = Unit::new(UnitId::new(), course_id, "Week one".to_string(), None).unwrap();
        let retitle = Unit::new(UnitId::new(), course_id, "Week two".to_string(), None).unwrap();
        let retitle_id = *retitle.id();
        let handler = handler_over(
            InMemoryStore::new()
                .with_course(course)
                .with_unit(keep)
                .with_unit(retitle),
        );

        let result = handler.handle(command(course_id, retitle_id, "Week one")).await;

        assert_eq!(result, Err(UnitError::DuplicateTitle("Week one".to_string())));
    }

    #[tokio::test]
    async fn keeping_the_same_title_is_not_a_duplicate() {
        let course = test_course();
        let course_id = *course.id();
        let unit = Unit::new(UnitId::new(), course_id, "Week one".to_string(), None).unwrap();
        let unit_id = *unit.id();
        let handler = handler_over(InMemoryStore::new().with_course(course).with_unit(unit));

        let result = handler.handle(command(course_id, unit_id, "Week one")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn foreign_chain_cannot_update() {
        let course = Course::new(
            CourseId::new(),
            UserId::new("auth0|someone-else").unwrap(),
            "Theirs".to_string(),
            future(30),
            future(60),
        )
        .unwrap();
        let course_id = *course.id();
        let unit = Unit::new(UnitId::new(), course_id, "Week one".to_string(), None).unwrap();
        let unit_id = *unit.id();
        let store = InMemoryStore::new().with_course(course).with_unit(unit);
        let handler = handler_over(store.clone());

        let result = handler.handle(command(course_id, unit_id, "Hijacked")).await;

        assert_eq!(result, Err(UnitError::NotFound));
        assert_eq!(store.unit(&unit_id).unwrap().title(), "Week one");
    }
}
