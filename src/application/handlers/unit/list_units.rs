//! ListUnitsHandler - Query handler for the units of one course.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::unit::{Unit, UnitError};
use crate::ports::UnitRepository;

/// Query for all units of a course.
#[derive(Debug, Clone)]
pub struct ListUnitsQuery {
    pub principal: UserId,
    pub course_id: CourseId,
}

/// Handler for listing units.
pub struct ListUnitsHandler {
    resolver: Arc<OwnershipResolver>,
    units: Arc<dyn UnitRepository>,
}

impl ListUnitsHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, units: Arc<dyn UnitRepository>) -> Self {
        Self { resolver, units }
    }

    pub async fn handle(&self, query: ListUnitsQuery) -> Result<Vec<Unit>, UnitError> {
        let chain = [ChainLink::new(
            "course_id",
            ResourceKind::Course,
            query.course_id,
        )];
        self.resolver
            .resolve_parents(&query.principal, &chain)
            .await?;

        Ok(self.units.find_by_course(&query.course_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryResourceDirectory, InMemoryStore, InMemoryUnitRepository,
    };
    use crate::domain::course::Course;
    use crate::domain::foundation::{Timestamp, UnitId};
    use crate::domain::resolver::RelationRegistry;
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

    fn unit_in(course_id: CourseId, title: &str) -> Unit {
        Unit::new(UnitId::new(), course_id, title.to_string(), None).unwrap()
    }

    fn handler_over(store: InMemoryStore) -> ListUnitsHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        ListUnitsHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryUnitRepository::new(store)),
        )
    }

    #[tokio::test]
    async fn lists_units_of_own_course_sorted_by_title() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let other_course = CourseId::new();
        let store = InMemoryStore::new()
            .with_course(course)
            .with_unit(unit_in(course_id, "Week two"))
            .with_unit(unit_in(course_id, "Week one"))
            .with_unit(unit_in(other_course, "Elsewhere"));
        let handler = handler_over(store);

        let units = handler
            .handle(ListUnitsQuery {
                principal: principal(),
                course_id,
            })
            .await
            .unwrap();

        let titles: Vec<&str> = units.iter().map(|u| u.title()).collect();
        assert_eq!(titles, vec!["Week one", "Week two"]);
    }

    #[tokio::test]
    async fn foreign_course_reads_as_not_found() {
        let course = test_course(&UserId::new("auth0|someone-else").unwrap());
        let course_id = *course.id();
        let handler = handler_over(InMemoryStore::new().with_course(course));

        let result = handler
            .handle(ListUnitsQuery {
                principal: principal(),
                course_id,
            })
            .await;

        assert_eq!(result, Err(UnitError::NotFound));
    }

    #[tokio::test]
    async fn empty_course_lists_nothing() {
        let course = test_course(&principal());
        let course_id = *course.id();
        let handler = handler_over(InMemoryStore::new().with_course(course));

        let units = handler
            .handle(ListUnitsQuery {
                principal: principal(),
                course_id,
            })
            .await
            .unwrap();

        assert!(units.is_empty());
    }
}
