//! In-memory resource directory over the shared store.

use async_trait::async_trait;

use crate::domain::foundation::{CourseId, DomainError, TaskId, UnitId};
use crate::domain::resolver::{LookupFilter, ResourceKind, ResourceRecord};
use crate::ports::ResourceDirectory;

use super::store::{InMemoryStore, State};

/// Resource directory that answers constrained lookups from the store.
///
/// Applies the filter the way the database adapter applies WHERE clauses: a
/// record failing an owner or parent constraint is reported as absent, not
/// as present-but-mismatched.
pub struct InMemoryResourceDirectory {
    store: InMemoryStore,
}

impl InMemoryResourceDirectory {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

/// Projects a stored entity into the resolver's record shape.
fn record_for(state: &State, kind: ResourceKind, filter: &LookupFilter) -> Option<ResourceRecord> {
    let uuid = *filter.id.as_uuid();
    match kind {
        ResourceKind::Course => state.courses.get(&CourseId::from_uuid(uuid)).map(|course| {
            ResourceRecord::new(kind, *course.id(), Some(course.owner_id().clone()), None)
        }),
        ResourceKind::Unit => state
            .units
            .get(&UnitId::from_uuid(uuid))
            .map(|unit| ResourceRecord::new(kind, *unit.id(), None, Some((*unit.course_id()).into()))),
        ResourceKind::Task => state
            .tasks
            .get(&TaskId::from_uuid(uuid))
            .map(|task| ResourceRecord::new(kind, *task.id(), None, Some((*task.unit_id()).into()))),
    }
}

fn matches(record: &ResourceRecord, filter: &LookupFilter) -> bool {
    let owner_ok = filter
        .owner
        .as_ref()
        .map_or(true, |owner| record.owner.as_ref() == Some(owner));
    let parent_ok = filter
        .parent
        .map_or(true, |parent| record.parent == Some(parent));
    owner_ok && parent_ok
}

#[async_trait]
impl ResourceDirectory for InMemoryResourceDirectory {
    async fn find(
        &self,
        kind: ResourceKind,
        filter: &LookupFilter,
    ) -> Result<Option<ResourceRecord>, DomainError> {
        self.store.read(|state| {
            record_for(state, kind, filter).filter(|record| matches(record, filter))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Course;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::unit::Unit;
    use chrono::Duration;

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn test_course(owner: &UserId) -> Course {
        Course::new(
            CourseId::new(),
            owner.clone(),
            "Chemistry".to_string(),
            Timestamp::today() + Duration::days(30),
            Timestamp::today() + Duration::days(60),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn finds_course_constrained_to_its_owner() {
        let course = test_course(&owner());
        let id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let directory = InMemoryResourceDirectory::new(store);

        let filter = LookupFilter::by_id(id).with_owner(owner());
        let found = directory.find(ResourceKind::Course, &filter).await.unwrap();

        assert!(found.is_some());
    }

    #[tokio::test]
    async fn owner_mismatch_reports_absent() {
        let course = test_course(&owner());
        let id = *course.id();
        let store = InMemoryStore::new().with_course(course);
        let directory = InMemoryResourceDirectory::new(store);

        let filter = LookupFilter::by_id(id).with_owner(UserId::new("someone-else").unwrap());
        let found = directory.find(ResourceKind::Course, &filter).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn parent_mismatch_reports_absent() {
        let course = test_course(&owner());
        let course_id = *course.id();
        let unit = Unit::new(UnitId::new(), course_id, "Week one".to_string(), None).unwrap();
        let unit_id = *unit.id();
        let store = InMemoryStore::new().with_course(course).with_unit(unit);
        let directory = InMemoryResourceDirectory::new(store);

        let right = LookupFilter::by_id(unit_id).with_parent(course_id.into());
        assert!(directory
            .find(ResourceKind::Unit, &right)
            .await
            .unwrap()
            .is_some());

        let wrong = LookupFilter::by_id(unit_id).with_parent(CourseId::new().into());
        assert!(directory
            .find(ResourceKind::Unit, &wrong)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn injected_failure_propagates() {
        let store = InMemoryStore::new().with_failure("Simulated outage");
        let directory = InMemoryResourceDirectory::new(store);

        let filter = LookupFilter::by_id(CourseId::new());
        let result = directory.find(ResourceKind::Course, &filter).await;

        assert!(result.is_err());
    }
}
