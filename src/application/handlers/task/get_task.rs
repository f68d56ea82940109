//! GetTaskHandler - Query handler for a single task reached through the
//! full course and unit chain.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, TaskId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Query for one task by ID, addressed through its unit and course.
#[derive(Debug, Clone)]
pub struct GetTaskQuery {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
    pub task_id: TaskId,
}

/// Handler for fetching a task.
pub struct GetTaskHandler {
    resolver: Arc<OwnershipResolver>,
    tasks: Arc<dyn TaskRepository>,
}

impl GetTaskHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { resolver, tasks }
    }

    pub async fn handle(&self, query: GetTaskQuery) -> Result<Task, TaskError> {
        let chain = [
            ChainLink::new("course_id", ResourceKind::Course, query.course_id),
            ChainLink::new("unit_id", ResourceKind::Unit, query.unit_id),
        ];
        self.resolver
            .resolve(
                &query.principal,
                &chain,
                ResourceKind::Task,
                query.task_id.into(),
            )
            .await?;

        self.tasks
            .find_by_id(&query.task_id)
            .await?
            .ok_or(TaskError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryResourceDirectory, InMemoryStore, InMemoryTaskRepository,
    };
    use crate::domain::course::Course;
    use crate::domain::foundation::Timestamp;
    use crate::domain::resolver::RelationRegistry;
    use crate::domain::unit::Unit;
    use chrono::Duration;

    fn principal() -> UserId {
        UserId::new("auth0|teacher-1").unwrap()
    }

    struct Fixture {
        store: InMemoryStore,
        course_id: CourseId,
        unit_id: UnitId,
        task_id: TaskId,
    }

    fn fixture_for(owner: &UserId) -> Fixture {
        let course = Course::new(
            CourseId::new(),
            owner.clone(),
            "Rust Fundamentals".to_string(),
            Timestamp::today() + Duration::days(30),
            Timestamp::today() + Duration::days(60),
        )
        .unwrap();
        let course_id = *course.id();
        let unit = Unit::new(UnitId::new(), course_id, "Week one".to_string(), None).unwrap();
        let unit_id = *unit.id();
        let task = Task::new(TaskId::new(), unit_id, "Read notes".to_string(), None).unwrap();
        let task_id = *task.id();
        let store = InMemoryStore::new()
            .with_course(course)
            .with_unit(unit)
            .with_task(task);
        Fixture {
            store,
            course_id,
            unit_id,
            task_id,
        }
    }

    fn handler_over(store: InMemoryStore) -> GetTaskHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        GetTaskHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryTaskRepository::new(store)),
        )
    }

    fn query_for(f: &Fixture) -> GetTaskQuery {
        GetTaskQuery {
            principal: principal(),
            course_id: f.course_id,
            unit_id: f.unit_id,
            task_id: f.task_id,
        }
    }

    #[tokio::test]
    async fn fetches_task_through_the_full_chain() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        let task = handler.handle(query_for(&f)).await.unwrap();

        assert_eq!(task.id(), &f.task_id);
        assert_eq!(task.title(), "Read notes");
    }

    #[tokio::test]
    async fn foreign_chain_reads_as_not_found() {
        let f = fixture_for(&UserId::new("auth0|someone-else").unwrap());
        let handler = handler_over(f.store.clone());

        let result = handler.handle(query_for(&f)).await;

        assert_eq!(result, Err(TaskError::NotFound));
    }

    #[tokio::test]
    async fn task_from_another_unit_reads_as_not_found() {
        let f = fixture_for(&principal());
        let foreign_unit =
            Unit::new(UnitId::new(), f.course_id, "Week two".to_string(), None).unwrap();
        let foreign_task = Task::new(
            TaskId::new(),
            *foreign_unit.id(),
            "Other work".to_string(),
            None,
        )
        .unwrap();
        let foreign_task_id = *foreign_task.id();
        let store = f
            .store
            .clone()
            .with_unit(foreign_unit)
            .with_task(foreign_task);
        let handler = handler_over(store);

        // The chain is intact, but the task hangs off the sibling unit.
        let mut query = query_for(&f);
        query.task_id = foreign_task_id;
        let result = handler.handle(query).await;

        assert_eq!(result, Err(TaskError::NotFound));
    }

    #[tokio::test]
    async fn missing_task_reads_as_not_found() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        let mut query = query_for(&f);
        query.task_id = TaskId::new();
        let result = handler.handle(query).await;

        assert_eq!(result, Err(TaskError::NotFound));
    }
}
