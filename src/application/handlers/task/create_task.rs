//! CreateTaskHandler - Command handler for creating tasks under a unit.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, TaskId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Command to create a task inside a unit of one of the caller's courses.
#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
    pub title: String,
    pub deadline: Option<NaiveDate>,
}

/// Handler for creating tasks.
pub struct CreateTaskHandler {
    resolver: Arc<OwnershipResolver>,
    tasks: Arc<dyn TaskRepository>,
}

impl CreateTaskHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { resolver, tasks }
    }

    pub async fn handle(&self, cmd: CreateTaskCommand) -> Result<Task, TaskError> {
        // 1. Both parents must check out: the course is the caller's, the
        //    unit hangs off that course
        let chain = [
            ChainLink::new("course_id", ResourceKind::Course, cmd.course_id),
            ChainLink::new("unit_id", ResourceKind::Unit, cmd.unit_id),
        ];
        self.resolver
            .resolve_parents(&cmd.principal, &chain)
            .await?;

        // 2. Build the aggregate (field validation happens here)
        let task = Task::new(TaskId::new(), cmd.unit_id, cmd.title, cmd.deadline)?;

        // 3. Per-unit title uniqueness
        if self
            .tasks
            .title_taken(&cmd.unit_id, task.title(), None)
            .await?
        {
            return Err(TaskError::duplicate_title(task.title()));
        }

        // 4. Persist
        self.tasks.save(&task).await?;
        Ok(task)
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

    /// Course and unit seeded for one owner.
    struct Fixture {
        store: InMemoryStore,
        course_id: CourseId,
        unit_id: UnitId,
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
        let store = InMemoryStore::new().with_course(course).with_unit(unit);
        Fixture {
            store,
            course_id,
            unit_id,
        }
    }

    fn handler_over(store: InMemoryStore) -> CreateTaskHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        CreateTaskHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryTaskRepository::new(store)),
        )
    }

    fn command(f: &Fixture, title: &str) -> CreateTaskCommand {
        CreateTaskCommand {
            principal: principal(),
            course_id: f.course_id,
            unit_id: f.unit_id,
            title: title.to_string(),
            deadline: None,
        }
    }

    #[tokio::test]
    async fn creates_task_under_own_unit() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        let task = handler.handle(command(&f, "Read chapter four")).await.unwrap();

        assert_eq!(task.title(), "Read chapter four");
        assert_eq!(task.unit_id(), &f.unit_id);
        assert!(!task.is_done());
        assert_eq!(f.store.task_count(), 1);
    }

    #[tokio::test]
    async fn accepts_past_deadline() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        let mut cmd = command(&f, "Backfill notes");
        cmd.deadline = Some(Timestamp::today() - Duration::days(3));
        let result = handler.handle(cmd).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_duplicate_title_in_same_unit() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        handler.handle(command(&f, "Read notes")).await.unwrap();
        let result = handler.handle(command(&f, "Read notes")).await;

        assert_eq!(
            result,
            Err(TaskError::DuplicateTitle("Read notes".to_string()))
        );
        assert_eq!(f.store.task_count(), 1);
    }

    #[tokio::test]
    async fn foreign_chain_cannot_receive_tasks() {
        let f = fixture_for(&UserId::new("auth0|someone-else").unwrap());
        let handler = handler_over(f.store.clone());

        let result = handler.handle(command(&f, "Read notes")).await;

        assert_eq!(result, Err(TaskError::NotFound));
        assert_eq!(f.store.task_count(), 0);
    }

    #[tokio::test]
    async fn unit_under_a_different_course_reads_as_not_found() {
        let f = fixture_for(&principal());
        let other_course = Course::new(
            CourseId::new(),
            principal(),
            "Advanced Rust".to_string(),
            Timestamp::today() + Duration::days(30),
            Timestamp::today() + Duration::days(60),
        )
        .unwrap();
        let detached_unit = Unit::new(
            UnitId::new(),
            *other_course.id(),
            "Elsewhere".to_string(),
            None,
        )
        .unwrap();
        let detached_unit_id = *detached_unit.id();
        let store = f
            .store
            .clone()
            .with_course(other_course)
            .with_unit(detached_unit);
        let handler = handler_over(store);

        // Claimed course is f's, but the unit belongs to the other course.
        let mut cmd = command(&f, "Read notes");
        cmd.unit_id = detached_unit_id;
        let result = handler.handle(cmd).await;

        assert_eq!(result, Err(TaskError::NotFound));
    }
}
