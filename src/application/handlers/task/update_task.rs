//! UpdateTaskHandler - Command handler for replacing a task's fields.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, TaskId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Command to update a task. Full replacement, including the done flag.
#[derive(Debug, Clone)]
pub struct UpdateTaskCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
    pub task_id: TaskId,
    pub title: String,
    pub deadline: Option<NaiveDate>,
    pub done: bool,
}

/// Handler for updating tasks.
pub struct UpdateTaskHandler {
    resolver: Arc<OwnershipResolver>,
    tasks: Arc<dyn TaskRepository>,
}

impl UpdateTaskHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { resolver, tasks }
    }

    pub async fn handle(&self, cmd: UpdateTaskCommand) -> Result<Task, TaskError> {
        let chain = [
            ChainLink::new("course_id", ResourceKind::Course, cmd.course_id),
            ChainLink::new("unit_id", ResourceKind::Unit, cmd.unit_id),
        ];
        self.resolver
            .resolve(
                &cmd.principal,
                &chain,
                ResourceKind::Task,
                cmd.task_id.into(),
            )
            .await?;

        let mut task = self
            .tasks
            .find_by_id(&cmd.task_id)
            .await?
            .ok_or(TaskError::NotFound)?;
        task.retitle(cmd.title)?;
        task.reschedule(cmd.deadline);
        if cmd.done {
            task.complete();
        } else {
            task.reopen();
        }

        if self
            .tasks
            .title_taken(task.unit_id(), task.title(), Some(task.id()))
            .await?
        {
            return Err(TaskError::duplicate_title(task.title()));
        }

        self.tasks.update(&task).await?;
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

    fn handler_over(store: InMemoryStore) -> UpdateTaskHandler {
        let resolver = OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store.clone())),
        );
        UpdateTaskHandler::new(
            Arc::new(resolver),
            Arc::new(InMemoryTaskRepository::new(store)),
        )
    }

    fn command(f: &Fixture, title: &str, done: bool) -> UpdateTaskCommand {
        UpdateTaskCommand {
            principal: principal(),
            course_id: f.course_id,
            unit_id: f.unit_id,
            task_id: f.task_id,
            title: title.to_string(),
            deadline: None,
            done,
        }
    }

    #[tokio::test]
    async fn replaces_fields_and_sets_done() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        let updated = handler
            .handle(command(&f, "Read chapters 4-5", true))
            .await
            .unwrap();

        assert_eq!(updated.title(), "Read chapters 4-5");
        assert!(updated.is_done());
        assert!(f.store.task(&f.task_id).unwrap().is_done());
    }

    #[tokio::test]
    async fn can_reopen_a_done_task() {
        let f = fixture_for(&principal());
        let handler = handler_over(f.store.clone());

        handler.handle(command(&f, "Read notes", true)).await.unwrap();
        let updated = handler.handle(command(&f, "Read notes", false)).await.unwrap();

        assert!(!updated.is_done());
    }

    #[tokio::test]
    async fn retitling_onto_a_sibling_title_conflicts() {
        let f = fixture_for(&principal());
        let sibling = Task::new(
            TaskId::new(),
            f.unit_id,
            "Write summary".to_string(),
            None,
        )
        .unwrap();
        let store = f.store.clone().with_task(sibling);
        let handler = handler_over(store);

        let result = handler.handle(command(&f, "Write summary", false)).await;

        assert_eq!(
            result,
            Err(TaskError::DuplicateTitle("Write summary".to_string()))
        );
    }

    #[tokio::test]
    async fn foreign_chain_cannot_update() {
        let f = fixture_for(&UserId::new("auth0|someone-else").unwrap());
        let handler = handler_over(f.store.clone());

        let result = handler.handle(command(&f, "Hijacked", false)).await;

        assert_eq!(result, Err(TaskError::NotFound));
        assert_eq!(f.store.task(&f.task_id).unwrap().title(), "Read notes");
    }
}
