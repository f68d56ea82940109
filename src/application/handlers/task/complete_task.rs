//! CompleteTaskHandler - Command handler for marking a task finished.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, TaskId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Command to mark a task done.
#[derive(Debug, Clone)]
pub struct CompleteTaskCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
    pub task_id: TaskId,
}

/// Handler for completing tasks.
///
/// Completing an already-done task succeeds without touching storage, so
/// retried requests are harmless.
pub struct CompleteTaskHandler {
    resolver: Arc<OwnershipResolver>,
    tasks: Arc<dyn TaskRepository>,
}

impl CompleteTaskHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { resolver, tasks }
    }

    pub async fn handle(&self, cmd: CompleteTaskCommand) -> Result<Task, TaskError> {
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

        if task.complete() {
            self.tasks.update(&task).await?;
        }
        Ok(task)
    }
}
