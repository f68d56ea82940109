//! DeleteTaskHandler - Command handler for deleting tasks.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, TaskId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::task::TaskError;
use crate::ports::TaskRepository;

/// Command to delete a task.
#[derive(Debug, Clone)]
pub struct DeleteTaskCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
    pub task_id: TaskId,
}

/// Handler for deleting tasks.
///
/// Tasks are leaves, so unlike courses and units there is nothing to
/// protect: a resolvable task can always be deleted.
pub struct DeleteTaskHandler {
    resolver: Arc<OwnershipResolver>,
    tasks: Arc<dyn TaskRepository>,
}

impl DeleteTaskHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { resolver, tasks }
    }

    pub async fn handle(&self, cmd: DeleteTaskCommand) -> Result<(), TaskError> {
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

        self.tasks.delete(&cmd.task_id).await?;
        Ok(())
    }
}
