//! ListTasksHandler - Query handler for the tasks of one unit.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Query for all tasks of a unit.
#[derive(Debug, Clone)]
pub struct ListTasksQuery {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
}

/// Handler for listing tasks.
pub struct ListTasksHandler {
    resolver: Arc<OwnershipResolver>,
    tasks: Arc<dyn TaskRepository>,
}

impl ListTasksHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { resolver, tasks }
    }

    pub async fn handle(&self, query: ListTasksQuery) -> Result<Vec<Task>, TaskError> {
        let chain = [
            ChainLink::new("course_id", ResourceKind::Course, query.course_id),
            ChainLink::new("unit_id", ResourceKind::Unit, query.unit_id),
        ];
        self.resolver
            .resolve_parents(&query.principal, &chain)
            .await?;

        Ok(self.tasks.find_by_unit(&query.unit_id).await?)
    }
}
