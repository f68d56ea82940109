//! DeleteUnitHandler - Command handler for deleting empty units.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::unit::UnitError;
use crate::ports::{TaskRepository, UnitRepository};

/// Command to delete a unit.
#[derive(Debug, Clone)]
pub struct DeleteUnitCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
}

/// Handler for deleting units.
///
/// Deletion is refused while tasks still hang off the unit, mirroring the
/// course handler's protection rule one level down.
pub struct DeleteUnitHandler {
    resolver: Arc<OwnershipResolver>,
    units: Arc<dyn UnitRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl DeleteUnitHandler {
    pub fn new(
        resolver: Arc<OwnershipResolver>,
        units: Arc<dyn UnitRepository>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            resolver,
            units,
            tasks,
        }
    }

    pub async fn handle(&self, cmd: DeleteUnitCommand) -> Result<(), UnitError> {
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

        if self.tasks.count_by_unit(&cmd.unit_id).await? > 0 {
            return Err(UnitError::InUse);
        }

        self.units.delete(&cmd.unit_id).await?;
        Ok(())
    }
}
