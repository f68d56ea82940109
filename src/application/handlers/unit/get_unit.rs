//! GetUnitHandler - Query handler for a single unit reached through its course.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::foundation::{CourseId, UnitId, UserId};
use crate::domain::resolver::{ChainLink, ResourceKind};
use crate::domain::unit::{Unit, UnitError};
use crate::ports::UnitRepository;

/// Query for one unit by ID, addressed through its course.
#[derive(Debug, Clone)]
pub struct GetUnitQuery {
    pub principal: UserId,
    pub course_id: CourseId,
    pub unit_id: UnitId,
}

/// Handler for fetching a unit.
pub struct GetUnitHandler {
    resolver: Arc<OwnershipResolver>,
    units: Arc<dyn UnitRepository>,
}

impl GetUnitHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, units: Arc<dyn UnitRepository>) -> Self {
        Self { resolver, units }
    }

    pub async fn handle(&self, query: GetUnitQuery) -> Result<Unit, UnitError> {
        let chain = [ChainLink::new(
            "course_id",
            ResourceKind::Course,
            query.course_id,
        )];
        self.resolver
            .resolve(
                &query.principal,
                &chain,
                ResourceKind::Unit,
                query.unit_id.into(),
            )
            .await?;

        self.units
            .find_by_id(&query.unit_id)
            .await?
            .ok_or(UnitError::NotFound)
    }
}
