//! Resource kind and kind-agnostic identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::foundation::{CourseId, TaskId, UnitId};

/// Closed set of resource types that can appear in an ownership chain.
///
/// Every kind an endpoint may address must be listed here and registered in
/// the `RelationRegistry`; there is no runtime type lookup by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Unit,
    Task,
}

impl ResourceKind {
    /// Stable lowercase tag used in logs and lookup diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Course => "course",
            ResourceKind::Unit => "unit",
            ResourceKind::Task => "task",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-agnostic resource identifier used while walking a chain.
///
/// Typed ids (`CourseId`, `UnitId`, `TaskId`) convert into this for the
/// resolver, which treats every link uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    /// Creates a ResourceId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<CourseId> for ResourceId {
    fn from(id: CourseId) -> Self {
        Self(*id.as_uuid())
    }
}

impl From<UnitId> for ResourceId {
    fn from(id: UnitId) -> Self {
        Self(*id.as_uuid())
    }
}

impl From<TaskId> for ResourceId {
    fn from(id: TaskId) -> Self {
        Self(*id.as_uuid())
    }
}
