//! Chain links, lookup filters, and resolved records.

use std::fmt;

use super::{ResourceId, ResourceKind};
use crate::domain::foundation::UserId;

/// One parent step of an ownership chain.
///
/// Endpoints declare their chains as explicit ordered lists of these; the
/// parameter name is the path segment the identifier came from and exists for
/// diagnostics, never for relation inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLink {
    /// Path parameter the identifier was extracted from (e.g. `course_id`).
    pub param: &'static str,
    /// Resource kind the parameter binds to.
    pub kind: ResourceKind,
    /// Identifier supplied by the caller.
    pub id: ResourceId,
}

impl ChainLink {
    /// Creates a chain link.
    pub fn new(param: &'static str, kind: ResourceKind, id: impl Into<ResourceId>) -> Self {
        Self {
            param,
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for ChainLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.param, self.id, self.kind)
    }
}

/// Equality criteria for a single directory lookup.
///
/// Owner and parent constraints are applied inside storage, not filtered
/// after the fact, so a record that exists but fails a constraint is
/// indistinguishable from one that never existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFilter {
    /// Identifier the record must have.
    pub id: ResourceId,
    /// Direct owner the record must reference, if constrained.
    pub owner: Option<UserId>,
    /// Parent the record must reference, if constrained.
    pub parent: Option<ResourceId>,
}

impl LookupFilter {
    /// A filter constraining only the identifier.
    pub fn by_id(id: impl Into<ResourceId>) -> Self {
        Self {
            id: id.into(),
            owner: None,
            parent: None,
        }
    }

    /// Adds an owner constraint.
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Adds a parent constraint.
    pub fn with_parent(mut self, parent: ResourceId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Storage view of one resource: just enough to continue or conclude a
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Kind the record was looked up as.
    pub kind: ResourceKind,
    /// The record's identifier.
    pub id: ResourceId,
    /// Direct owner reference, when the kind declares one.
    pub owner: Option<UserId>,
    /// Parent reference, when the kind declares one.
    pub parent: Option<ResourceId>,
}

impl ResourceRecord {
    /// Creates a record.
    pub fn new(
        kind: ResourceKind,
        id: impl Into<ResourceId>,
        owner: Option<UserId>,
        parent: Option<ResourceId>,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            owner,
            parent,
        }
    }
}
