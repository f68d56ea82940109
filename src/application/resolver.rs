//! OwnershipResolver - walks an explicit ownership chain from the caller to
//! a target resource.
//!
//! # Design
//!
//! Every lookup in a walk carries its constraint into storage: the first link
//! must belong to the caller, each later link must reference the record
//! before it, and the target must reference the last link (or the caller
//! directly when the chain is empty). One constrained lookup per link, in
//! chain order, stopping at the first miss.
//!
//! The two failure modes are kept strictly apart. A record that is absent,
//! foreign, or detached from its claimed parent produces the same
//! [`ResolveError::NotFound`] with no hint of which link broke. A chain that
//! could never succeed against the registry (unregistered kind, kind without
//! the relation its position requires) is a [`ResolveError::Config`] defect
//! and is reported before any lookup for that link runs.
//!
//! # Example
//!
//! ```ignore
//! let resolver = OwnershipResolver::new(registry, directory);
//!
//! // GET /courses/{course_id}/units/{unit_id}/tasks/{task_id}
//! let chain = [
//!     ChainLink::new("course_id", ResourceKind::Course, course_id),
//!     ChainLink::new("unit_id", ResourceKind::Unit, unit_id),
//! ];
//! let task = resolver
//!     .resolve(&principal, &chain, ResourceKind::Task, task_id.into())
//!     .await?;
//! ```

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::resolver::{
    ChainLink, LookupFilter, RelationRegistry, ResolveError, ResourceId, ResourceKind,
    ResourceRecord,
};
use crate::ports::ResourceDirectory;

/// Resolves resources through their declared ownership chains.
///
/// Shared across handlers; holds the startup-built relation registry and the
/// storage directory the constrained lookups run against.
pub struct OwnershipResolver {
    registry: Arc<RelationRegistry>,
    directory: Arc<dyn ResourceDirectory>,
}

impl OwnershipResolver {
    pub fn new(registry: Arc<RelationRegistry>, directory: Arc<dyn ResourceDirectory>) -> Self {
        Self {
            registry,
            directory,
        }
    }

    /// Resolves the target resource at the end of a chain.
    ///
    /// The target must be a child of the last chain link, or be directly
    /// owned by `principal` when the chain is empty.
    ///
    /// # Errors
    ///
    /// - `NotFound` if any link or the target is missing, foreign, or
    ///   detached from its claimed parent
    /// - `Config` if the registry cannot support the chain as declared
    /// - `Infrastructure` if a lookup fails
    pub async fn resolve(
        &self,
        principal: &UserId,
        chain: &[ChainLink],
        target_kind: ResourceKind,
        target_id: ResourceId,
    ) -> Result<ResourceRecord, ResolveError> {
        let anchor = self.resolve_parents(principal, chain).await?;
        self.lookup(principal, anchor.as_ref(), target_kind, target_id)
            .await
    }

    /// Resolves a parent chain without a target.
    ///
    /// Used by list and create endpoints, which address a position in the
    /// hierarchy rather than an existing resource. Returns the record of the
    /// last link, or `None` for an empty chain.
    ///
    /// # Errors
    ///
    /// Same contract as [`resolve`](Self::resolve), applied to the chain
    /// links alone.
    pub async fn resolve_parents(
        &self,
        principal: &UserId,
        chain: &[ChainLink],
    ) -> Result<Option<ResourceRecord>, ResolveError> {
        let mut previous: Option<ResourceRecord> = None;
        for link in chain {
            let record = self
                .lookup(principal, previous.as_ref(), link.kind, link.id)
                .await?;
            previous = Some(record);
        }
        Ok(previous)
    }

    /// One constrained lookup: the shared step for chain links and targets.
    ///
    /// With no preceding record the kind must carry an owner relation and the
    /// lookup is constrained to `principal`; otherwise the kind must declare
    /// the preceding record's kind as its parent and the lookup is
    /// constrained to that record.
    async fn lookup(
        &self,
        principal: &UserId,
        preceding: Option<&ResourceRecord>,
        kind: ResourceKind,
        id: ResourceId,
    ) -> Result<ResourceRecord, ResolveError> {
        let spec = self.registry.spec(kind)?;
        let filter = match preceding {
            Some(prev) => {
                spec.require_parent(kind, prev.kind)?;
                LookupFilter::by_id(id).with_parent(prev.id)
            }
            None => {
                spec.require_owner(kind)?;
                LookupFilter::by_id(id).with_owner(principal.clone())
            }
        };
        self.directory
            .find(kind, &filter)
            .await?
            .ok_or(ResolveError::NotFound)
    }
}
