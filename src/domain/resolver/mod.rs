//! Ownership-chain resolution vocabulary.
//!
//! A nested resource (a task under a unit under a course) is only accessible
//! through a chain of parents that all check out: the first parent must be
//! owned by the requesting principal, every later parent must reference the
//! one before it, and the target must reference the last parent (or the
//! principal directly when there are no parents). This module defines the
//! types that describe such chains; the walking itself lives in
//! `application::OwnershipResolver`, which needs the directory port.
//!
//! ```text
//! domain/resolver      <- kinds, registry, links, errors (this module)
//! application/resolver <- OwnershipResolver service (uses the directory)
//! ```
//!
//! # Design
//!
//! - Relations are declared in an explicit [`RelationRegistry`] built at
//!   startup; nothing is inferred from parameter names or discovered by
//!   reflection at request time.
//! - Every failed lookup collapses into one uniform not-found outcome
//!   ([`ResolveError::NotFound`]); wiring mistakes surface separately as
//!   [`ChainConfigError`] and are never shown to callers as not-found.
//!
//! # Example
//!
//! ```ignore
//! let registry = RelationRegistry::standard();
//! let chain = [
//!     ChainLink::new("course_id", ResourceKind::Course, course_id),
//!     ChainLink::new("unit_id", ResourceKind::Unit, unit_id),
//! ];
//! let task = resolver
//!     .resolve(&principal, &chain, ResourceKind::Task, task_id.into())
//!     .await?;
//! ```

mod chain;
mod errors;
mod kind;
mod registry;

pub use chain::{ChainLink, LookupFilter, ResourceRecord};
pub use errors::{ChainConfigError, ResolveError, NOT_FOUND_MESSAGE};
pub use kind::{ResourceId, ResourceKind};
pub use registry::{ParentRelation, RelationRegistry, RelationRegistryBuilder, RelationSpec};
