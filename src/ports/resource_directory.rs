//! Kind-agnostic resource lookup port used by chain resolution.
//!
//! The resolver needs exactly one storage operation: find a single record of
//! a given kind matching a set of equality constraints. Keeping the port this
//! narrow means every link of every chain goes through the same code path,
//! whether it is the root (owner-constrained), a middle link
//! (parent-constrained), or the target.
//!
//! # Design
//!
//! - **Constraint pushdown**: implementations apply owner/parent constraints
//!   in storage. A record that exists but fails a constraint must come back
//!   as `None`, exactly like a record that does not exist.
//! - **Read-only**: resolution never writes; repositories own mutation.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::resolver::{LookupFilter, ResourceKind, ResourceRecord};

/// Finds single resources by equality constraints.
///
/// # Contract
///
/// * `Ok(Some(record))` - exactly the record matching every constraint
/// * `Ok(None)` - no record matches (including constraint misses)
/// * `Err(DomainError)` - the lookup itself failed (storage error)
#[async_trait]
pub trait ResourceDirectory: Send + Sync {
    /// Finds a single resource of `kind` matching every constraint in
    /// `filter`.
    async fn find(
        &self,
        kind: ResourceKind,
        filter: &LookupFilter,
    ) -> Result<Option<ResourceRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn ResourceDirectory) {}
    }

    #[test]
    fn resource_directory_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ResourceDirectory>();
    }
}
