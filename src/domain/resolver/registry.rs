//! Relation registry: explicit, startup-built relation metadata per kind.

use std::collections::HashMap;

use super::{ChainConfigError, ResourceKind};

/// Parent link declared for a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRelation {
    /// Kind of the parent resource.
    pub kind: ResourceKind,
    /// Storage field holding the parent reference (e.g. `course_id`).
    pub field: &'static str,
}

/// Relation metadata registered for one resource kind.
///
/// A kind may carry a direct owner reference, a parent reference, or both.
/// Which relations exist determines where the kind may legally appear in a
/// chain; the field names tell storage adapters which columns to constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationSpec {
    /// Storage field holding the direct owner reference, if any.
    pub owner_field: Option<&'static str>,
    /// Parent link, if the kind is nested under another.
    pub parent: Option<ParentRelation>,
}

impl RelationSpec {
    /// A kind owned directly by a principal, with no parent.
    pub fn owned(owner_field: &'static str) -> Self {
        Self {
            owner_field: Some(owner_field),
            parent: None,
        }
    }

    /// A kind nested under a parent, with no direct owner reference.
    pub fn nested(parent_kind: ResourceKind, parent_field: &'static str) -> Self {
        Self {
            owner_field: None,
            parent: Some(ParentRelation {
                kind: parent_kind,
                field: parent_field,
            }),
        }
    }

    /// Returns the owner field, or the configuration defect explaining why
    /// this kind cannot pass a direct ownership check.
    pub fn require_owner(&self, kind: ResourceKind) -> Result<&'static str, ChainConfigError> {
        match self.owner_field {
            Some(field) => Ok(field),
            None if self.parent.is_none() => Err(ChainConfigError::UnresolvableKind { kind }),
            None => Err(ChainConfigError::MissingOwnerRelation { kind }),
        }
    }

    /// Returns the parent relation, checked against the kind that actually
    /// precedes this one in the chain.
    pub fn require_parent(
        &self,
        kind: ResourceKind,
        preceding: ResourceKind,
    ) -> Result<ParentRelation, ChainConfigError> {
        match self.parent {
            Some(relation) if relation.kind == preceding => Ok(relation),
            Some(relation) => Err(ChainConfigError::ParentKindMismatch {
                kind,
                declared: relation.kind,
                supplied: preceding,
            }),
            None => Err(ChainConfigError::MissingParentRelation { kind, preceding }),
        }
    }
}

/// Explicit map from resource kinds to their relation metadata.
///
/// Built once at startup. Resolution never discovers relations dynamically;
/// a kind that is not registered here cannot be resolved at all.
#[derive(Debug, Clone)]
pub struct RelationRegistry {
    specs: HashMap<ResourceKind, RelationSpec>,
}

impl RelationRegistry {
    /// Starts building a registry.
    pub fn builder() -> RelationRegistryBuilder {
        RelationRegistryBuilder {
            specs: HashMap::new(),
            duplicate: None,
        }
    }

    /// The application's standard wiring: courses owned directly, units
    /// nested under courses, tasks nested under units.
    pub fn standard() -> Self {
        Self {
            specs: HashMap::from([
                (ResourceKind::Course, RelationSpec::owned("owner_id")),
                (
                    ResourceKind::Unit,
                    RelationSpec::nested(ResourceKind::Course, "course_id"),
                ),
                (
                    ResourceKind::Task,
                    RelationSpec::nested(ResourceKind::Unit, "unit_id"),
                ),
            ]),
        }
    }

    /// Looks up the spec for a kind, failing with a configuration error if
    /// the kind was never registered.
    pub fn spec(&self, kind: ResourceKind) -> Result<&RelationSpec, ChainConfigError> {
        self.specs
            .get(&kind)
            .ok_or(ChainConfigError::Unregistered { kind })
    }

    /// Returns the registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.specs.keys().copied()
    }
}

/// Builder that validates the registry before use.
///
/// Validation covers referential integrity only: duplicate registrations and
/// parent kinds without their own entry. Whether a kind is resolvable in a
/// given position is checked at resolution time, where the chain is known.
pub struct RelationRegistryBuilder {
    specs: HashMap<ResourceKind, RelationSpec>,
    duplicate: Option<ResourceKind>,
}

impl RelationRegistryBuilder {
    /// Registers a kind with its relation metadata.
    pub fn register(mut self, kind: ResourceKind, spec: RelationSpec) -> Self {
        if self.specs.insert(kind, spec).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(kind);
        }
        self
    }

    /// Finalizes the registry, rejecting inconsistent wiring.
    pub fn build(self) -> Result<RelationRegistry, ChainConfigError> {
        if let Some(kind) = self.duplicate {
            return Err(ChainConfigError::DuplicateRegistration { kind });
        }
        for (kind, spec) in &self.specs {
            if let Some(parent) = spec.parent {
                if !self.specs.contains_key(&parent.kind) {
                    return Err(ChainConfigError::UnregisteredParent {
                        kind: *kind,
                        parent: parent.kind,
                    });
                }
            }
        }
        Ok(RelationRegistry { specs: self.specs })
    }
}
