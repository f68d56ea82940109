//! Error types for chain resolution.

use thiserror::Error;

use super::ResourceKind;
use crate::domain::foundation::{DomainError, ErrorCode};

/// The one message every failed lookup surfaces to callers.
///
/// A missing course, a unit under someone else's course, and a task id that
/// never existed all produce exactly this text, so a caller cannot probe for
/// the existence of resources it does not own.
pub const NOT_FOUND_MESSAGE: &str = "Not found.";

/// Defects in how resource kinds were registered or chains were declared.
///
/// These describe programming mistakes in endpoint wiring, never bad user
/// input, and must never be collapsed into the uniform not-found outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainConfigError {
    /// A chain or target referenced a kind with no registry entry.
    #[error("resource kind '{kind}' is not registered")]
    Unregistered { kind: ResourceKind },

    /// The same kind was registered twice while building the registry.
    #[error("resource kind '{kind}' is registered more than once")]
    DuplicateRegistration { kind: ResourceKind },

    /// A registered kind declares a parent kind that itself has no entry.
    #[error("resource kind '{kind}' declares unregistered parent kind '{parent}'")]
    UnregisteredParent {
        kind: ResourceKind,
        parent: ResourceKind,
    },

    /// A kind was asked to anchor a chain (or pass a direct ownership check)
    /// but declares no owner relation.
    #[error("resource kind '{kind}' has no owner relation and cannot anchor a chain")]
    MissingOwnerRelation { kind: ResourceKind },

    /// A kind was chained under a parent but declares no parent relation.
    #[error("resource kind '{kind}' has no parent relation but was chained under '{preceding}'")]
    MissingParentRelation {
        kind: ResourceKind,
        preceding: ResourceKind,
    },

    /// A kind's declared parent kind differs from the preceding chain link.
    #[error(
        "resource kind '{kind}' declares parent kind '{declared}' but the chain supplies '{supplied}'"
    )]
    ParentKindMismatch {
        kind: ResourceKind,
        declared: ResourceKind,
        supplied: ResourceKind,
    },

    /// A kind with neither owner nor parent relation can never be resolved.
    #[error("resource kind '{kind}' declares neither owner nor parent relation")]
    UnresolvableKind { kind: ResourceKind },
}

/// Outcome of a failed chain resolution.
///
/// `NotFound` is the uniform user-facing failure: it deliberately carries no
/// indication of which link broke or why. `Config` and `Infrastructure` are
/// server-side faults and keep their detail.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// Some link failed its lookup: wrong owner, wrong parent, or no such
    /// resource. Indistinguishable by design.
    #[error("Not found.")]
    NotFound,

    /// The registry or a declared chain is wired incorrectly.
    #[error("resolver misconfigured: {0}")]
    Config(#[from] ChainConfigError),

    /// The lookup itself failed (storage unavailable, query error).
    #[error("resolution lookup failed: {0}")]
    Infrastructure(#[from] DomainError),
}

impl ResolveError {
    /// Returns true for the uniform not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound)
    }

    /// Maps the error onto the shared domain error code space.
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::NotFound => ErrorCode::ResourceNotFound,
            ResolveError::Config(_) => ErrorCode::ConfigurationError,
            ResolveError::Infrastructure(err) => err.code,
        }
    }
}
