//! PostgreSQL implementation of ResourceDirectory.
//!
//! Serves the single-record lookups chain resolution is made of. Each lookup
//! becomes one SELECT whose WHERE clause carries every constraint in the
//! filter, so a record that exists but belongs to someone else never leaves
//! the database.
//!
//! # Design
//!
//! - **Registry-driven columns**: table names come from the kind, constraint
//!   columns come from the [`RelationRegistry`]. The registry's field names
//!   are the single source of truth shared with the resolver.
//! - **Static SQL fragments**: table and column names are `'static` strings
//!   registered at startup; caller-supplied values are always bound.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::resolver::{
    LookupFilter, RelationRegistry, RelationSpec, ResourceId, ResourceKind, ResourceRecord,
};
use crate::ports::ResourceDirectory;

/// PostgreSQL implementation of ResourceDirectory.
#[derive(Clone)]
pub struct PostgresResourceDirectory {
    pool: PgPool,
    registry: Arc<RelationRegistry>,
}

impl PostgresResourceDirectory {
    /// Creates a new PostgresResourceDirectory over the shared registry.
    pub fn new(pool: PgPool, registry: Arc<RelationRegistry>) -> Self {
        Self { pool, registry }
    }
}

#[async_trait]
impl ResourceDirectory for PostgresResourceDirectory {
    async fn find(
        &self,
        kind: ResourceKind,
        filter: &LookupFilter,
    ) -> Result<Option<ResourceRecord>, DomainError> {
        let spec = self.registry.spec(kind).map_err(|e| {
            DomainError::new(ErrorCode::ConfigurationError, e.to_string())
        })?;

        let sql = lookup_sql(table_for(kind), spec, filter)?;

        let mut query = sqlx::query(&sql).bind(filter.id.as_uuid());
        if let Some(owner) = &filter.owner {
            query = query.bind(owner.as_str());
        }
        if let Some(parent) = &filter.parent {
            query = query.bind(parent.as_uuid());
        }

        let row = query.fetch_optional(&self.pool).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to look up {}: {}", kind, e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_record(kind, spec, row)?)),
            None => Ok(None),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn table_for(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Course => "courses",
        ResourceKind::Unit => "units",
        ResourceKind::Task => "tasks",
    }
}

/// Assembles the lookup SELECT for one kind and filter.
///
/// A constraint whose column is not registered cannot be pushed down;
/// refusing is required, since dropping it would widen the match.
fn lookup_sql(
    table: &str,
    spec: &RelationSpec,
    filter: &LookupFilter,
) -> Result<String, DomainError> {
    let mut columns = vec!["id"];
    if let Some(owner_col) = spec.owner_field {
        columns.push(owner_col);
    }
    if let Some(parent) = spec.parent {
        columns.push(parent.field);
    }

    let mut sql = format!(
        "SELECT {} FROM {} WHERE id = $1",
        columns.join(", "),
        table
    );
    let mut placeholder = 1;

    if filter.owner.is_some() {
        let owner_col = spec.owner_field.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ConfigurationError,
                format!("No owner column registered for table {}", table),
            )
        })?;
        placeholder += 1;
        sql.push_str(&format!(" AND {} = ${}", owner_col, placeholder));
    }

    if filter.parent.is_some() {
        let parent = spec.parent.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ConfigurationError,
                format!("No parent column registered for table {}", table),
            )
        })?;
        placeholder += 1;
        sql.push_str(&format!(" AND {} = ${}", parent.field, placeholder));
    }

    Ok(sql)
}

fn row_to_record(
    kind: ResourceKind,
    spec: &RelationSpec,
    row: sqlx::postgres::PgRow,
) -> Result<ResourceRecord, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let owner = match spec.owner_field {
        Some(col) => {
            let raw: String = row.try_get(col).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to get {}: {}", col, e),
                )
            })?;
            Some(UserId::new(raw).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid owner: {}", e))
            })?)
        }
        None => None,
    };

    let parent = match spec.parent {
        Some(relation) => {
            let raw: uuid::Uuid = row.try_get(relation.field).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to get {}: {}", relation.field, e),
                )
            })?;
            Some(ResourceId::from_uuid(raw))
        }
        None => None,
    };

    Ok(ResourceRecord::new(kind, ResourceId::from_uuid(id), owner, parent))
}
