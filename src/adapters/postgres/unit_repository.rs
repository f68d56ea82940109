//! PostgreSQL implementation of UnitRepository.
//!
//! Persists Unit aggregates to PostgreSQL. The `(course_id, title)` unique
//! index backs the per-course title rule, and the `tasks.unit_id` foreign key
//! (ON DELETE RESTRICT) backs the delete protection.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Timestamp, UnitId};
use crate::domain::unit::Unit;
use crate::ports::UnitRepository;

/// PostgreSQL implementation of UnitRepository.
#[derive(Clone)]
pub struct PostgresUnitRepository {
    pool: PgPool,
}

impl PostgresUnitRepository {
    /// Creates a new PostgresUnitRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitRepository for PostgresUnitRepository {
    async fn save(&self, unit: &Unit) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO units (
                id, course_id, title, deadline, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(unit.id().as_uuid())
        .bind(unit.course_id().as_uuid())
        .bind(unit.title())
        .bind(unit.deadline())
        .bind(unit.created_at().as_datetime())
        .bind(unit.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(ErrorCode::DuplicateName, "Unit title already in use")
                    .with_detail("title", unit.title().to_string()),
            ),
            Err(e) => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert unit: {}", e),
            )),
        }
    }

    async fn update(&self, unit: &Unit) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE units SET
                title = $2,
                deadline = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(unit.id().as_uuid())
        .bind(unit.title())
        .bind(unit.deadline())
        .bind(unit.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DomainError::new(
                    ErrorCode::DuplicateName,
                    "Unit title already in use",
                )
                .with_detail("title", unit.title().to_string()));
            }
            Err(e) => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update unit: {}", e),
                ));
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResourceNotFound,
                format!("Unit not found: {}", unit.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UnitId) -> Result<Option<Unit>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, course_id, title, deadline, created_at, updated_at
            FROM units
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch unit: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_unit(row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_course(&self, course_id: &CourseId) -> Result<Vec<Unit>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, course_id, title, deadline, created_at, updated_at
            FROM units
            WHERE course_id = $1
            ORDER BY title
            "#,
        )
        .bind(course_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch units by course: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_unit).collect()
    }

    async fn title_taken(
        &self,
        course_id: &CourseId,
        title: &str,
        exclude: Option<&UnitId>,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM units
            WHERE course_id = $1 AND title = $2 AND ($3::uuid IS NULL OR id <> $3)
            "#,
        )
        .bind(course_id.as_uuid())
        .bind(title)
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check unit title: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn count_by_course(&self, course_id: &CourseId) -> Result<u32, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM units WHERE course_id = $1")
            .bind(course_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to count units: {}", e),
                )
            })?;

        Ok(result.0 as u32)
    }

    async fn delete(&self, id: &UnitId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                return Err(DomainError::new(
                    ErrorCode::ResourceInUse,
                    "Unit is still referenced by tasks",
                ));
            }
            Err(e) => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete unit: {}", e),
                ));
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResourceNotFound,
                format!("Unit not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_unit(row: sqlx::postgres::PgRow) -> Result<Unit, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let course_id: uuid::Uuid = row.try_get("course_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get course_id: {}", e),
        )
    })?;

    let title: String = row.try_get("title").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get title: {}", e),
        )
    })?;

    let deadline: Option<chrono::NaiveDate> = row.try_get("deadline").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get deadline: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get updated_at: {}", e),
        )
    })?;

    Ok(Unit::reconstitute(
        UnitId::from_uuid(id),
        CourseId::from_uuid(course_id),
        title,
        deadline,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
