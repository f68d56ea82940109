//! PostgreSQL implementation of TaskRepository.
//!
//! Persists Task aggregates to PostgreSQL. The `(unit_id, title)` unique
//! index backs the per-unit title rule. Tasks are leaves, so delete needs no
//! referential guard.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, TaskId, Timestamp, UnitId};
use crate::domain::task::Task;
use crate::ports::TaskRepository;

/// PostgreSQL implementation of TaskRepository.
#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new PostgresTaskRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (
                id, unit_id, title, deadline, done, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(task.id().as_uuid())
        .bind(task.unit_id().as_uuid())
        .bind(task.title())
        .bind(task.deadline())
        .bind(task.is_done())
        .bind(task.created_at().as_datetime())
        .bind(task.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(ErrorCode::DuplicateName, "Task title already in use")
                    .with_detail("title", task.title().to_string()),
            ),
            Err(e) => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert task: {}", e),
            )),
        }
    }

    async fn update(&self, task: &Task) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks SET
                title = $2,
                deadline = $3,
                done = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(task.id().as_uuid())
        .bind(task.title())
        .bind(task.deadline())
        .bind(task.is_done())
        .bind(task.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DomainError::new(
                    ErrorCode::DuplicateName,
                    "Task title already in use",
                )
                .with_detail("title", task.title().to_string()));
            }
            Err(e) => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update task: {}", e),
                ));
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResourceNotFound,
                format!("Task not found: {}", task.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, unit_id, title, deadline, done, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch task: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_task(row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_unit(&self, unit_id: &UnitId) -> Result<Vec<Task>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, unit_id, title, deadline, done, created_at, updated_at
            FROM tasks
            WHERE unit_id = $1
            ORDER BY title
            "#,
        )
        .bind(unit_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch tasks by unit: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_task).collect()
    }

    async fn title_taken(
        &self,
        unit_id: &UnitId,
        title: &str,
        exclude: Option<&TaskId>,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM tasks
            WHERE unit_id = $1 AND title = $2 AND ($3::uuid IS NULL OR id <> $3)
            "#,
        )
        .bind(unit_id.as_uuid())
        .bind(title)
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check task title: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn count_by_unit(&self, unit_id: &UnitId) -> Result<u32, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE unit_id = $1")
            .bind(unit_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to count tasks: {}", e),
                )
            })?;

        Ok(result.0 as u32)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete task: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResourceNotFound,
                format!("Task not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_task(row: sqlx::postgres::PgRow) -> Result<Task, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let unit_id: uuid::Uuid = row.try_get("unit_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get unit_id: {}", e),
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

    let done: bool = row.try_get("done").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get done: {}", e),
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

    Ok(Task::reconstitute(
        TaskId::from_uuid(id),
        UnitId::from_uuid(unit_id),
        title,
        deadline,
        done,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
