//! PostgreSQL implementation of CourseRepository.
//!
//! Persists Course aggregates to PostgreSQL. The `(owner_id, name)` unique
//! index backs the per-owner name rule, and the `units.course_id` foreign key
//! (ON DELETE RESTRICT) backs the delete protection.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::CourseRepository;

/// PostgreSQL implementation of CourseRepository.
#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// Creates a new PostgresCourseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses (
                id, owner_id, name, mid_deadline, final_deadline, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(course.id().as_uuid())
        .bind(course.owner_id().as_str())
        .bind(course.name())
        .bind(course.mid_deadline())
        .bind(course.final_deadline())
        .bind(course.created_at().as_datetime())
        .bind(course.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(ErrorCode::DuplicateName, "Course name already in use")
                    .with_detail("name", course.name().to_string()),
            ),
            Err(e) => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert course: {}", e),
            )),
        }
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE courses SET
                name = $2,
                mid_deadline = $3,
                final_deadline = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(course.id().as_uuid())
        .bind(course.name())
        .bind(course.mid_deadline())
        .bind(course.final_deadline())
        .bind(course.updated_at().as_datetime())
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DomainError::new(
                    ErrorCode::DuplicateName,
                    "Course name already in use",
                )
                .with_detail("name", course.name().to_string()));
            }
            Err(e) => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update course: {}", e),
                ));
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResourceNotFound,
                format!("Course not found: {}", course.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, mid_deadline, final_deadline, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch course: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_course(row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, mid_deadline, final_deadline, created_at, updated_at
            FROM courses
            WHERE owner_id = $1
            ORDER BY name
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch courses by owner: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_course).collect()
    }

    async fn name_taken(
        &self,
        owner: &UserId,
        name: &str,
        exclude: Option<&CourseId>,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM courses
            WHERE owner_id = $1 AND name = $2 AND ($3::uuid IS NULL OR id <> $3)
            "#,
        )
        .bind(owner.as_str())
        .bind(name)
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check course name: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                return Err(DomainError::new(
                    ErrorCode::ResourceInUse,
                    "Course is still referenced by units",
                ));
            }
            Err(e) => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete course: {}", e),
                ));
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResourceNotFound,
                format!("Course not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_course(row: sqlx::postgres::PgRow) -> Result<Course, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let owner_id: String = row.try_get("owner_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get owner_id: {}", e),
        )
    })?;

    let name: String = row.try_get("name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get name: {}", e),
        )
    })?;

    let mid_deadline: chrono::NaiveDate = row.try_get("mid_deadline").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get mid_deadline: {}", e),
        )
    })?;

    let final_deadline: chrono::NaiveDate = row.try_get("final_deadline").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get final_deadline: {}", e),
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

    Ok(Course::reconstitute(
        CourseId::from_uuid(id),
        UserId::new(owner_id).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid owner_id: {}", e),
            )
        })?,
        name,
        mid_deadline,
        final_deadline,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
