//! PostgreSQL implementation of LearnerRepository.
//!
//! Persists learner profiles keyed by principal. The primary key on
//! `user_id` backs the one-profile-per-principal rule.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::learner::LearnerProfile;
use crate::ports::LearnerRepository;

/// PostgreSQL implementation of LearnerRepository.
#[derive(Clone)]
pub struct PostgresLearnerRepository {
    pool: PgPool,
}

impl PostgresLearnerRepository {
    /// Creates a new PostgresLearnerRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LearnerRepository for PostgresLearnerRepository {
    async fn save(&self, profile: &LearnerProfile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO learners (user_id, display_name, birth_date, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.display_name())
        .bind(profile.birth_date())
        .bind(profile.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::ProfileExists,
                    "Profile already registered for this user",
                ))
            }
            Err(e) => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert learner profile: {}", e),
            )),
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, display_name, birth_date, created_at
            FROM learners
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch learner profile: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_profile(row)?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM learners WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check learner existence: {}", e),
                )
            })?;

        Ok(result.0 > 0)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<LearnerProfile, DomainError> {
    let user_id: String = row.try_get("user_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get user_id: {}", e),
        )
    })?;

    let display_name: String = row.try_get("display_name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get display_name: {}", e),
        )
    })?;

    let birth_date: chrono::NaiveDate = row.try_get("birth_date").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get birth_date: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    Ok(LearnerProfile::reconstitute(
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        display_name,
        birth_date,
        Timestamp::from_datetime(created_at),
    ))
}
