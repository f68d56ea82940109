//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresCourseRepository`, `PostgresUnitRepository`,
//!   `PostgresTaskRepository` - Aggregate persistence with uniqueness and
//!   referential rules enforced by indexes and foreign keys
//! - `PostgresLearnerRepository` - One profile per principal
//! - `PostgresResourceDirectory` - Constrained single-record lookups for
//!   chain resolution

mod course_repository;
mod learner_repository;
mod resource_directory;
mod task_repository;
mod unit_repository;

pub use course_repository::PostgresCourseRepository;
pub use learner_repository::PostgresLearnerRepository;
pub use resource_directory::PostgresResourceDirectory;
pub use task_repository::PostgresTaskRepository;
pub use unit_repository::PostgresUnitRepository;
