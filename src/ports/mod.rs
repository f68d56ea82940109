//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Resolution Ports
//!
//! - `ResourceDirectory` - Kind-agnostic lookups used by chain resolution
//!
//! ## Authentication Ports
//!
//! - `TokenValidator` - JWT bearer token validation
//!
//! ## Repository Ports
//!
//! - `CourseRepository` / `UnitRepository` / `TaskRepository` - CRUD
//!   persistence for the three resource kinds
//! - `LearnerRepository` - Registration profiles keyed by principal

mod course_repository;
mod learner_repository;
mod resource_directory;
mod task_repository;
mod token_validator;
mod unit_repository;

pub use course_repository::CourseRepository;
pub use learner_repository::LearnerRepository;
pub use resource_directory::ResourceDirectory;
pub use task_repository::TaskRepository;
pub use token_validator::TokenValidator;
pub use unit_repository::UnitRepository;
