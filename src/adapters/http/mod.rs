//! HTTP adapters - REST API implementations.
//!
//! Each resource module has its own HTTP adapter (DTOs, handlers, routes);
//! `router` assembles them into the application router and `middleware`
//! holds the auth layer.

pub mod course;
pub mod error;
pub mod learner;
pub mod middleware;
pub mod router;
pub mod task;
pub mod unit;

// Re-export key types for convenience
pub use course::{course_routes, CourseHandlers};
pub use error::ErrorResponse;
pub use learner::{learner_routes, LearnerHandlers};
pub use router::api_router;
pub use task::{task_routes, TaskHandlers};
pub use unit::{unit_routes, UnitHandlers};
