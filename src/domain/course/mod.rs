//! Course module - owned top-level containers.

mod aggregate;
mod errors;

pub use aggregate::{Course, MAX_NAME_LENGTH};
pub use errors::CourseError;
