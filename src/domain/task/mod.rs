//! Task module - leaf work items resolved through unit and course.

mod aggregate;
mod errors;

pub use aggregate::{Task, MAX_TITLE_LENGTH};
pub use errors::TaskError;
