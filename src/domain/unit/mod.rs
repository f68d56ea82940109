//! Unit module - course chunks resolved through their parent.

mod aggregate;
mod errors;

pub use aggregate::{Unit, MAX_TITLE_LENGTH};
pub use errors::UnitError;
