//! Learner module - per-user profile registration.

mod errors;
mod profile;

pub use errors::LearnerError;
pub use profile::{LearnerProfile, MAX_DISPLAY_NAME_LENGTH};
