//! Learner profile command and query handlers.

mod get_learner;
mod register_learner;

pub use get_learner::{GetLearnerHandler, GetLearnerQuery};
pub use register_learner::{RegisterLearnerCommand, RegisterLearnerHandler};
