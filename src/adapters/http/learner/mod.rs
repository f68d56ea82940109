//! HTTP adapter for learner profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{LearnerResponse, RegisterLearnerRequest};
pub use handlers::LearnerHandlers;
pub use routes::learner_routes;
