//! HTTP routes for learner profile endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_own_profile, register_learner, LearnerHandlers};

/// Creates the learner router with all endpoints.
pub fn learner_routes(handlers: LearnerHandlers) -> Router {
    Router::new()
        .route("/", post(register_learner))
        .route("/me", get(get_own_profile))
        .with_state(handlers)
}
