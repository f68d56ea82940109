//! HTTP handlers for learner profile endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::learner::{
    GetLearnerHandler, GetLearnerQuery, RegisterLearnerCommand, RegisterLearnerHandler,
};
use crate::domain::learner::LearnerError;

use super::dto::{LearnerResponse, RegisterLearnerRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LearnerHandlers {
    register_handler: Arc<RegisterLearnerHandler>,
    get_handler: Arc<GetLearnerHandler>,
}

impl LearnerHandlers {
    pub fn new(
        register_handler: Arc<RegisterLearnerHandler>,
        get_handler: Arc<GetLearnerHandler>,
    ) -> Self {
        Self {
            register_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/learners - Register a profile for the authenticated principal
pub async fn register_learner(
    State(handlers): State<LearnerHandlers>,
    RequireAuth(principal): RequireAuth,
    Json(req): Json<RegisterLearnerRequest>,
) -> Response {
    let cmd = RegisterLearnerCommand {
        principal: principal.id,
        display_name: req.display_name.trim().to_string(),
        birth_date: req.birth_date,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(profile) => {
            let response: LearnerResponse = profile.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_learner_error(e),
    }
}

/// GET /api/learners/me - Get the caller's own profile
pub async fn get_own_profile(
    State(handlers): State<LearnerHandlers>,
    RequireAuth(principal): RequireAuth,
) -> Response {
    let query = GetLearnerQuery {
        principal: principal.id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(profile) => {
            let response: LearnerResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_learner_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_learner_error(error: LearnerError) -> Response {
    match error {
        LearnerError::AlreadyRegistered => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::profile_exists(error.message())),
        )
            .into_response(),
        // The caller's own profile is not existence-hidden: telling them to
        // register first leaks nothing.
        LearnerError::NotRegistered => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::profile_not_found(error.message())),
        )
            .into_response(),
        LearnerError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        LearnerError::Infrastructure(ref msg) => {
            tracing::error!(error = %msg, "Infrastructure error in learner endpoint");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
