//! Top-level router assembly.
//!
//! Wires the per-resource routers into one API surface:
//!
//! ```text
//! /health                                                  (no auth)
//! /api/learners                                            POST
//! /api/learners/me                                         GET
//! /api/courses                                             POST, GET
//! /api/courses/:course_id                                  GET, PUT, DELETE
//! /api/courses/:course_id/units                            POST, GET
//! /api/courses/:course_id/units/:unit_id                   GET, PUT, DELETE
//! /api/courses/:course_id/units/:unit_id/tasks             POST, GET
//! /api/courses/:course_id/units/:unit_id/tasks/:task_id    GET, PUT, DELETE
//! /api/courses/:course_id/units/:unit_id/tasks/:task_id/complete  POST
//! ```
//!
//! The nested routers reuse the parent path parameters, so the same segment
//! name (`:course_id`, `:unit_id`) must be used consistently across nests.

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::course::{course_routes, CourseHandlers};
use super::learner::{learner_routes, LearnerHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::task::{task_routes, TaskHandlers};
use super::unit::{unit_routes, UnitHandlers};

/// Creates the full application router.
///
/// Everything under `/api` goes through the auth middleware; `/health` stays
/// open for load balancer probes.
pub fn api_router(
    validator: AuthState,
    course_handlers: CourseHandlers,
    unit_handlers: UnitHandlers,
    task_handlers: TaskHandlers,
    learner_handlers: LearnerHandlers,
) -> Router {
    let api = Router::new()
        .nest("/courses", course_routes(course_handlers))
        .nest("/courses/:course_id/units", unit_routes(unit_handlers))
        .nest(
            "/courses/:course_id/units/:unit_id/tasks",
            task_routes(task_handlers),
        )
        .nest("/learners", learner_routes(learner_handlers))
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .fallback(fallback)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "code": "NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}
