//! HTTP routes for unit endpoints.
//!
//! This router is nested under `/courses/:course_id/units`, so the course id
//! path segment is captured here even though the routes below only name the
//! unit segment.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_unit, delete_unit, get_unit, list_units, update_unit, UnitHandlers,
};

/// Creates the unit router with all endpoints.
pub fn unit_routes(handlers: UnitHandlers) -> Router {
    Router::new()
        .route("/", post(create_unit))
        .route("/", get(list_units))
        .route(
            "/:unit_id",
            get(get_unit).put(update_unit).delete(delete_unit),
        )
        .with_state(handlers)
}
