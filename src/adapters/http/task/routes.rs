//! HTTP routes for task endpoints.
//!
//! This router is nested under `/courses/:course_id/units/:unit_id/tasks`,
//! so the course and unit path segments are captured here even though the
//! routes below only name the task segment.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_task, create_task, delete_task, get_task, list_tasks, update_task, TaskHandlers,
};

/// Creates the task router with all endpoints.
pub fn task_routes(handlers: TaskHandlers) -> Router {
    Router::new()
        .route("/", post(create_task))
        .route("/", get(list_tasks))
        .route(
            "/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/:task_id/complete", post(complete_task))
        .with_state(handlers)
}
