//! HTTP handlers for task endpoints.
//!
//! Tasks sit at the bottom of the ownership chain: every route carries the
//! course and unit ids, and the application handlers walk that two-link
//! chain before touching the task repository.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::task::{
    CompleteTaskCommand, CompleteTaskHandler, CreateTaskCommand, CreateTaskHandler,
    DeleteTaskCommand, DeleteTaskHandler, GetTaskHandler, GetTaskQuery, ListTasksHandler,
    ListTasksQuery, UpdateTaskCommand, UpdateTaskHandler,
};
use crate::domain::foundation::{CourseId, TaskId, UnitId};
use crate::domain::task::TaskError;

use super::dto::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TaskHandlers {
    create_handler: Arc<CreateTaskHandler>,
    list_handler: Arc<ListTasksHandler>,
    get_handler: Arc<GetTaskHandler>,
    update_handler: Arc<UpdateTaskHandler>,
    delete_handler: Arc<DeleteTaskHandler>,
    complete_handler: Arc<CompleteTaskHandler>,
}

impl TaskHandlers {
    pub fn new(
        create_handler: Arc<CreateTaskHandler>,
        list_handler: Arc<ListTasksHandler>,
        get_handler: Arc<GetTaskHandler>,
        update_handler: Arc<UpdateTaskHandler>,
        delete_handler: Arc<DeleteTaskHandler>,
        complete_handler: Arc<CompleteTaskHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
            complete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Path parsing
// ════════════════════════════════════════════════════════════════════════════

/// Parses the course and unit segments shared by every task route.
fn parse_scope(course_id: &str, unit_id: &str) -> Result<(CourseId, UnitId), Response> {
    let course_id = course_id.parse::<CourseId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid course ID")),
        )
            .into_response()
    })?;
    let unit_id = unit_id.parse::<UnitId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid unit ID")),
        )
            .into_response()
    })?;
    Ok((course_id, unit_id))
}

fn parse_task_id(raw: &str) -> Result<TaskId, Response> {
    raw.parse::<TaskId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid task ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/courses/:course_id/units/:unit_id/tasks - Create a task
pub async fn create_task(
    State(handlers): State<TaskHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id)): Path<(String, String)>,
    Json(req): Json<CreateTaskRequest>,
) -> Response {
    let (course_id, unit_id) = match parse_scope(&course_id, &unit_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = CreateTaskCommand {
        principal: principal.id,
        course_id,
        unit_id,
        title: req.title.trim().to_string(),
        deadline: req.deadline,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(task) => {
            let response: TaskResponse = task.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_task_error(e),
    }
}

/// GET /api/courses/:course_id/units/:unit_id/tasks - List tasks in a unit
pub async fn list_tasks(
    State(handlers): State<TaskHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id)): Path<(String, String)>,
) -> Response {
    let (course_id, unit_id) = match parse_scope(&course_id, &unit_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let query = ListTasksQuery {
        principal: principal.id,
        course_id,
        unit_id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(tasks) => {
            let response: Vec<TaskResponse> = tasks.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_task_error(e),
    }
}

/// GET /api/courses/:course_id/units/:unit_id/tasks/:task_id - Get task details
pub async fn get_task(
    State(handlers): State<TaskHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id, task_id)): Path<(String, String, String)>,
) -> Response {
    let (course_id, unit_id) = match parse_scope(&course_id, &unit_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let task_id = match parse_task_id(&task_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetTaskQuery {
        principal: principal.id,
        course_id,
        unit_id,
        task_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(task) => {
            let response: TaskResponse = task.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_task_error(e),
    }
}

/// PUT /api/courses/:course_id/units/:unit_id/tasks/:task_id - Replace a task
pub async fn update_task(
    State(handlers): State<TaskHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id, task_id)): Path<(String, String, String)>,
    Json(req): Json<UpdateTaskRequest>,
) -> Response {
    let (course_id, unit_id) = match parse_scope(&course_id, &unit_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let task_id = match parse_task_id(&task_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateTaskCommand {
        principal: principal.id,
        course_id,
        unit_id,
        task_id,
        title: req.title.trim().to_string(),
        deadline: req.deadline,
        done: req.done,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(task) => {
            let response: TaskResponse = task.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_task_error(e),
    }
}

/// DELETE /api/courses/:course_id/units/:unit_id/tasks/:task_id - Delete a task
pub async fn delete_task(
    State(handlers): State<TaskHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id, task_id)): Path<(String, String, String)>,
) -> Response {
    let (course_id, unit_id) = match parse_scope(&course_id, &unit_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let task_id = match parse_task_id(&task_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteTaskCommand {
        principal: principal.id,
        course_id,
        unit_id,
        task_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_task_error(e),
    }
}

/// POST /api/courses/:course_id/units/:unit_id/tasks/:task_id/complete - Mark done
///
/// Idempotent: completing an already-done task returns 200 with the task
/// unchanged.
pub async fn complete_task(
    State(handlers): State<TaskHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id, task_id)): Path<(String, String, String)>,
) -> Response {
    let (course_id, unit_id) = match parse_scope(&course_id, &unit_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let task_id = match parse_task_id(&task_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CompleteTaskCommand {
        principal: principal.id,
        course_id,
        unit_id,
        task_id,
    };

    match handlers.complete_handler.handle(cmd).await {
        Ok(task) => {
            let response: TaskResponse = task.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_task_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_task_error(error: TaskError) -> Response {
    match error {
        // Uniform body regardless of which chain link broke.
        TaskError::NotFound => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
        }
        TaskError::DuplicateTitle(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        TaskError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        TaskError::Config(ref config) => {
            tracing::error!(error = %config, "Resolver misconfiguration in task endpoint");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
        TaskError::Infrastructure(ref msg) => {
            tracing::error!(error = %msg, "Infrastructure error in task endpoint");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_error_not_found_maps_to_404() {
        let response = handle_task_error(TaskError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn task_error_duplicate_title_maps_to_400() {
        let response = handle_task_error(TaskError::duplicate_title("Exercise 1"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn task_error_validation_failed_maps_to_400() {
        let error = TaskError::validation("title", "Title cannot be empty");
        let response = handle_task_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn task_error_infrastructure_maps_to_500() {
        let response = handle_task_error(TaskError::infrastructure("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_scope_rejects_bad_course_segment() {
        let unit = uuid::Uuid::new_v4().to_string();
        assert!(parse_scope("garbage", &unit).is_err());
    }

    #[test]
    fn parse_scope_accepts_uuid_pair() {
        let course = uuid::Uuid::new_v4().to_string();
        let unit = uuid::Uuid::new_v4().to_string();
        assert!(parse_scope(&course, &unit).is_ok());
    }
}
