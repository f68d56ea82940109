//! HTTP handlers for course endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::course::{
    CreateCourseCommand, CreateCourseHandler, DeleteCourseCommand, DeleteCourseHandler,
    GetCourseHandler, GetCourseQuery, ListCoursesHandler, ListCoursesQuery, UpdateCourseCommand,
    UpdateCourseHandler,
};
use crate::domain::course::CourseError;
use crate::domain::foundation::CourseId;

use super::dto::{CourseResponse, CreateCourseRequest, UpdateCourseRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CourseHandlers {
    create_handler: Arc<CreateCourseHandler>,
    list_handler: Arc<ListCoursesHandler>,
    get_handler: Arc<GetCourseHandler>,
    update_handler: Arc<UpdateCourseHandler>,
    delete_handler: Arc<DeleteCourseHandler>,
}

impl CourseHandlers {
    pub fn new(
        create_handler: Arc<CreateCourseHandler>,
        list_handler: Arc<ListCoursesHandler>,
        get_handler: Arc<GetCourseHandler>,
        update_handler: Arc<UpdateCourseHandler>,
        delete_handler: Arc<DeleteCourseHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/courses - Create a new course
pub async fn create_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(principal): RequireAuth,
    Json(req): Json<CreateCourseRequest>,
) -> Response {
    let cmd = CreateCourseCommand {
        principal: principal.id,
        name: req.name.trim().to_string(),
        mid_deadline: req.mid_deadline,
        final_deadline: req.final_deadline,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(course) => {
            let response: CourseResponse = course.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_course_error(e),
    }
}

/// GET /api/courses - List the caller's courses
pub async fn list_courses(
    State(handlers): State<CourseHandlers>,
    RequireAuth(principal): RequireAuth,
) -> Response {
    let query = ListCoursesQuery {
        principal: principal.id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(courses) => {
            let response: Vec<CourseResponse> = courses.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_course_error(e),
    }
}

/// GET /api/courses/:course_id - Get course details
pub async fn get_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(principal): RequireAuth,
    Path(course_id): Path<String>,
) -> Response {
    let course_id = match course_id.parse::<CourseId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid course ID")),
            )
                .into_response()
        }
    };

    let query = GetCourseQuery {
        principal: principal.id,
        course_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(course) => {
            let response: CourseResponse = course.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_course_error(e),
    }
}

/// PUT /api/courses/:course_id - Replace course name and deadlines
pub async fn update_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(principal): RequireAuth,
    Path(course_id): Path<String>,
    Json(req): Json<UpdateCourseRequest>,
) -> Response {
    let course_id = match course_id.parse::<CourseId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid course ID")),
            )
                .into_response()
        }
    };

    let cmd = UpdateCourseCommand {
        principal: principal.id,
        course_id,
        name: req.name.trim().to_string(),
        mid_deadline: req.mid_deadline,
        final_deadline: req.final_deadline,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(course) => {
            let response: CourseResponse = course.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_course_error(e),
    }
}

/// DELETE /api/courses/:course_id - Delete a course
pub async fn delete_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(principal): RequireAuth,
    Path(course_id): Path<String>,
) -> Response {
    let course_id = match course_id.parse::<CourseId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid course ID")),
            )
                .into_response()
        }
    };

    let cmd = DeleteCourseCommand {
        principal: principal.id,
        course_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_course_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_course_error(error: CourseError) -> Response {
    match error {
        // Uniform body: a course that doesn't exist and a course owned by
        // someone else must be indistinguishable.
        CourseError::NotFound => (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found()))
            .into_response(),
        CourseError::DuplicateName(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        CourseError::InUse => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::resource_in_use(error.message())),
        )
            .into_response(),
        CourseError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        CourseError::Config(ref config) => {
            tracing::error!(error = %config, "Resolver misconfiguration in course endpoint");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
        CourseError::Infrastructure(ref msg) => {
            tracing::error!(error = %msg, "Infrastructure error in course endpoint");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
