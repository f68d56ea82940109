//! HTTP handlers for unit endpoints.
//!
//! Units are addressed through their course: every route carries the course
//! id as the first path segment, and the application handlers resolve that
//! chain before touching the unit repository.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::unit::{
    CreateUnitCommand, CreateUnitHandler, DeleteUnitCommand, DeleteUnitHandler, GetUnitHandler,
    GetUnitQuery, ListUnitsHandler, ListUnitsQuery, UpdateUnitCommand, UpdateUnitHandler,
};
use crate::domain::foundation::{CourseId, UnitId};
use crate::domain::unit::UnitError;

use super::dto::{CreateUnitRequest, UnitResponse, UpdateUnitRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UnitHandlers {
    create_handler: Arc<CreateUnitHandler>,
    list_handler: Arc<ListUnitsHandler>,
    get_handler: Arc<GetUnitHandler>,
    update_handler: Arc<UpdateUnitHandler>,
    delete_handler: Arc<DeleteUnitHandler>,
}

impl UnitHandlers {
    pub fn new(
        create_handler: Arc<CreateUnitHandler>,
        list_handler: Arc<ListUnitsHandler>,
        get_handler: Arc<GetUnitHandler>,
        update_handler: Arc<UpdateUnitHandler>,
        delete_handler: Arc<DeleteUnitHandler>,
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
// Path parsing
// ════════════════════════════════════════════════════════════════════════════

fn parse_course_id(raw: &str) -> Result<CourseId, Response> {
    raw.parse::<CourseId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid course ID")),
        )
            .into_response()
    })
}

fn parse_unit_id(raw: &str) -> Result<UnitId, Response> {
    raw.parse::<UnitId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid unit ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/courses/:course_id/units - Create a unit in a course
pub async fn create_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(principal): RequireAuth,
    Path(course_id): Path<String>,
    Json(req): Json<CreateUnitRequest>,
) -> Response {
    let course_id = match parse_course_id(&course_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateUnitCommand {
        principal: principal.id,
        course_id,
        title: req.title.trim().to_string(),
        deadline: req.deadline,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(unit) => {
            let response: UnitResponse = unit.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_unit_error(e),
    }
}

/// GET /api/courses/:course_id/units - List units in a course
pub async fn list_units(
    State(handlers): State<UnitHandlers>,
    RequireAuth(principal): RequireAuth,
    Path(course_id): Path<String>,
) -> Response {
    let course_id = match parse_course_id(&course_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ListUnitsQuery {
        principal: principal.id,
        course_id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(units) => {
            let response: Vec<UnitResponse> = units.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_unit_error(e),
    }
}

/// GET /api/courses/:course_id/units/:unit_id - Get unit details
pub async fn get_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id)): Path<(String, String)>,
) -> Response {
    let (course_id, unit_id) = match (parse_course_id(&course_id), parse_unit_id(&unit_id)) {
        (Ok(course_id), Ok(unit_id)) => (course_id, unit_id),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let query = GetUnitQuery {
        principal: principal.id,
        course_id,
        unit_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(unit) => {
            let response: UnitResponse = unit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_unit_error(e),
    }
}

/// PUT /api/courses/:course_id/units/:unit_id - Replace unit title and deadline
pub async fn update_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id)): Path<(String, String)>,
    Json(req): Json<UpdateUnitRequest>,
) -> Response {
    let (course_id, unit_id) = match (parse_course_id(&course_id), parse_unit_id(&unit_id)) {
        (Ok(course_id), Ok(unit_id)) => (course_id, unit_id),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let cmd = UpdateUnitCommand {
        principal: principal.id,
        course_id,
        unit_id,
        title: req.title.trim().to_string(),
        deadline: req.deadline,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(unit) => {
            let response: UnitResponse = unit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_unit_error(e),
    }
}

/// DELETE /api/courses/:course_id/units/:unit_id - Delete a unit
pub async fn delete_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(principal): RequireAuth,
    Path((course_id, unit_id)): Path<(String, String)>,
) -> Response {
    let (course_id, unit_id) = match (parse_course_id(&course_id), parse_unit_id(&unit_id)) {
        (Ok(course_id), Ok(unit_id)) => (course_id, unit_id),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let cmd = DeleteUnitCommand {
        principal: principal.id,
        course_id,
        unit_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_unit_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_unit_error(error: UnitError) -> Response {
    match error {
        // Uniform body: a broken course link and a missing unit produce the
        // same response.
        UnitError::NotFound => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
        }
        UnitError::DuplicateTitle(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        UnitError::InUse => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::resource_in_use(error.message())),
        )
            .into_response(),
        UnitError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        UnitError::Config(ref config) => {
            tracing::error!(error = %config, "Resolver misconfiguration in unit endpoint");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
        UnitError::Infrastructure(ref msg) => {
            tracing::error!(error = %msg, "Infrastructure error in unit endpoint");
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
    fn unit_error_not_found_maps_to_404() {
        let response = handle_unit_error(UnitError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unit_error_duplicate_title_maps_to_400() {
        let response = handle_unit_error(UnitError::duplicate_title("Ownership"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unit_error_in_use_maps_to_409() {
        let response = handle_unit_error(UnitError::InUse);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unit_error_infrastructure_maps_to_500() {
        let response = handle_unit_error(UnitError::infrastructure("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_course_id_rejects_garbage() {
        assert!(parse_course_id("not-a-uuid").is_err());
    }

    #[test]
    fn parse_unit_id_accepts_uuid() {
        let raw = uuid::Uuid::new_v4().to_string();
        assert!(parse_unit_id(&raw).is_ok());
    }
}
