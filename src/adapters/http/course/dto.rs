//! HTTP DTOs for course endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::course::Course;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub mid_deadline: NaiveDate,
    pub final_deadline: NaiveDate,
}

/// Request to update a course. PUT semantics: every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: String,
    pub mid_deadline: NaiveDate,
    pub final_deadline: NaiveDate,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Course view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub mid_deadline: NaiveDate,
    pub final_deadline: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id().to_string(),
            owner_id: course.owner_id().to_string(),
            name: course.name().to_string(),
            mid_deadline: course.mid_deadline(),
            final_deadline: course.final_deadline(),
            created_at: course.created_at().as_datetime().to_rfc3339(),
            updated_at: course.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
