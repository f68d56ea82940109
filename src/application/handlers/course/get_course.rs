//! GetCourseHandler - Query handler for a single owned course.

use std::sync::Arc;

use crate::application::resolver::OwnershipResolver;
use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::{CourseId, UserId};
use crate::domain::resolver::ResourceKind;
use crate::ports::CourseRepository;

/// Query for one course by ID.
#[derive(Debug, Clone)]
pub struct GetCourseQuery {
    pub principal: UserId,
    pub course_id: CourseId,
}

/// Handler for fetching a course.
pub struct GetCourseHandler {
    resolver: Arc<OwnershipResolver>,
    courses: Arc<dyn CourseRepository>,
}

impl GetCourseHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { resolver, courses }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<Course, CourseError> {
        // Courses sit at the top of the hierarchy: empty chain, direct
        // ownership check.
        self.resolver
            .resolve(
                &query.principal,
                &[],
                ResourceKind::Course,
                query.course_id.into(),
            )
            .await?;

        self.courses
            .find_by_id(&query.course_id)
            .await?
            .ok_or(CourseError::NotFound)
    }
}
