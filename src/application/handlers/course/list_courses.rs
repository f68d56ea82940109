//! ListCoursesHandler - Query handler for a principal's courses.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::UserId;
use crate::ports::CourseRepository;

/// Query for all courses owned by the caller.
#[derive(Debug, Clone)]
pub struct ListCoursesQuery {
    pub principal: UserId,
}

/// Handler for listing courses.
///
/// The list is implicitly scoped: there is no way to ask for anyone else's
/// courses, so no resolution step runs here.
pub struct ListCoursesHandler {
    courses: Arc<dyn CourseRepository>,
}

impl ListCoursesHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, query: ListCoursesQuery) -> Result<Vec<Course>, CourseError> {
        Ok(self.courses.find_by_owner(&query.principal).await?)
    }
}
