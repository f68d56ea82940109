//! UpdateCourseHandler - Command handler for replacing a course's fields.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::resolver::OwnershipResolver;
use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::{CourseId, UserId};
use crate::domain::resolver::ResourceKind;
use crate::ports::CourseRepository;

/// Command to update a course. Full replacement: every field is required.
#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    pub principal: UserId,
    pub course_id: CourseId,
    pub name: String,
    pub mid_deadline: NaiveDate,
    pub final_deadline: NaiveDate,
}

/// Handler for updating courses.
pub struct UpdateCourseHandler {
    resolver: Arc<OwnershipResolver>,
    courses: Arc<dyn CourseRepository>,
}

impl UpdateCourseHandler {
    pub fn new(resolver: Arc<OwnershipResolver>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { resolver, courses }
    }

    pub async fn handle(&self, cmd: UpdateCourseCommand) -> Result<Course, CourseError> {
        // 1. Resolve: the target must be the caller's own course
        self.resolver
            .resolve(
                &cmd.principal,
                &[],
                ResourceKind::Course,
                cmd.course_id.into(),
            )
            .await?;

        // 2. Load and mutate (field validation happens in the aggregate)
        let mut course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or(CourseError::NotFound)?;
        course.rename(cmd.name)?;
        course.reschedule(cmd.mid_deadline, cmd.final_deadline)?;

        // 3. Name uniqueness, excluding the course itself
        if self
            .courses
            .name_taken(course.owner_id(), course.name(), Some(course.id()))
            .await?
        {
            return Err(CourseError::duplicate_name(course.name()));
        }

        // 4. Persist
        self.courses.update(&course).await?;
        Ok(course)
    }
}
