//! CreateCourseHandler - Command handler for creating courses.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::{CourseId, UserId};
use crate::ports::CourseRepository;

/// Command to create a new course.
#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub principal: UserId,
    pub name: String,
    pub mid_deadline: NaiveDate,
    pub final_deadline: NaiveDate,
}

/// Handler for creating courses.
pub struct CreateCourseHandler {
    courses: Arc<dyn CourseRepository>,
}

impl CreateCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, cmd: CreateCourseCommand) -> Result<Course, CourseError> {
        // 1. Build the aggregate (field validation happens here)
        let course = Course::new(
            CourseId::new(),
            cmd.principal.clone(),
            cmd.name,
            cmd.mid_deadline,
            cmd.final_deadline,
        )?;

        // 2. Per-owner name uniqueness
        if self
            .courses
            .name_taken(&cmd.principal, course.name(), None)
            .await?
        {
            return Err(CourseError::duplicate_name(course.name()));
        }

        // 3. Persist
        self.courses.save(&course).await?;
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCourseRepository, InMemoryStore};
    use crate::domain::foundation::Timestamp;
    use chrono::Duration;

    fn future(days: i64) -> NaiveDate {
        Timestamp::today() + Duration::days(days)
    }

    fn principal() -> UserId {
        UserId::new("auth0|teacher-1").unwrap()
    }

    fn handler_over(store: InMemoryStore) -> CreateCourseHandler {
        CreateCourseHandler::new(Arc::new(InMemoryCourseRepository::new(store)))
    }

    fn command(name: &str) -> CreateCourseCommand {
        CreateCourseCommand {
            principal: principal(),
            name: name.to_string(),
            mid_deadline: future(30),
            final_deadline: future(60),
        }
    }

    #[tokio::test]
    async fn creates_course_with_valid_input() {
        let store = InMemoryStore::new();
        let handler = handler_over(store.clone());

        let course = handler.handle(command("Rust Fundamentals")).await.unwrap();

        assert_eq!(course.name(), "Rust Fundamentals");
        assert_eq!(course.owner_id(), &principal());
        assert_eq!(store.course_count(), 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_name_for_same_owner() {
        let store = InMemoryStore::new();
        let handler = handler_over(store.clone());

        handler.handle(command("Rust Fundamentals")).await.unwrap();
        let result = handler.handle(command("Rust Fundamentals")).await;

        assert_eq!(
            result,
            Err(CourseError::DuplicateName("Rust Fundamentals".to_string()))
        );
        assert_eq!(store.course_count(), 1);
    }

    #[tokio::test]
    async fn allows_same_name_for_different_owners() {
        let store = InMemoryStore::new();
        let handler = handler_over(store.clone());

        handler.handle(command("Rust Fundamentals")).await.unwrap();

        let mut other = command("Rust Fundamentals");
        other.principal = UserId::new("auth0|teacher-2").unwrap();
        let result = handler.handle(other).await;

        assert!(result.is_ok());
        assert_eq!(store.course_count(), 2);
    }

    #[tokio::test]
    async fn rejects_inverted_deadlines() {
        let handler = handler_over(InMemoryStore::new());

        let mut cmd = command("History");
        cmd.mid_deadline = future(60);
        cmd.final_deadline = future(30);
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(CourseError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let handler = handler_over(InMemoryStore::new());

        let result = handler.handle(command("")).await;

        assert!(matches!(result, Err(CourseError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let store = InMemoryStore::new().with_failure("Simulated outage");
        let handler = handler_over(store);

        let result = handler.handle(command("Rust Fundamentals")).await;

        assert!(matches!(result, Err(CourseError::Infrastructure(_))));
    }
}
