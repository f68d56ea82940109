//! HTTP routes for course endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_course, delete_course, get_course, list_courses, update_course, CourseHandlers,
};

/// Creates the course router with all endpoints.
pub fn course_routes(handlers: CourseHandlers) -> Router {
    Router::new()
        .route("/", post(create_course))
        .route("/", get(list_courses))
        .route(
            "/:course_id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::memory::{
        InMemoryCourseRepository, InMemoryResourceDirectory, InMemoryStore, InMemoryUnitRepository,
    };
    use crate::application::handlers::course::{
        CreateCourseHandler, DeleteCourseHandler, GetCourseHandler, ListCoursesHandler,
        UpdateCourseHandler,
    };
    use crate::application::OwnershipResolver;
    use crate::domain::resolver::RelationRegistry;

    fn test_handlers() -> CourseHandlers {
        let store = InMemoryStore::new();
        let courses = Arc::new(InMemoryCourseRepository::new(store.clone()));
        let units = Arc::new(InMemoryUnitRepository::new(store.clone()));
        let resolver = Arc::new(OwnershipResolver::new(
            Arc::new(RelationRegistry::standard()),
            Arc::new(InMemoryResourceDirectory::new(store)),
        ));

        CourseHandlers::new(
            Arc::new(CreateCourseHandler::new(courses.clone())),
            Arc::new(ListCoursesHandler::new(courses.clone())),
            Arc::new(GetCourseHandler::new(resolver.clone(), courses.clone())),
            Arc::new(UpdateCourseHandler::new(resolver.clone(), courses.clone())),
            Arc::new(DeleteCourseHandler::new(resolver, courses, units)),
        )
    }

    #[test]
    fn course_routes_creates_router() {
        let _router: Router = course_routes(test_handlers());
    }
}
