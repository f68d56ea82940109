//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! Every handler that touches a nested resource goes through the
//! [`OwnershipResolver`](resolver::OwnershipResolver) before acting.

pub mod handlers;
pub mod resolver;

pub use handlers::{
    // Course handlers
    CreateCourseCommand, CreateCourseHandler,
    DeleteCourseCommand, DeleteCourseHandler,
    GetCourseHandler, GetCourseQuery,
    ListCoursesHandler, ListCoursesQuery,
    UpdateCourseCommand, UpdateCourseHandler,
    // Unit handlers
    CreateUnitCommand, CreateUnitHandler,
    DeleteUnitCommand, DeleteUnitHandler,
    GetUnitHandler, GetUnitQuery,
    ListUnitsHandler, ListUnitsQuery,
    UpdateUnitCommand, UpdateUnitHandler,
    // Task handlers
    CompleteTaskCommand, CompleteTaskHandler,
    CreateTaskCommand, CreateTaskHandler,
    DeleteTaskCommand, DeleteTaskHandler,
    GetTaskHandler, GetTaskQuery,
    ListTasksHandler, ListTasksQuery,
    UpdateTaskCommand, UpdateTaskHandler,
    // Learner handlers
    GetLearnerHandler, GetLearnerQuery,
    RegisterLearnerCommand, RegisterLearnerHandler,
};
pub use resolver::OwnershipResolver;
