//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod course;
pub mod learner;
pub mod task;
pub mod unit;

pub use course::{
    CreateCourseCommand, CreateCourseHandler,
    DeleteCourseCommand, DeleteCourseHandler,
    GetCourseHandler, GetCourseQuery,
    ListCoursesHandler, ListCoursesQuery,
    UpdateCourseCommand, UpdateCourseHandler,
};
pub use learner::{
    GetLearnerHandler, GetLearnerQuery,
    RegisterLearnerCommand, RegisterLearnerHandler,
};
pub use task::{
    CompleteTaskCommand, CompleteTaskHandler,
    CreateTaskCommand, CreateTaskHandler,
    DeleteTaskCommand, DeleteTaskHandler,
    GetTaskHandler, GetTaskQuery,
    ListTasksHandler, ListTasksQuery,
    UpdateTaskCommand, UpdateTaskHandler,
};
pub use unit::{
    CreateUnitCommand, CreateUnitHandler,
    DeleteUnitCommand, DeleteUnitHandler,
    GetUnitHandler, GetUnitQuery,
    ListUnitsHandler, ListUnitsQuery,
    UpdateUnitCommand, UpdateUnitHandler,
};
