//! Task command and query handlers.

mod complete_task;
mod create_task;
mod delete_task;
mod get_task;
mod list_tasks;
mod update_task;

pub use complete_task::{CompleteTaskCommand, CompleteTaskHandler};
pub use create_task::{CreateTaskCommand, CreateTaskHandler};
pub use delete_task::{DeleteTaskCommand, DeleteTaskHandler};
pub use get_task::{GetTaskHandler, GetTaskQuery};
pub use list_tasks::{ListTasksHandler, ListTasksQuery};
pub use update_task::{UpdateTaskCommand, UpdateTaskHandler};
