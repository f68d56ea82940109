//! HTTP DTOs for task endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::task::Task;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new task. Tasks always start not-done, so there is no
/// `done` field here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Request to update a task. PUT semantics: every field is required, an
/// absent deadline clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub done: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Task view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub unit_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub done: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().to_string(),
            unit_id: task.unit_id().to_string(),
            title: task.title().to_string(),
            deadline: task.deadline(),
            done: task.is_done(),
            created_at: task.created_at().as_datetime().to_rfc3339(),
            updated_at: task.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{TaskId, UnitId};

    #[test]
    fn create_task_request_has_no_done_field() {
        // A client cannot create a task that is already done.
        let json = r#"{"title": "Read chapter 4", "done": true}"#;
        let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Read chapter 4");
    }

    #[test]
    fn update_task_request_requires_done() {
        let json = r#"{"title": "Read chapter 4"}"#;
        assert!(serde_json::from_str::<UpdateTaskRequest>(json).is_err());
    }

    #[test]
    fn update_task_request_deserializes() {
        let json = r#"{"title": "Read chapter 4", "deadline": "2099-02-01", "done": true}"#;
        let req: UpdateTaskRequest = serde_json::from_str(json).unwrap();
        assert!(req.done);
        assert_eq!(req.deadline, NaiveDate::from_ymd_opt(2099, 2, 1));
    }

    #[test]
    fn task_response_conversion() {
        let task = Task::new(
            TaskId::new(),
            UnitId::new(),
            "Exercise 4.2".to_string(),
            None,
        )
        .unwrap();

        let response: TaskResponse = task.into();
        assert_eq!(response.title, "Exercise 4.2");
        assert!(!response.done);
    }
}
