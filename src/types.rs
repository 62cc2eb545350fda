//! Wire types for the remote todo service and the derived summary.

use serde::Deserialize;

/// User record as returned by `GET /users/{id}`.
///
/// Only the display name is consumed; any other fields in the response are
/// ignored. An absent `name` deserializes to an empty string, which the
/// client treats as "not found" rather than rendering a blank employee name.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Display name of the employee.
    #[serde(default)]
    pub name: String,
}

/// A single task as returned by `GET /todos?userId={id}`.
///
/// `completed` is a strict boolean: a response carrying anything other than
/// JSON `true`/`false` in that field is rejected as malformed instead of
/// being coerced. A missing field defaults to not completed.
#[derive(Debug, Clone, Deserialize)]
pub struct Todo {
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
}

/// Completion summary derived from one employee's task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSummary {
    /// Total number of tasks received.
    pub total: usize,
    /// Titles of completed tasks, in the order they were received.
    pub completed_titles: Vec<String>,
}

impl TaskSummary {
    /// Number of completed tasks. Never exceeds `total` by construction.
    pub fn done(&self) -> usize {
        self.completed_titles.len()
    }
}
