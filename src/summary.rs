//! Pure summarization of a task list.

use crate::types::{TaskSummary, Todo};

/// Partition the task list into completed and not, returning the total count
/// and the completed titles in the order they were received.
///
/// Only an explicit `true` completion flag counts as done; the wire type
/// already rejects non-boolean values at the deserialization boundary.
pub fn summarize(todos: &[Todo]) -> TaskSummary {
    let completed_titles = todos
        .iter()
        .filter(|todo| todo.completed)
        .map(|todo| todo.title.clone())
        .collect();

    TaskSummary {
        total: todos.len(),
        completed_titles,
    }
}
