//! Employee todo-progress reporting.
//!
//! This crate fetches an employee's identity and task list from a remote
//! REST API and renders a completion summary. It can be used as a standalone
//! CLI tool (`todo-progress`) or as a library.
//!
//! # Examples
//!
//! ```no_run
//! use todo_progress::{run, ApiClient, DEFAULT_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new(DEFAULT_BASE_URL)?;
//!     let report = run(1, &client).await?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod report;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ProgressError, Result};
pub use report::render_report;
pub use summary::summarize;
pub use types::{TaskSummary, Todo, User};

/// Run the full pipeline for one employee: resolve the display name, fetch
/// the task list, and render the completion report.
///
/// The two fetches are strictly sequential; the task fetch is never attempted
/// when the user lookup fails. The report string is built only after both
/// fetches succeed, so an error never leaves a partial report behind.
pub async fn run(employee_id: i64, client: &ApiClient) -> Result<String> {
    let user = client.fetch_user(employee_id).await?;
    let todos = client.fetch_todos(employee_id).await?;
    let summary = summarize(&todos);
    Ok(render_report(&user.name, &summary))
}
