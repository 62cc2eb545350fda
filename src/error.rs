//! Error types for the todo-progress pipeline.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching and summarizing an employee's tasks.
///
/// Argument-count and non-integer-id errors never reach this type; they are
/// rejected by the CLI parser before any network call is made.
#[derive(Error, Debug)]
pub enum ProgressError {
    /// The user lookup did not resolve to a usable employee record.
    ///
    /// Raised for a 404 on the user endpoint and for a record whose name
    /// field is missing or empty.
    #[error("employee {0} not found")]
    NotFound(i64),

    /// Network-layer failure on either fetch: DNS, connection refused,
    /// timeout.
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a status code the pipeline cannot act on.
    #[error("{endpoint} returned unexpected status {status}")]
    UnexpectedStatus {
        /// The endpoint that returned the status.
        endpoint: &'static str,
        /// The status code received.
        status: StatusCode,
    },

    /// The response body was not the JSON shape the pipeline expects.
    #[error("malformed response from {endpoint}: {source}")]
    ResponseFormat {
        /// The endpoint whose body failed to decode.
        endpoint: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Anything not covered by a more specific variant.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ProgressError>;
