//! HTTP client for the remote todo service.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::{ProgressError, Result};
use crate::types::{Todo, User};

/// Base URL of the public JSONPlaceholder service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the user and todo endpoints of the remote service.
///
/// The base URL is injected at construction so tests can point the client at
/// a local mock server instead of the real service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ProgressError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Fetch the user record for `id` and return it.
    ///
    /// A 404 from the service, and a record whose name is missing or empty,
    /// both resolve to [`ProgressError::NotFound`].
    pub async fn fetch_user(&self, id: i64) -> Result<User> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!("fetching user record from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ProgressError::Transport)?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ProgressError::NotFound(id)),
            status if !status.is_success() => {
                return Err(ProgressError::UnexpectedStatus {
                    endpoint: "/users/{id}",
                    status,
                })
            },
            _ => {},
        }

        let body = response.text().await.map_err(ProgressError::Transport)?;
        let user: User = serde_json::from_str(&body).map_err(|source| {
            ProgressError::ResponseFormat {
                endpoint: "/users/{id}",
                source,
            }
        })?;

        if user.name.trim().is_empty() {
            return Err(ProgressError::NotFound(id));
        }

        Ok(user)
    }

    /// Fetch the task list for `id`, preserving the order the service
    /// returned.
    ///
    /// A 404 here is an unexpected status, not "employee not found": the
    /// collection endpoint answers an unknown user with an empty array.
    pub async fn fetch_todos(&self, id: i64) -> Result<Vec<Todo>> {
        let url = format!("{}/todos", self.base_url);
        debug!("fetching task list from {url} for user {id}");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", id)])
            .send()
            .await
            .map_err(ProgressError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProgressError::UnexpectedStatus {
                endpoint: "/todos",
                status,
            });
        }

        let body = response.text().await.map_err(ProgressError::Transport)?;
        let todos: Vec<Todo> = serde_json::from_str(&body).map_err(|source| {
            ProgressError::ResponseFormat {
                endpoint: "/todos",
                source,
            }
        })?;

        debug!("received {} tasks for user {id}", todos.len());
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_new_keeps_bare_base_url() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
