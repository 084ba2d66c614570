//! api::rest
//!
//! GitLab REST client over reqwest.
//!
//! # Design
//!
//! Requests are plain authenticated GETs: the full URL is
//! `base_url + "api/v3/" + path` with the private token appended as a query
//! parameter (`&` when the path already carries a query string, `?`
//! otherwise). There is no pagination logic here - callers pass explicit
//! `page`/`per_page` values and interpret short pages themselves.
//!
//! # Debug Echo
//!
//! In debug mode every constructed URL is echoed to stderr. The echo
//! happens before the token is appended, so the secret never reaches the
//! terminal or a captured log.
//!
//! # Example
//!
//! ```ignore
//! use milemark::api::{rest::RestClient, ProjectApi};
//! use milemark::ui::output::Verbosity;
//!
//! let api = RestClient::new("https://gitlab.example.com/", "glpat-xxx", Verbosity::Normal);
//! let projects = api.list_projects(1, 100).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::traits::{ApiError, ProjectApi};
use super::types::{Issue, Milestone, Project};
use crate::ui::output::{self, Verbosity};

/// GitLab REST client.
///
/// Holds the base URL (trailing slash included), the private token, and the
/// verbosity level that gates the debug URL echo.
pub struct RestClient {
    /// HTTP client for making requests
    client: Client,
    /// Instance base URL, with trailing slash (e.g. `https://gitlab.example.com/`)
    base_url: String,
    /// Private access token, sent as the `private_token` query parameter
    token: String,
    /// Controls the debug URL echo
    verbosity: Verbosity,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("has_token", &!self.token.is_empty())
            .field("verbosity", &self.verbosity)
            .finish()
    }
}

/// GitLab error response format.
#[derive(Deserialize)]
struct GitlabErrorResponse {
    message: serde_json::Value,
}

impl RestClient {
    /// Create a new client.
    ///
    /// `base_url` must end with a slash; [`crate::cli`] normalizes user
    /// input before constructing the client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
            verbosity,
        }
    }

    /// Get the instance base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path, without the token.
    fn endpoint(&self, path: &str) -> String {
        format!("{}api/v3/{}", self.base_url, path)
    }

    /// Append the token as a query parameter.
    fn with_token(&self, url: &str) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{}{}private_token={}", url, separator, self.token)
    }

    /// Issue a GET for `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        output::debug(&url, self.verbosity);

        let response = self
            .client
            .get(self.with_token(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // GitLab error bodies carry a "message" field, but its shape
            // varies (string or object); fall back to the status line.
            let message = match response.json::<GitlabErrorResponse>().await {
                Ok(err) => match err.message {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                },
                Err(_) => status.to_string(),
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ProjectApi for RestClient {
    async fn list_projects(&self, page: u32, per_page: u32) -> Result<Vec<Project>, ApiError> {
        self.get_json(&format!("projects?page={}&per_page={}", page, per_page))
            .await
    }

    async fn list_issues(
        &self,
        project_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>, ApiError> {
        self.get_json(&format!(
            "projects/{}/issues?page={}&per_page={}",
            project_id, page, per_page
        ))
        .await
    }

    async fn list_milestones(&self, project_id: u64) -> Result<Vec<Milestone>, ApiError> {
        self.get_json(&format!("projects/{}/milestones", project_id))
            .await
    }
}
