//! api::traits
//!
//! The `ProjectApi` trait and its error type.
//!
//! # Design
//!
//! The trait is async because every operation is network I/O, but callers
//! are expected to await each call before issuing the next: the changelog
//! pipeline depends on pages arriving in fetch order.
//!
//! There is no retry anywhere. A failed request or an undecodable body
//! aborts the whole run, which is the desired behavior for a batch report
//! generator: partial changelogs are worse than no changelog.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Issue, Milestone, Project};

/// Errors from API operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode response from '{path}': {message}")]
    Decode {
        /// Endpoint path (without the token parameter)
        path: String,
        /// Decoder error message
        message: String,
    },
}

/// Read operations against a GitLab-compatible project API.
///
/// Implementations must be `Send + Sync` so the pipeline can hold a
/// `&dyn ProjectApi` across await points.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Fetch one page of the instance-wide project listing.
    ///
    /// Pages start at 1. A page shorter than `per_page` is the last page.
    async fn list_projects(&self, page: u32, per_page: u32) -> Result<Vec<Project>, ApiError>;

    /// Fetch one page of a project's issues.
    ///
    /// The API returns newest issues first within and across pages.
    async fn list_issues(
        &self,
        project_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>, ApiError>;

    /// Fetch all milestones for a project in one call.
    async fn list_milestones(&self, project_id: u64) -> Result<Vec<Milestone>, ApiError>;
}
