//! api::mock
//!
//! Mock API implementation for deterministic testing.
//!
//! # Design
//!
//! `MockApi` stores whole fixture collections and serves them page by page,
//! slicing with the caller's `per_page` exactly the way a real instance
//! would. Each endpoint counts its fetches so tests can assert how many
//! requests a pipeline stage issued - the resolver and aggregator contracts
//! are stated in request counts.
//!
//! # Example
//!
//! ```ignore
//! use milemark::api::mock::MockApi;
//! use milemark::api::ProjectApi;
//!
//! let api = MockApi::new().with_projects(projects).with_issues(issues);
//! let page = api.list_projects(1, 100).await.unwrap();
//! assert_eq!(api.project_fetches(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::traits::{ApiError, ProjectApi};
use super::types::{Issue, Milestone, Project};

/// Which operation should fail, for testing error paths.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail `list_projects` with the given error.
    ListProjects(ApiError),
    /// Fail `list_issues` with the given error.
    ListIssues(ApiError),
    /// Fail `list_milestones` with the given error.
    ListMilestones(ApiError),
}

/// Mock API for testing.
#[derive(Debug, Default)]
pub struct MockApi {
    projects: Vec<Project>,
    issues: Vec<Issue>,
    milestones: Vec<Milestone>,
    fail_on: Mutex<Option<FailOn>>,
    project_fetches: AtomicUsize,
    issue_fetches: AtomicUsize,
    milestone_fetches: AtomicUsize,
}

impl MockApi {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project listing fixture.
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Set the issue listing fixture (newest first, as the API returns them).
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    /// Set the milestone fixture.
    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = milestones;
        self
    }

    /// Configure one operation to fail.
    pub fn with_failure(self, fail_on: FailOn) -> Self {
        *self.fail_on.lock().expect("mock lock poisoned") = Some(fail_on);
        self
    }

    /// Number of `list_projects` calls issued so far.
    pub fn project_fetches(&self) -> usize {
        self.project_fetches.load(Ordering::SeqCst)
    }

    /// Number of `list_issues` calls issued so far.
    pub fn issue_fetches(&self) -> usize {
        self.issue_fetches.load(Ordering::SeqCst)
    }

    /// Number of `list_milestones` calls issued so far.
    pub fn milestone_fetches(&self) -> usize {
        self.milestone_fetches.load(Ordering::SeqCst)
    }

    /// Serve one page of `items` by slicing with `page`/`per_page`.
    fn page_of<T: Clone>(items: &[T], page: u32, per_page: u32) -> Vec<T> {
        let start = (page.saturating_sub(1) as usize) * per_page as usize;
        if start >= items.len() {
            return Vec::new();
        }
        let end = (start + per_page as usize).min(items.len());
        items[start..end].to_vec()
    }
}

#[async_trait]
impl ProjectApi for MockApi {
    async fn list_projects(&self, page: u32, per_page: u32) -> Result<Vec<Project>, ApiError> {
        self.project_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(FailOn::ListProjects(err)) = &*self.fail_on.lock().expect("mock lock poisoned")
        {
            return Err(err.clone());
        }
        Ok(Self::page_of(&self.projects, page, per_page))
    }

    async fn list_issues(
        &self,
        _project_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>, ApiError> {
        self.issue_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(FailOn::ListIssues(err)) = &*self.fail_on.lock().expect("mock lock poisoned") {
            return Err(err.clone());
        }
        Ok(Self::page_of(&self.issues, page, per_page))
    }

    async fn list_milestones(&self, _project_id: u64) -> Result<Vec<Milestone>, ApiError> {
        self.milestone_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(FailOn::ListMilestones(err)) =
            &*self.fail_on.lock().expect("mock lock poisoned")
        {
            return Err(err.clone());
        }
        Ok(self.milestones.clone())
    }
}
