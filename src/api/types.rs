//! api::types
//!
//! Serde types for the slice of the GitLab API this tool consumes.
//!
//! Only the fields the pipeline reads are declared; everything else in the
//! response bodies is ignored by serde. Issues and milestones are read-only
//! snapshots - nothing here is ever mutated after decoding.

use serde::Deserialize;

/// A project as returned by the `projects` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Numeric project id, used for all follow-up requests.
    pub id: u64,
    /// Full slug including the group prefix, e.g. `group/project`.
    pub path_with_namespace: String,
}

/// Issue state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// The issue is open. GitLab has emitted both `open` and `opened`
    /// across API generations; accept either spelling.
    #[serde(alias = "opened")]
    Open,
    /// The issue is closed.
    Closed,
}

/// The milestone reference embedded in an issue.
///
/// Only the id matters: it is the grouping key joining issues to the
/// milestones fetched separately.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneRef {
    pub id: u64,
}

/// An issue as returned by the `projects/{id}/issues` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Global internal id.
    pub id: u64,
    /// Project-local display number, the one shown in issue URLs.
    pub iid: u64,
    pub title: String,
    pub state: IssueState,
    /// Label names attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
    /// The milestone the issue belongs to, if any. Issues without a
    /// milestone never appear in the changelog.
    pub milestone: Option<MilestoneRef>,
}

impl Issue {
    /// Whether the issue is closed.
    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }
}

/// Milestone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    /// Still open; rendered with an `(Unreleased)` marker.
    Active,
    /// Closed, i.e. released.
    Closed,
}

/// A milestone as returned by the `projects/{id}/milestones` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub title: String,
    /// ISO due date (`YYYY-MM-DD`). GitLab returns `null` for milestones
    /// without one; those sort after every dated milestone.
    pub due_date: Option<String>,
    pub state: MilestoneState,
}
