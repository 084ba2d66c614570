//! changelog::milestones
//!
//! Milestone retrieval and ordering.
//!
//! # Ordering
//!
//! Milestones sort descending by due date, ties broken descending by
//! title. ISO dates compare correctly as strings, so the comparison is
//! plain lexicographic. A missing due date compares as the empty string
//! and therefore sorts after every dated milestone. The sort is stable, so
//! fully-equal keys keep their API order and repeated runs against
//! unchanged data produce identical output.

use std::cmp::Ordering;

use crate::api::{Milestone, Project, ProjectApi};

use super::ChangelogError;

/// Compare two milestones: due date descending, then title descending.
///
/// This is a total order over (due date, title) pairs; it is exposed so
/// ordering properties can be tested directly.
pub fn milestone_order(a: &Milestone, b: &Milestone) -> Ordering {
    let a_due = a.due_date.as_deref().unwrap_or("");
    let b_due = b.due_date.as_deref().unwrap_or("");
    b_due.cmp(a_due).then_with(|| b.title.cmp(&a.title))
}

/// Fetch the project's milestones, sorted for rendering.
///
/// One unpaginated call; the API is assumed to return the full set.
pub async fn sorted_milestones(
    api: &dyn ProjectApi,
    project: &Project,
) -> Result<Vec<Milestone>, ChangelogError> {
    let mut milestones = api.list_milestones(project.id).await?;
    milestones.sort_by(milestone_order);
    Ok(milestones)
}
