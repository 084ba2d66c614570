//! changelog::issues
//!
//! Closed-issue aggregation.
//!
//! # Algorithm
//!
//! Fetch the project's issue pages starting at 1, appending each page to an
//! accumulator, and stop at the first page shorter than `per_page` (a
//! zero-issue first page included). Then drop everything that is not a
//! closed issue with a milestone, and reverse the whole merged sequence
//! once: the API returns newest first, so the global reverse yields oldest
//! closed issue first. The reverse is over the concatenation of all pages,
//! not per page.

use crate::api::{Issue, Project, ProjectApi};

use super::ChangelogError;

/// Collect the project's closed, milestoned issues, oldest first.
///
/// Taking `&Project` makes the "repository must be resolved" precondition
/// structural: no request is possible before resolution has succeeded.
pub async fn collect_closed_issues(
    api: &dyn ProjectApi,
    project: &Project,
    per_page: u32,
) -> Result<Vec<Issue>, ChangelogError> {
    let mut all = Vec::new();
    let mut page = 1;
    loop {
        let batch = api.list_issues(project.id, page, per_page).await?;
        let count = batch.len();
        all.extend(batch);

        // An empty page is always the last page, even when `per_page` is
        // zero (library callers can pass it; the CLI rejects it), where
        // the short-page check alone would never fire.
        if count == 0 || count < per_page as usize {
            break;
        }
        page += 1;
    }

    let mut closed: Vec<Issue> = all
        .into_iter()
        .filter(|issue| issue.is_closed() && issue.milestone.is_some())
        .collect();
    closed.reverse();
    Ok(closed)
}
