//! changelog::resolve
//!
//! Repository resolution against the paginated project listing.
//!
//! # Algorithm
//!
//! Scan the instance-wide project listing page by page, comparing each
//! entry's path-with-namespace against the target. The first page holding
//! a match ends the scan; within a page the last match in scan order wins
//! (paths are unique on a healthy instance, so duplicates would be an
//! instance anomaly - the behavior is pinned by a test rather than
//! second-guessed). A page shorter than `per_page` is the last page; if it
//! holds no match either, resolution fails.
//!
//! The scan is an explicit loop. Listings are unbounded, so recursing per
//! page would grow the stack with account size.

use crate::api::{Project, ProjectApi};

use super::ChangelogError;

/// Find the project whose `path_with_namespace` equals `target_path`.
///
/// # Errors
///
/// Returns [`ChangelogError::RepositoryNotFound`] when every page has been
/// scanned without a match. API failures propagate untouched.
pub async fn resolve_project(
    api: &dyn ProjectApi,
    target_path: &str,
    per_page: u32,
) -> Result<Project, ChangelogError> {
    let mut page = 1;
    loop {
        let projects = api.list_projects(page, per_page).await?;
        let count = projects.len();

        let found = projects
            .into_iter()
            .filter(|p| p.path_with_namespace == target_path)
            .last();
        if let Some(project) = found {
            return Ok(project);
        }

        // A short page is the last page. The empty-page check also keeps
        // a zero `per_page` (possible for library callers; the CLI rejects
        // it) from looping forever: `count < 0` can never hold.
        if count == 0 || count < per_page as usize {
            return Err(ChangelogError::RepositoryNotFound {
                path: target_path.to_string(),
            });
        }
        page += 1;
    }
}
