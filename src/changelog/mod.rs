//! changelog
//!
//! The report pipeline: Resolve → Aggregate → Sort → Render.
//!
//! # Architecture
//!
//! [`generate`] is the single entry point. It runs the four stages in
//! order against a [`ProjectApi`] implementation and returns the finished
//! markdown, or `None` when the project has nothing to report. Each stage
//! lives in its own module:
//!
//! - [`resolve`]: find the project by its path-with-namespace
//! - [`issues`]: aggregate and filter the project's closed issues
//! - [`milestones`]: fetch and deterministically order the milestones
//! - [`render`]: group issues under milestones and assemble the document
//!
//! Behavior hooks (milestone filter, label extractor, tag extractor) are
//! explicit fields on [`ChangelogOptions`] with working defaults, so a
//! plain `ChangelogOptions::default()` reproduces the stock report.
//!
//! # Failure Model
//!
//! The pipeline is fail-fast end to end. The only non-exceptional empty
//! path is `Ok(None)`: the project exists but has no closed issues with a
//! milestone. Everything else - an unresolvable path, a transport error, an
//! undecodable body - aborts the run with an error.

pub mod hooks;
pub mod issues;
pub mod milestones;
pub mod render;
pub mod resolve;

pub use hooks::{ChangelogOptions, LabelExtractor, MilestoneFilter, TagExtractor};

use thiserror::Error;

use crate::api::{ApiError, ProjectApi};

/// Errors from the changelog pipeline.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// No project in any page of the listing matches the target path.
    #[error("repo not found: no project matches '{path}'")]
    RepositoryNotFound {
        /// The path-with-namespace that was searched for
        path: String,
    },

    /// An API call failed; propagated untouched, never retried.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Generate the changelog for `target_path`.
///
/// Resolves the project, aggregates its closed milestoned issues, orders
/// the milestones, and renders markdown. `base_url` is the instance web
/// URL (trailing slash included) used for issue links.
///
/// Returns `Ok(None)` when no closed issue carries a milestone - the
/// normal "nothing to report" outcome, not an error. The milestone fetch
/// is skipped entirely in that case.
pub async fn generate(
    api: &dyn ProjectApi,
    base_url: &str,
    target_path: &str,
    opts: &ChangelogOptions,
) -> Result<Option<String>, ChangelogError> {
    let project = resolve::resolve_project(api, target_path, opts.per_page).await?;
    let issues = issues::collect_closed_issues(api, &project, opts.per_page).await?;

    if issues.is_empty() {
        return Ok(None);
    }

    let milestones = milestones::sorted_milestones(api, &project).await?;
    Ok(render::render_markdown(
        base_url,
        &project,
        &issues,
        &milestones,
        opts,
    ))
}
