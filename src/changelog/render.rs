//! changelog::render
//!
//! Markdown assembly.
//!
//! # Document Shape
//!
//! ```markdown
//! # Changelog
//!
//! ## v1.1 (Unreleased) - _2023-3-1_
//! - `feature` [#3] (https://gitlab.example.com/group/project/issues/3) WIP
//!
//! ## v1.0 - _2023-1-15_
//! - `bug` [#1] (https://gitlab.example.com/group/project/issues/1) Fix bug
//! - `feature` [#2] (https://gitlab.example.com/group/project/issues/2) Add feature
//! ```
//!
//! Sections follow the sorter's milestone order. A milestone with no
//! qualifying issues, or rejected by the milestone filter, contributes an
//! empty string; the empty strings are kept until the final concatenation
//! so section index always maps to milestone index, then vanish from the
//! joined text. Date components render unpadded (`2023-1-15`, not
//! `2023-01-15`); issue lines keep the aggregator's oldest-first order.

use chrono::{Datelike, NaiveDate};

use crate::api::{Issue, Milestone, MilestoneState, Project};

use super::hooks::ChangelogOptions;

/// Render the changelog document.
///
/// Returns `None` when `issues` is empty, regardless of the milestone set:
/// nothing to report. `base_url` is the instance web URL with a trailing
/// slash; issue links are `{base_url}{path_with_namespace}/issues/{iid}`.
pub fn render_markdown(
    base_url: &str,
    project: &Project,
    issues: &[Issue],
    milestones: &[Milestone],
    opts: &ChangelogOptions,
) -> Option<String> {
    if issues.is_empty() {
        return None;
    }

    let sections: Vec<String> = milestones
        .iter()
        .map(|milestone| render_section(base_url, project, issues, milestone, opts))
        .collect();

    Some(format!("# Changelog\n\n{}", sections.concat()))
}

/// Render one milestone's section, or an empty string when it contributes
/// nothing.
fn render_section(
    base_url: &str,
    project: &Project,
    issues: &[Issue],
    milestone: &Milestone,
    opts: &ChangelogOptions,
) -> String {
    let subset: Vec<&Issue> = issues
        .iter()
        .filter(|issue| {
            issue
                .milestone
                .as_ref()
                .is_some_and(|m| m.id == milestone.id)
        })
        .collect();

    if subset.is_empty() {
        return String::new();
    }
    if !(opts.milestone_filter)(milestone) {
        return String::new();
    }

    let lines: Vec<String> = subset
        .iter()
        .map(|issue| render_issue_line(base_url, project, issue, opts))
        .collect();

    format!("{}\n{}\n\n", heading(milestone), lines.join("\n"))
}

/// Build the `## ...` heading for a milestone.
fn heading(milestone: &Milestone) -> String {
    let mut text = format!("## {}", milestone.title);
    if milestone.state == MilestoneState::Active {
        text.push_str(" (Unreleased)");
    }
    if let Some(date) = milestone
        .due_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        text.push_str(&format!(
            " - _{}-{}-{}_",
            date.year(),
            date.month(),
            date.day()
        ));
    }
    text
}

/// Render one issue line.
fn render_issue_line(
    base_url: &str,
    project: &Project,
    issue: &Issue,
    opts: &ChangelogOptions,
) -> String {
    let labels = (opts.label_extractor)(issue).join(", ");
    let tag = (opts.tag_extractor)(issue);
    format!(
        "- `{}` [#{}] ({}{}/issues/{}) {}{}",
        labels, issue.iid, base_url, project.path_with_namespace, issue.iid, tag, issue.title
    )
}
