//! changelog::hooks
//!
//! Caller-customizable rendering behavior.
//!
//! # Design
//!
//! The three hooks are plain boxed closures carried as explicit fields on
//! [`ChangelogOptions`] - no hidden shared state, no registration step.
//! The defaults reproduce the stock report:
//!
//! - milestone filter: include every milestone
//! - label extractor: the issue's own labels
//! - tag extractor: empty string (nothing prepended to the title)
//!
//! # Example
//!
//! ```
//! use milemark::api::MilestoneState;
//! use milemark::changelog::ChangelogOptions;
//!
//! // Only released (closed) milestones make it into the document.
//! let opts = ChangelogOptions::default()
//!     .with_milestone_filter(|m| m.state == MilestoneState::Closed);
//! assert_eq!(opts.per_page, 100);
//! ```

use crate::api::{Issue, Milestone};

/// Decides whether a milestone's section appears in the document.
pub type MilestoneFilter = Box<dyn Fn(&Milestone) -> bool + Send + Sync>;

/// Produces the label strings rendered in an issue's line.
pub type LabelExtractor = Box<dyn Fn(&Issue) -> Vec<String> + Send + Sync>;

/// Produces the tag string prepended to an issue's title.
pub type TagExtractor = Box<dyn Fn(&Issue) -> String + Send + Sync>;

/// Page size used for every paginated listing.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Pipeline configuration: behavior hooks plus the page size.
pub struct ChangelogOptions {
    /// Milestone inclusion predicate.
    pub milestone_filter: MilestoneFilter,
    /// Label extraction hook.
    pub label_extractor: LabelExtractor,
    /// Tag extraction hook.
    pub tag_extractor: TagExtractor,
    /// Entries requested per paginated API call.
    pub per_page: u32,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            milestone_filter: Box::new(|_| true),
            label_extractor: Box::new(|issue| issue.labels.clone()),
            tag_extractor: Box::new(|_| String::new()),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ChangelogOptions {
    /// Replace the milestone inclusion predicate.
    pub fn with_milestone_filter(
        mut self,
        filter: impl Fn(&Milestone) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.milestone_filter = Box::new(filter);
        self
    }

    /// Replace the label extraction hook.
    pub fn with_label_extractor(
        mut self,
        extractor: impl Fn(&Issue) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.label_extractor = Box::new(extractor);
        self
    }

    /// Replace the tag extraction hook.
    pub fn with_tag_extractor(
        mut self,
        extractor: impl Fn(&Issue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.tag_extractor = Box::new(extractor);
        self
    }
}

// Closures have no useful Debug; show the one inspectable field.
impl std::fmt::Debug for ChangelogOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangelogOptions")
            .field("per_page", &self.per_page)
            .finish()
    }
}
