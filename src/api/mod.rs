//! api
//!
//! GitLab API access.
//!
//! # Architecture
//!
//! The [`ProjectApi`] trait defines the three read operations the changelog
//! pipeline needs. The pipeline only ever sees `&dyn ProjectApi`, so tests
//! run against [`mock::MockApi`] while the binary uses [`rest::RestClient`].
//!
//! # Modules
//!
//! - `traits`: Core `ProjectApi` trait and the `ApiError` type
//! - `types`: Serde types for projects, issues, and milestones
//! - [`rest`]: reqwest-based implementation against a live GitLab instance
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod mock;
pub mod rest;
mod traits;
mod types;

pub use traits::{ApiError, ProjectApi};
pub use types::{Issue, IssueState, Milestone, MilestoneRef, MilestoneState, Project};
