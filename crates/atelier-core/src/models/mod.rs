//! Data models for projects, steps, commits, and workflow templates.
//!
//! This module contains the core domain models tracked by the workflow
//! engine. Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! # Model overview
//!
//! - [`Project`] owns the step board and the commit ledger and carries the
//!   lifecycle [`Stage`].
//! - [`Step`] is an individually movable work item with an optional proof
//!   artifact and an orthogonal [`ReviewState`] tag.
//! - [`Commit`] is an immutable, timestamped deep copy of the step board
//!   plus a human message.
//! - [`WorkflowTemplate`] is a read-only catalog entry a project binds to
//!   at planning time.
//!
//! # Examples
//!
//! ```rust
//! use atelier_core::models::{Project, StepStatus};
//!
//! let project = Project::new(1, "ada", "Kinetic sculpture");
//! assert!(project.steps.is_empty());
//! assert_eq!(project.stage.as_str(), "planning");
//! ```

pub mod commit;
pub mod filters;
pub mod project;
pub mod status;
pub mod step;
pub mod summary;
pub mod template;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use commit::Commit;
pub use filters::ProjectFilter;
pub use project::Project;
pub use status::{ReviewState, Stage, StepStatus};
pub use step::Step;
pub use summary::ProjectSummary;
pub use template::WorkflowTemplate;
