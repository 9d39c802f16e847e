//! Core library for the Atelier project workflow engine.
//!
//! This crate provides the business logic for tracking learner-authored
//! projects through a multi-phase lifecycle: the step board, the
//! append-only commit ledger with point-in-time restore, the project
//! stage machine with its workflow-template lock, and the instructor
//! review gate.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): projects, steps, commits, templates
//! - **Engine** ([`engine`]): pure, synchronous transformations of
//!   in-memory project state; no I/O, no partial mutation on error
//! - **Persistence** ([`db`]): SQLite-backed document store; the whole
//!   project document is the unit of write
//! - **Studio** ([`studio`]): async coordinator implementing
//!   read-modify-write over the document store
//! - **Display** ([`display`]): markdown formatting for terminals and MCP
//!
//! # Quick Start
//!
//! ```rust
//! use atelier_core::{params::CreateProject, StudioBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let studio = StudioBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let project = studio
//!     .create_project(&CreateProject {
//!         owner: "ada".to_string(),
//!         title: "Kinetic sculpture".to_string(),
//!         description: Some("A wind-driven mobile".to_string()),
//!     })
//!     .await?;
//! println!("Created project: {}", project);
//! # Ok(())
//! # }
//! ```

pub mod cover;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod notices;
pub mod params;
pub mod studio;

// Re-export commonly used types
pub use cover::{CoverArt, CoverArtist, CoverAttempt, CoverBrief, CoverFailure};
pub use db::Database;
pub use display::{Commits, CreateResult, OperationStatus, ProjectSummaries, Steps, UpdateResult};
pub use error::{Result, StudioError};
pub use models::{
    Commit, Project, ProjectFilter, ProjectSummary, ReviewState, Stage, Step, StepStatus,
    WorkflowTemplate,
};
pub use notices::{Notice, NoticeQueue, Severity};
pub use params::{
    AddStep, AdvanceStage, Approve, BindTemplate, CreateProject, Id, ListProjects, MoveStep,
    PushCommit, Reject, RestoreCommit, StepRef, SubmitForReview,
};
pub use studio::{Studio, StudioBuilder};
