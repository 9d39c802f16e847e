//! High-level studio API for driving projects through the workflow.
//!
//! This module provides the main [`Studio`] interface for interacting with
//! the Atelier workflow engine. The studio acts as the coordinator between
//! the delivery surfaces and the persistence collaborator, implementing
//! read-modify-write over whole project documents.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Studio      │    │     Engine      │    │    Database     │
//! │ (project_ops,   │───▶│ (board, ledger, │    │   (via db/)     │
//! │  board_ops,     │    │  lifecycle,     │───▶│  whole-document │
//! │  review_ops)    │    │  review)        │    │     writes      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Coordination          Pure transforms       Data persistence
//! ```
//!
//! Every mutating operation follows the same shape: load the project
//! document, apply a pure engine transformation, store the document whole.
//! The load-transform-store sequence runs inside one blocking call, so a
//! commit's snapshot always reflects the step mutation that logically
//! precedes it in the same user action.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Studio`] instances with configuration
//! - [`project_ops`]: Project lifecycle (create, list, show, bind, advance, cover)
//! - [`board_ops`]: Step board and commit ledger operations
//! - [`review_ops`]: The review gate (submit, approve, reject)
//!
//! # Usage
//!
//! ```rust
//! use atelier_core::{params::CreateProject, StudioBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let studio = StudioBuilder::new()
//!     .with_database_path(Some("atelier.db"))
//!     .build()
//!     .await?;
//!
//! let project = studio
//!     .create_project(&CreateProject {
//!         owner: "ada".to_string(),
//!         title: "Kinetic sculpture".to_string(),
//!         description: None,
//!     })
//!     .await?;
//! println!("Created project {}", project.id);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod board_ops;
pub mod builder;
pub mod project_ops;
pub mod review_ops;


// Re-export the main types
pub use builder::StudioBuilder;

/// Main studio interface for managing projects through the workflow.
pub struct Studio {
    pub(crate) db_path: PathBuf,
}

impl Studio {
    /// Creates a new studio with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
