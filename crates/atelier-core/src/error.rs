//! Error types for the workflow engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Stage, StepStatus};

/// Comprehensive error type for all studio operations.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Invalid input validation errors (blank title, blank commit message,
    /// blank rejection feedback). The operation is rejected and no state
    /// mutates.
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Illegal step status change; transitions are all-or-nothing
    #[error("Illegal step transition: {from} -> {to}")]
    InvalidStepTransition { from: StepStatus, to: StepStatus },
    /// Illegal project stage change; transitions are all-or-nothing
    #[error("Illegal stage transition: {from} -> {to}")]
    InvalidStageTransition { from: Stage, to: Stage },
    /// Workflow template binding is frozen once building has started
    #[error("Workflow template is locked while the project is {stage}")]
    WorkflowLocked { stage: Stage },
    /// Submission attempted with unfinished steps; soft, resolved by an
    /// explicit override
    #[error("{remaining} step(s) are not done; submit with an explicit override to proceed anyway")]
    IncompleteWork { remaining: usize },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: u64 },
    /// Step not found within the project
    #[error("Step with ID {id} not found")]
    StepNotFound { id: u64 },
    /// Commit not found in the project's ledger
    #[error("Commit with ID {id} not found")]
    CommitNotFound { id: u64 },
    /// Workflow template not found in the catalog
    #[error("Workflow template with ID {id} not found")]
    TemplateNotFound { id: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StudioError {
    /// Creates a validation error for a field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Whether this error is the soft incomplete-work warning, which the
    /// caller may resolve with an explicit override rather than treat as
    /// fatal.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::IncompleteWork { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StudioError::database(message, e))
    }
}

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, StudioError>;
