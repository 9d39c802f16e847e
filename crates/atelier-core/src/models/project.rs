//! Project model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Commit, Stage, Step};

/// Represents a learner-authored project tracked through the workflow
/// engine.
///
/// The project exclusively owns its steps and commits; a commit's snapshot
/// is an independently owned copy, never a reference back into the live
/// step board. The whole struct serializes as one JSON document, which is
/// also the unit of write at the persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Learner who owns the project
    pub owner: String,

    /// Title of the project
    pub title: String,

    /// Detailed multi-line description of the project
    pub description: Option<String>,

    /// Current lifecycle stage
    #[serde(default)]
    pub stage: Stage,

    /// Bound workflow template; immutable once the stage leaves Planning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_template_id: Option<u64>,

    /// Advisory cover illustration reference; never required for any
    /// transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Free-text note from the most recent review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    /// Ordered step board (order is meaningful for display only)
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Append-only commit ledger, chronological
    #[serde(default)]
    pub commits: Vec<Commit>,

    /// Next step id to hand out; step ids are unique within the project
    pub next_step_id: u64,

    /// Next commit id to hand out; commit ids are monotonic
    pub next_commit_id: u64,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Project {
    /// Creates a new project in Planning with an empty step board.
    pub fn new(id: u64, owner: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            owner: owner.into(),
            title: title.into(),
            description: None,
            stage: Stage::Planning,
            workflow_template_id: None,
            cover: None,
            feedback: None,
            steps: Vec::new(),
            commits: Vec::new(),
            next_step_id: 1,
            next_commit_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Looks up a live step by its project-local id.
    pub fn step(&self, step_id: u64) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// Looks up a live step mutably by its project-local id.
    pub fn step_mut(&mut self, step_id: u64) -> Option<&mut Step> {
        self.steps.iter_mut().find(|s| s.id == step_id)
    }

    /// Looks up a commit by id.
    pub fn commit(&self, commit_id: u64) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id == commit_id)
    }

    /// Marks the project as touched now.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
