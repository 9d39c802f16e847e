//! Step model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ReviewState, StepStatus};

/// Represents an individual work item on a project's step board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Identifier unique within the owning project (not globally)
    pub id: u64,

    /// Brief title of the step; immutable after creation
    pub title: String,

    /// Current position on the board
    pub status: StepStatus,

    /// Proof-of-work artifact (image or link), attached when the step is
    /// moved to Done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,

    /// Review tag set by the review gate; only meaningful while the owning
    /// project is submitted or has changes requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewState>,

    /// Reviewer note accompanying a rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,

    /// Timestamp when the step was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the step was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Step {
    /// Creates a fresh Todo step with the given id and title.
    pub fn new(id: u64, title: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id,
            title: title.into(),
            status: StepStatus::Todo,
            proof: None,
            review: None,
            review_note: None,
            created_at: now,
            updated_at: now,
        }
    }
}
