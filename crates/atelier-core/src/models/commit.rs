//! Commit model for the append-only board history.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Step;

/// A named, immutable snapshot of a project's step board.
///
/// The snapshot is a full deep copy of the steps at commit time, never a
/// diff and never a reference into the live board: mutating the board after
/// a commit leaves recorded snapshots untouched. Commits are appended in
/// creation order and are never mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Commit {
    /// Per-project monotonic identifier; append order is time order
    pub id: u64,

    /// Human-supplied message (non-empty)
    pub message: String,

    /// Timestamp when the commit was recorded (UTC)
    pub created_at: Timestamp,

    /// Independently owned copy of the step board at commit time
    pub snapshot: Vec<Step>,

    /// Step this commit documents, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_step_id: Option<u64>,

    /// External proof URL attached alongside the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_link: Option<String>,
}
