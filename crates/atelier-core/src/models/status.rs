//! Status enumerations for projects, steps, and reviews.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of project lifecycle stages.
///
/// Stages progress `Planning → Building → Testing → Delivered → Submitted`,
/// after which the review gate routes to either `Published` (terminal) or
/// `ChangesRequested`, whose only exit is back to `Building`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Project is being scoped; steps and template binding are still open
    #[default]
    Planning,

    /// Learner is actively working through the step board
    Building,

    /// Work is being verified against the plan
    Testing,

    /// Work is finished and ready to submit for review
    Delivered,

    /// Awaiting instructor judgment
    Submitted,

    /// Instructor requested rework; re-enters Building
    ChangesRequested,

    /// Approved and visible; terminal stage
    Published,
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(Stage::Planning),
            "building" => Ok(Stage::Building),
            "testing" => Ok(Stage::Testing),
            "delivered" => Ok(Stage::Delivered),
            "submitted" => Ok(Stage::Submitted),
            "changes_requested" | "changesrequested" => Ok(Stage::ChangesRequested),
            "published" => Ok(Stage::Published),
            _ => Err(format!("Invalid stage: {s}")),
        }
    }
}

impl Stage {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Planning => "planning",
            Stage::Building => "building",
            Stage::Testing => "testing",
            Stage::Delivered => "delivered",
            Stage::Submitted => "submitted",
            Stage::ChangesRequested => "changes_requested",
            Stage::Published => "published",
        }
    }

    /// Whether the workflow template binding is frozen at this stage.
    ///
    /// The binding is open only during planning; every later stage carries
    /// the workflow lock.
    pub fn locks_template(&self) -> bool {
        !matches!(self, Stage::Planning)
    }

    /// Whether any further stage transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Published)
    }
}

/// Type-safe enumeration of step statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step has not been started
    Todo,

    /// Step is being worked on
    Doing,

    /// Step has been completed with evidence attached
    Done,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(StepStatus::Todo),
            "doing" | "in_progress" => Ok(StepStatus::Doing),
            "done" => Ok(StepStatus::Done),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Todo => "todo",
            StepStatus::Doing => "doing",
            StepStatus::Done => "done",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Done` - Checkmark for completed steps
    /// - `➤ Doing` - Arrow for active steps
    /// - `○ Todo` - Circle for pending steps
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atelier_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(StepStatus::Doing.with_icon(), "➤ Doing");
    /// assert_eq!(StepStatus::Todo.with_icon(), "○ Todo");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Done => "✓ Done",
            StepStatus::Doing => "➤ Doing",
            StepStatus::Todo => "○ Todo",
        }
    }
}

/// Review sub-state attached to a step while its project sits in front of
/// the review gate.
///
/// Orthogonal to [`StepStatus`]: a step can be `Done` and simultaneously
/// `Pending` review. The tag is only meaningful while the owning project is
/// `Submitted` or `ChangesRequested`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    /// Submitted and awaiting instructor judgment
    Pending,

    /// Accepted by the instructor
    Approved,

    /// Sent back for rework
    Rejected,
}

impl FromStr for ReviewState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ReviewState::Pending),
            "approved" => Ok(ReviewState::Approved),
            "rejected" => Ok(ReviewState::Rejected),
            _ => Err(format!("Invalid review state: {s}")),
        }
    }
}

impl ReviewState {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewState::Pending => "pending",
            ReviewState::Approved => "approved",
            ReviewState::Rejected => "rejected",
        }
    }

    /// Get review state with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            ReviewState::Pending => "⏳ Pending review",
            ReviewState::Approved => "✓ Approved",
            ReviewState::Rejected => "✗ Rejected",
        }
    }
}
