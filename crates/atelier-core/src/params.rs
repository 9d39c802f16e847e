//! Parameter structures for studio operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! or dependencies.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Core parameter structures stay free of UI framework dependencies; each
//! interface wraps them with its own derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers create wrapper structs that add framework-specific
//! derives (clap::Args, schemars::JsonSchema), use transparent
//! serialization where applicable, and convert to core parameters via
//! `From`/`Into`. JSON schema generation is behind the `schema` feature so
//! the core stays lightweight for callers that don't need it.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::StepStatus;

/// Generic parameters for operations requiring just a project ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateProject {
    /// Learner who owns the project (required)
    pub owner: String,
    /// Title of the project (required)
    pub title: String,
    /// Optional detailed description of the project
    pub description: Option<String>,
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListProjects {
    /// Only show projects in this lifecycle stage
    #[serde(default)]
    pub stage: Option<String>,
    /// Only show projects owned by this learner
    #[serde(default)]
    pub owner: Option<String>,
}

/// Parameters for binding a project to a workflow template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BindTemplate {
    /// ID of the project to bind
    pub project_id: u64,
    /// ID of the workflow template from the catalog
    pub template_id: u64,
}

/// Parameters for advancing a project's lifecycle stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AdvanceStage {
    /// ID of the project to advance
    pub project_id: u64,
    /// Target stage ('building', 'testing', 'delivered')
    pub stage: String,
}

/// Parameters for adding a step to a project's board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddStep {
    /// ID of the project to add the step to
    pub project_id: u64,
    /// Title of the step (required)
    pub title: String,
}

/// Parameters addressing one step within a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepRef {
    /// ID of the owning project
    pub project_id: u64,
    /// Project-local ID of the step
    pub step_id: u64,
}

/// Parameters for moving a step to a new board position.
///
/// When moving to 'done', `evidence` is required: completion and evidence
/// capture are one atomic submission, not a free checkbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveStep {
    /// ID of the owning project
    pub project_id: u64,
    /// Project-local ID of the step to move
    pub step_id: u64,
    /// Target status ('todo', 'doing', or 'done')
    pub status: String,
    /// Proof artifact (image or link) - required when moving to 'done'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl MoveStep {
    /// Validate move parameters and return the parsed target status.
    ///
    /// # Errors
    ///
    /// * `StudioError::Validation` - When the status string is invalid
    /// * `StudioError::Validation` - When evidence is missing for 'done'
    pub fn validate(&self) -> crate::Result<StepStatus> {
        let status: StepStatus =
            self.status
                .parse()
                .map_err(|_| crate::StudioError::Validation {
                    field: "status".to_string(),
                    reason: format!(
                        "Invalid status: {}. Must be 'todo', 'doing', or 'done'",
                        self.status
                    ),
                })?;

        if status == StepStatus::Done
            && self
                .evidence
                .as_deref()
                .map_or(true, |e| e.trim().is_empty())
        {
            return Err(crate::StudioError::Validation {
                field: "evidence".to_string(),
                reason: "A proof artifact is required when marking a step as done. \
                         Provide an 'evidence' field with an image or link."
                    .to_string(),
            });
        }

        Ok(status)
    }
}

/// Parameters for recording a commit of the current step board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PushCommit {
    /// ID of the project to commit
    pub project_id: u64,
    /// Human-readable commit message (required)
    pub message: String,
    /// Step this commit documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_step_id: Option<u64>,
    /// External proof URL; with `related_step_id`, also attached to the
    /// live step before the snapshot is taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_link: Option<String>,
}

/// Parameters for restoring the board from a historical commit.
///
/// Restoring overwrites the live step board irreversibly, so the explicit
/// confirmation flag is part of the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RestoreCommit {
    /// ID of the owning project
    pub project_id: u64,
    /// ID of the commit to restore from
    pub commit_id: u64,
    /// Confirm the overwrite (required to prevent accidental data loss)
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for submitting a project for instructor review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubmitForReview {
    /// ID of the project to submit
    pub project_id: u64,
    /// Proceed even though some steps are not done
    #[serde(default)]
    pub acknowledge_incomplete: bool,
}

/// Parameters for approving a submitted project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Approve {
    /// ID of the project to approve
    pub project_id: u64,
    /// Optional feedback note for the learner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Parameters for rejecting a submitted project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Reject {
    /// ID of the project to reject
    pub project_id: u64,
    /// What the learner must fix (required)
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::StepStatus, StudioError};

    #[test]
    fn test_move_step_validate_valid_doing() {
        let params = MoveStep {
            project_id: 1,
            step_id: 1,
            status: "doing".to_string(),
            evidence: None,
        };

        assert_eq!(params.validate().unwrap(), StepStatus::Doing);
    }

    #[test]
    fn test_move_step_validate_done_with_evidence() {
        let params = MoveStep {
            project_id: 1,
            step_id: 1,
            status: "done".to_string(),
            evidence: Some("img.png".to_string()),
        };

        assert_eq!(params.validate().unwrap(), StepStatus::Done);
    }

    #[test]
    fn test_move_step_validate_done_missing_evidence() {
        let params = MoveStep {
            project_id: 1,
            step_id: 1,
            status: "done".to_string(),
            evidence: None,
        };

        match params.validate().unwrap_err() {
            StudioError::Validation { field, reason } => {
                assert_eq!(field, "evidence");
                assert!(reason.contains("proof artifact"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_move_step_validate_done_blank_evidence() {
        let params = MoveStep {
            project_id: 1,
            step_id: 1,
            status: "done".to_string(),
            evidence: Some("   ".to_string()),
        };

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_move_step_validate_invalid_status() {
        let params = MoveStep {
            project_id: 1,
            step_id: 1,
            status: "finished".to_string(),
            evidence: None,
        };

        match params.validate().unwrap_err() {
            StudioError::Validation { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("Invalid status: finished"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_move_step_validate_alternative_doing_spelling() {
        let params = MoveStep {
            project_id: 1,
            step_id: 1,
            status: "in_progress".to_string(),
            evidence: None,
        };

        assert_eq!(params.validate().unwrap(), StepStatus::Doing);
    }
}
