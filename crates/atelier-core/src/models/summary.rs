//! Project summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Project, Stage, StepStatus};

/// Summary information about a project with step and commit statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project ID
    pub id: u64,
    /// Learner who owns the project
    pub owner: String,
    /// Title of the project
    pub title: String,
    /// Detailed multi-line description of the project
    pub description: Option<String>,
    /// Current lifecycle stage
    pub stage: Stage,
    /// Bound workflow template, if any
    pub workflow_template_id: Option<u64>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of steps
    pub total_steps: u32,
    /// Number of completed steps
    pub done_steps: u32,
    /// Number of steps being worked on
    pub doing_steps: u32,
    /// Number of commits in the ledger
    pub commit_count: u32,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        let total_steps = project.steps.len() as u32;
        let done_steps = project
            .steps
            .iter()
            .filter(|step| step.status == StepStatus::Done)
            .count() as u32;
        let doing_steps = project
            .steps
            .iter()
            .filter(|step| step.status == StepStatus::Doing)
            .count() as u32;

        Self {
            id: project.id,
            owner: project.owner.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            stage: project.stage,
            workflow_template_id: project.workflow_template_id,
            created_at: project.created_at,
            updated_at: project.updated_at,
            total_steps,
            done_steps,
            doing_steps,
            commit_count: project.commits.len() as u32,
        }
    }
}
