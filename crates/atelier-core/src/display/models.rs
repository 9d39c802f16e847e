//! Display implementations for domain models.
//!
//! All implementations produce markdown for rich terminal display:
//! projects as a header plus metadata and nested steps, steps as compact
//! sections with status and review icons, commits as ledger entries.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Commit, Project, ProjectSummary, ReviewState, Stage, Step, StepStatus, WorkflowTemplate,
};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Owner: {}", self.owner)?;
        writeln!(f, "- Stage: {}", self.stage)?;
        if let Some(template_id) = self.workflow_template_id {
            writeln!(f, "- Workflow template: {template_id}")?;
        }
        if let Some(cover) = &self.cover {
            writeln!(f, "- Cover: {cover}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if let Some(feedback) = &self.feedback {
            writeln!(f, "\n## Review feedback")?;
            writeln!(f)?;
            writeln!(f, "{feedback}")?;
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps on this board.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        if !self.commits.is_empty() {
            writeln!(f, "## History")?;
            writeln!(f)?;
            writeln!(f, "{} commit(s) in the ledger.", self.commits.len())?;
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(review) = &self.review {
            writeln!(f, "- Review: {}", review.with_icon())?;
            if let Some(note) = &self.review_note {
                writeln!(f, "- Note: {note}")?;
            }
            writeln!(f)?;
        }

        if let Some(proof) = &self.proof {
            writeln!(f, "#### Proof")?;
            writeln!(f)?;
            writeln!(f, "- {proof}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.message)?;
        writeln!(f)?;
        writeln!(f, "- Recorded: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Snapshot: {} step(s)", self.snapshot.len())?;
        if let Some(step_id) = self.related_step_id {
            writeln!(f, "- Documents step: {step_id}")?;
        }
        if let Some(link) = &self.evidence_link {
            writeln!(f, "- Evidence: {link}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_steps > 0 {
            format!(" ({}/{})", self.done_steps, self.total_steps)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Owner**: {}", self.owner)?;
        writeln!(f, "- **Stage**: {}", self.stage)?;
        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        if self.commit_count > 0 {
            writeln!(f, "- **Commits**: {}", self.commit_count)?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for WorkflowTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "Phases: {}", self.phases.join(" → "))?;
        writeln!(f)?;

        Ok(())
    }
}
