//! Review gate: submission, approval, and rejection.

use jiff::Timestamp;

use crate::{
    error::{Result, StudioError},
    models::{Project, ReviewState, Stage, StepStatus},
};

/// Hands the project over from learner work to instructor judgment.
///
/// The project must be Delivered. If any step is not done, the soft
/// [`StudioError::IncompleteWork`] is raised and the caller must resubmit
/// with `acknowledge_incomplete` to proceed anyway. The all-steps-done
/// precondition lives here, never re-implemented by callers.
///
/// On success the stage becomes Submitted, every done step's review tag is
/// set to pending (stale tags and notes from an earlier round are
/// cleared), and unfinished steps lose any stale tag.
pub fn submit_for_review(project: &mut Project, acknowledge_incomplete: bool) -> Result<()> {
    if project.stage != Stage::Delivered {
        return Err(StudioError::InvalidStageTransition {
            from: project.stage,
            to: Stage::Submitted,
        });
    }

    let remaining = project
        .steps
        .iter()
        .filter(|s| s.status != StepStatus::Done)
        .count();
    if remaining > 0 && !acknowledge_incomplete {
        return Err(StudioError::IncompleteWork { remaining });
    }

    let now = Timestamp::now();
    for step in &mut project.steps {
        step.review = if step.status == StepStatus::Done {
            Some(ReviewState::Pending)
        } else {
            None
        };
        step.review_note = None;
        step.updated_at = now;
    }

    project.stage = Stage::Submitted;
    project.touch();
    Ok(())
}

/// Approves the submission and publishes the project.
///
/// The project must be Submitted. Every step is tagged approved, optional
/// feedback is stored, and the stage becomes Published, terminal for this
/// engine.
pub fn approve(project: &mut Project, feedback: Option<String>) -> Result<()> {
    if project.stage != Stage::Submitted {
        return Err(StudioError::InvalidStageTransition {
            from: project.stage,
            to: Stage::Published,
        });
    }

    let now = Timestamp::now();
    for step in &mut project.steps {
        step.review = Some(ReviewState::Approved);
        step.updated_at = now;
    }

    if let Some(note) = feedback {
        let note = note.trim();
        if !note.is_empty() {
            project.feedback = Some(note.to_string());
        }
    }

    project.stage = Stage::Published;
    project.touch();
    Ok(())
}

/// Rejects the submission and requests changes.
///
/// Feedback is mandatory: the instructor must explain what to fix. Every
/// pending step is tagged rejected with the note attached, and the stage
/// becomes ChangesRequested, whose only exit is back to Building.
pub fn reject(project: &mut Project, feedback: &str) -> Result<()> {
    let feedback = feedback.trim();
    if feedback.is_empty() {
        return Err(StudioError::validation(
            "feedback",
            "Rejection feedback must not be empty",
        ));
    }

    if project.stage != Stage::Submitted {
        return Err(StudioError::InvalidStageTransition {
            from: project.stage,
            to: Stage::ChangesRequested,
        });
    }

    let now = Timestamp::now();
    for step in &mut project.steps {
        if step.review == Some(ReviewState::Pending) {
            step.review = Some(ReviewState::Rejected);
            step.review_note = Some(feedback.to_string());
            step.updated_at = now;
        }
    }

    project.feedback = Some(feedback.to_string());
    project.stage = Stage::ChangesRequested;
    project.touch();
    Ok(())
}
