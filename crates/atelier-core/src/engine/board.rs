//! Step board operations.

use jiff::Timestamp;

use crate::{
    error::{Result, StudioError},
    models::{Project, Step, StepStatus},
};

/// Appends a new Todo step to the project's board.
///
/// The title must be non-empty after trimming. There is no upper bound on
/// step count. Returns the id of the new step.
pub fn add_step(project: &mut Project, title: &str) -> Result<u64> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StudioError::validation(
            "title",
            "Step title must not be empty",
        ));
    }

    let id = project.next_step_id;
    project.next_step_id += 1;
    project.steps.push(Step::new(id, title, Timestamp::now()));
    project.touch();
    Ok(id)
}

/// Removes a step from the board unconditionally.
///
/// Existing commit snapshots are left untouched: they keep the deleted
/// step, since the ledger records history, not the present.
pub fn remove_step(project: &mut Project, step_id: u64) -> Result<Step> {
    let position = project
        .steps
        .iter()
        .position(|s| s.id == step_id)
        .ok_or(StudioError::StepNotFound { id: step_id })?;

    let removed = project.steps.remove(position);
    project.touch();
    Ok(removed)
}

/// Moves a step to a new status along the legal adjacency edges.
///
/// Legal edges are `Todo→Doing`, `Doing→Todo`, `Doing→Done`, and
/// `Done→Doing` (undo). `Todo→Done` is illegal: completion always passes
/// through active work.
///
/// Completion and evidence capture are one atomic operation: moving to
/// `Done` requires `evidence`, which becomes the step's proof artifact in
/// the same call. Leaving `Done` clears the proof, so re-completion always
/// captures fresh evidence. Review tags are never touched by moves; they
/// belong to the review gate.
pub fn move_step(
    project: &mut Project,
    step_id: u64,
    target: StepStatus,
    evidence: Option<String>,
) -> Result<()> {
    // Validate before borrowing the step mutably so a rejected move leaves
    // the project untouched.
    let current = project
        .step(step_id)
        .ok_or(StudioError::StepNotFound { id: step_id })?
        .status;

    if !is_legal_move(current, target) {
        return Err(StudioError::InvalidStepTransition {
            from: current,
            to: target,
        });
    }

    if target == StepStatus::Done && evidence.as_deref().map_or(true, |e| e.trim().is_empty()) {
        return Err(StudioError::validation(
            "evidence",
            "A proof artifact is required when marking a step as done",
        ));
    }

    let step = project
        .step_mut(step_id)
        .ok_or(StudioError::StepNotFound { id: step_id })?;

    step.status = target;
    step.proof = match target {
        StepStatus::Done => evidence.map(|e| e.trim().to_string()),
        StepStatus::Todo | StepStatus::Doing => None,
    };
    step.updated_at = Timestamp::now();
    project.touch();
    Ok(())
}

/// The step status adjacency table.
fn is_legal_move(from: StepStatus, to: StepStatus) -> bool {
    matches!(
        (from, to),
        (StepStatus::Todo, StepStatus::Doing)
            | (StepStatus::Doing, StepStatus::Todo)
            | (StepStatus::Doing, StepStatus::Done)
            | (StepStatus::Done, StepStatus::Doing)
    )
}
