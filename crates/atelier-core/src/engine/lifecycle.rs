//! Project stage machine and workflow template lock.

use crate::{
    error::{Result, StudioError},
    models::{Project, Stage},
};

/// Binds the project to a workflow template from the catalog.
///
/// The binding is open only while the project is in Planning; once
/// building has started the binding is frozen for the remaining lifetime
/// of the project.
pub fn bind_template(project: &mut Project, template_id: u64) -> Result<()> {
    if project.stage.locks_template() {
        return Err(StudioError::WorkflowLocked {
            stage: project.stage,
        });
    }

    project.workflow_template_id = Some(template_id);
    project.touch();
    Ok(())
}

/// Advances the project stage along the declared adjacency edges.
///
/// Legal unilateral edges:
///
/// - `Planning→Building` ("start building"): requires at least one step
///   and a bound workflow template; engages the workflow lock
/// - `Building→Testing`, `Testing→Delivered`: forward progression
/// - `ChangesRequested→Building`: the sole backward edge (rework loop)
///
/// `Delivered→Submitted` and the edges out of `Submitted` belong to the
/// review gate and are rejected here. `Published` is terminal.
pub fn advance_stage(project: &mut Project, target: Stage) -> Result<()> {
    let from = project.stage;

    let legal = matches!(
        (from, target),
        (Stage::Planning, Stage::Building)
            | (Stage::Building, Stage::Testing)
            | (Stage::Testing, Stage::Delivered)
            | (Stage::ChangesRequested, Stage::Building)
    );

    if !legal {
        return Err(StudioError::InvalidStageTransition { from, to: target });
    }

    if from == Stage::Planning && target == Stage::Building {
        if project.steps.is_empty() {
            return Err(StudioError::InvalidStageTransition { from, to: target });
        }
        if project.workflow_template_id.is_none() {
            return Err(StudioError::InvalidStageTransition { from, to: target });
        }
    }

    project.stage = target;
    project.touch();
    Ok(())
}
