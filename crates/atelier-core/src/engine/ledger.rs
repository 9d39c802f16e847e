//! Commit ledger operations.

use jiff::Timestamp;

use crate::{
    error::{Result, StudioError},
    models::{Commit, Project},
};

/// Records a named snapshot of the current step board.
///
/// The snapshot is a structural deep copy of the live steps. When both
/// `related_step_id` and `evidence_link` are given, the live step's proof
/// is updated to the evidence link first, so the snapshot reflects the
/// just-attached evidence; the two sub-steps are sequenced, never
/// reordered. Returns the id of the new commit.
pub fn push_commit(
    project: &mut Project,
    message: &str,
    related_step_id: Option<u64>,
    evidence_link: Option<String>,
) -> Result<u64> {
    let message = message.trim();
    if message.is_empty() {
        return Err(StudioError::validation(
            "message",
            "Commit message must not be empty",
        ));
    }

    if let Some(step_id) = related_step_id {
        if project.step(step_id).is_none() {
            return Err(StudioError::StepNotFound { id: step_id });
        }
        // Attach the evidence to the live step before the snapshot is taken.
        if let Some(link) = evidence_link.as_deref() {
            if !link.trim().is_empty() {
                if let Some(step) = project.step_mut(step_id) {
                    step.proof = Some(link.trim().to_string());
                    step.updated_at = Timestamp::now();
                }
            }
        }
    }

    // Snapshot after the evidence side effect, never before.
    let snapshot = project.steps.clone();
    let id = project.next_commit_id;
    project.next_commit_id += 1;
    project.commits.push(Commit {
        id,
        message: message.to_string(),
        created_at: Timestamp::now(),
        snapshot,
        related_step_id,
        evidence_link,
    });
    project.touch();
    Ok(id)
}

/// Restores the live step board from a historical snapshot.
///
/// This is an irreversible overwrite of the live board, so the explicit
/// `confirmed` flag is part of the contract, not optional UX. The ledger
/// itself is untouched: no commit is removed or reordered, including
/// commits created after the restored one. The ledger is a timeline, not
/// a branch-pruning structure.
pub fn restore_commit(project: &mut Project, commit_id: u64, confirmed: bool) -> Result<()> {
    if !confirmed {
        return Err(StudioError::validation(
            "confirmed",
            "Restoring a commit overwrites the live step board and cannot be undone. \
             Set 'confirmed' to true to proceed.",
        ));
    }

    let snapshot = project
        .commit(commit_id)
        .ok_or(StudioError::CommitNotFound { id: commit_id })?
        .snapshot
        .clone();

    project.steps = snapshot;
    project.touch();
    Ok(())
}
