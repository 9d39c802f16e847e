use super::{board, ledger, lifecycle, review};
use crate::{
    error::StudioError,
    models::{Project, ReviewState, Stage, StepStatus},
};

fn project() -> Project {
    Project::new(1, "ada", "Kinetic sculpture")
}

/// Builds a project with `n` steps, all completed with evidence.
fn project_with_done_steps(n: usize) -> Project {
    let mut p = project();
    for i in 0..n {
        let id = board::add_step(&mut p, &format!("Step {i}")).unwrap();
        board::move_step(&mut p, id, StepStatus::Doing, None).unwrap();
        board::move_step(&mut p, id, StepStatus::Done, Some(format!("proof-{i}.png"))).unwrap();
    }
    p
}

/// Walks a planning project up to Delivered.
fn deliver(p: &mut Project) {
    lifecycle::bind_template(p, 1).unwrap();
    lifecycle::advance_stage(p, Stage::Building).unwrap();
    lifecycle::advance_stage(p, Stage::Testing).unwrap();
    lifecycle::advance_stage(p, Stage::Delivered).unwrap();
}

#[test]
fn test_add_step_starts_todo() {
    let mut p = project();
    let id = board::add_step(&mut p, "Sketch design").unwrap();

    let step = p.step(id).unwrap();
    assert_eq!(step.title, "Sketch design");
    assert_eq!(step.status, StepStatus::Todo);
    assert!(step.proof.is_none());
}

#[test]
fn test_add_step_blank_title_rejected() {
    let mut p = project();
    let err = board::add_step(&mut p, "   ").unwrap_err();
    assert!(matches!(err, StudioError::Validation { field, .. } if field == "title"));
    assert!(p.steps.is_empty());
}

#[test]
fn test_add_step_ids_unique_after_removal() {
    let mut p = project();
    let a = board::add_step(&mut p, "First").unwrap();
    let b = board::add_step(&mut p, "Second").unwrap();
    board::remove_step(&mut p, a).unwrap();
    let c = board::add_step(&mut p, "Third").unwrap();

    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_move_step_legal_cycle() {
    let mut p = project();
    let id = board::add_step(&mut p, "Sketch design").unwrap();

    board::move_step(&mut p, id, StepStatus::Doing, None).unwrap();
    assert_eq!(p.step(id).unwrap().status, StepStatus::Doing);

    board::move_step(&mut p, id, StepStatus::Done, Some("img.png".into())).unwrap();
    let step = p.step(id).unwrap();
    assert_eq!(step.status, StepStatus::Done);
    assert_eq!(step.proof.as_deref(), Some("img.png"));

    // Undo clears the proof so re-completion captures fresh evidence.
    board::move_step(&mut p, id, StepStatus::Doing, None).unwrap();
    let step = p.step(id).unwrap();
    assert_eq!(step.status, StepStatus::Doing);
    assert!(step.proof.is_none());
}

#[test]
fn test_move_step_todo_to_done_is_illegal() {
    let mut p = project();
    let id = board::add_step(&mut p, "Sketch design").unwrap();

    let err = board::move_step(&mut p, id, StepStatus::Done, Some("img.png".into())).unwrap_err();
    assert!(matches!(
        err,
        StudioError::InvalidStepTransition {
            from: StepStatus::Todo,
            to: StepStatus::Done,
        }
    ));
    // No partial mutation.
    assert_eq!(p.step(id).unwrap().status, StepStatus::Todo);
    assert!(p.step(id).unwrap().proof.is_none());
}

#[test]
fn test_move_step_done_requires_evidence() {
    let mut p = project();
    let id = board::add_step(&mut p, "Sketch design").unwrap();
    board::move_step(&mut p, id, StepStatus::Doing, None).unwrap();

    let err = board::move_step(&mut p, id, StepStatus::Done, None).unwrap_err();
    assert!(matches!(err, StudioError::Validation { field, .. } if field == "evidence"));
    assert_eq!(p.step(id).unwrap().status, StepStatus::Doing);
}

#[test]
fn test_remove_step_missing_id() {
    let mut p = project();
    let err = board::remove_step(&mut p, 42).unwrap_err();
    assert!(matches!(err, StudioError::StepNotFound { id: 42 }));
}

#[test]
fn test_commit_snapshot_is_deep_copy() {
    let mut p = project();
    board::add_step(&mut p, "First").unwrap();
    board::add_step(&mut p, "Second").unwrap();

    let commit_id = ledger::push_commit(&mut p, "First checkpoint", None, None).unwrap();
    let frozen = p.commit(commit_id).unwrap().snapshot.clone();

    // Mutate the live board: delete a step and rename nothing else.
    board::remove_step(&mut p, 1).unwrap();
    assert_eq!(p.steps.len(), 1);

    let snapshot = &p.commit(commit_id).unwrap().snapshot;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(*snapshot, frozen);
}

#[test]
fn test_commit_blank_message_rejected() {
    let mut p = project();
    let err = ledger::push_commit(&mut p, "  ", None, None).unwrap_err();
    assert!(matches!(err, StudioError::Validation { field, .. } if field == "message"));
    assert!(p.commits.is_empty());
}

#[test]
fn test_commit_attaches_evidence_before_snapshot() {
    let mut p = project();
    let id = board::add_step(&mut p, "Weld the frame").unwrap();

    let commit_id = ledger::push_commit(
        &mut p,
        "Frame welded",
        Some(id),
        Some("https://img.example/frame.jpg".into()),
    )
    .unwrap();

    // Both the live step and the snapshot carry the just-attached evidence.
    assert_eq!(
        p.step(id).unwrap().proof.as_deref(),
        Some("https://img.example/frame.jpg")
    );
    let snapshot = &p.commit(commit_id).unwrap().snapshot;
    assert_eq!(
        snapshot[0].proof.as_deref(),
        Some("https://img.example/frame.jpg")
    );
}

#[test]
fn test_commit_unknown_related_step_rejected() {
    let mut p = project();
    let err = ledger::push_commit(&mut p, "Checkpoint", Some(9), None).unwrap_err();
    assert!(matches!(err, StudioError::StepNotFound { id: 9 }));
    assert!(p.commits.is_empty());
}

#[test]
fn test_restore_requires_confirmation() {
    let mut p = project();
    board::add_step(&mut p, "First").unwrap();
    let commit_id = ledger::push_commit(&mut p, "Checkpoint", None, None).unwrap();

    let err = ledger::restore_commit(&mut p, commit_id, false).unwrap_err();
    assert!(matches!(err, StudioError::Validation { field, .. } if field == "confirmed"));
}

#[test]
fn test_restore_rewinds_board_and_keeps_ledger() {
    let mut p = project();
    board::add_step(&mut p, "First").unwrap();
    board::add_step(&mut p, "Second").unwrap();
    let first = ledger::push_commit(&mut p, "Two steps", None, None).unwrap();

    board::remove_step(&mut p, 2).unwrap();
    let second = ledger::push_commit(&mut p, "One step", None, None).unwrap();
    assert_eq!(p.steps.len(), 1);

    ledger::restore_commit(&mut p, first, true).unwrap();
    assert_eq!(p.steps.len(), 2);

    // The ledger is a timeline: both commits survive, in order, intact.
    assert_eq!(p.commits.len(), 2);
    assert_eq!(p.commits[0].id, first);
    assert_eq!(p.commits[1].id, second);
    assert_eq!(p.commits[1].snapshot.len(), 1);
}

#[test]
fn test_start_building_requires_steps_and_template() {
    let mut p = project();

    // Zero steps: rejected even with a template bound.
    lifecycle::bind_template(&mut p, 1).unwrap();
    let err = lifecycle::advance_stage(&mut p, Stage::Building).unwrap_err();
    assert!(matches!(err, StudioError::InvalidStageTransition { .. }));
    assert_eq!(p.stage, Stage::Planning);

    board::add_step(&mut p, "Sketch design").unwrap();
    lifecycle::advance_stage(&mut p, Stage::Building).unwrap();
    assert_eq!(p.stage, Stage::Building);
}

#[test]
fn test_start_building_requires_template() {
    let mut p = project();
    board::add_step(&mut p, "Sketch design").unwrap();

    let err = lifecycle::advance_stage(&mut p, Stage::Building).unwrap_err();
    assert!(matches!(err, StudioError::InvalidStageTransition { .. }));
}

#[test]
fn test_template_locked_after_planning() {
    let mut p = project();
    board::add_step(&mut p, "Sketch design").unwrap();
    lifecycle::bind_template(&mut p, 1).unwrap();
    lifecycle::advance_stage(&mut p, Stage::Building).unwrap();

    let err = lifecycle::bind_template(&mut p, 2).unwrap_err();
    assert!(matches!(
        err,
        StudioError::WorkflowLocked {
            stage: Stage::Building
        }
    ));
    assert_eq!(p.workflow_template_id, Some(1));
}

#[test]
fn test_stage_skips_are_illegal() {
    let mut p = project_with_done_steps(1);
    lifecycle::bind_template(&mut p, 1).unwrap();

    for target in [Stage::Testing, Stage::Delivered, Stage::Published] {
        let err = lifecycle::advance_stage(&mut p, target).unwrap_err();
        assert!(matches!(err, StudioError::InvalidStageTransition { .. }));
    }
    assert_eq!(p.stage, Stage::Planning);
}

#[test]
fn test_submitted_edges_belong_to_the_review_gate() {
    let mut p = project_with_done_steps(1);
    deliver(&mut p);

    // The unilateral machine refuses delivered→submitted; only the gate
    // takes it.
    let err = lifecycle::advance_stage(&mut p, Stage::Submitted).unwrap_err();
    assert!(matches!(err, StudioError::InvalidStageTransition { .. }));

    review::submit_for_review(&mut p, false).unwrap();
    assert_eq!(p.stage, Stage::Submitted);

    let err = lifecycle::advance_stage(&mut p, Stage::Published).unwrap_err();
    assert!(matches!(err, StudioError::InvalidStageTransition { .. }));
}

#[test]
fn test_submit_marks_done_steps_pending() {
    let mut p = project_with_done_steps(2);
    deliver(&mut p);

    review::submit_for_review(&mut p, false).unwrap();
    assert_eq!(p.stage, Stage::Submitted);
    for step in &p.steps {
        assert_eq!(step.review, Some(ReviewState::Pending));
    }
}

#[test]
fn test_submit_incomplete_requires_override() {
    let mut p = project_with_done_steps(1);
    let partial = board::add_step(&mut p, "Unfinished").unwrap();
    deliver(&mut p);

    let err = review::submit_for_review(&mut p, false).unwrap_err();
    assert!(matches!(err, StudioError::IncompleteWork { remaining: 1 }));
    assert!(err.is_soft());
    // Without the override nothing changed.
    assert_eq!(p.stage, Stage::Delivered);
    assert!(p.steps.iter().all(|s| s.review.is_none()));

    review::submit_for_review(&mut p, true).unwrap();
    assert_eq!(p.stage, Stage::Submitted);
    // Only the done step is pending; the unfinished one carries no tag.
    assert_eq!(p.steps[0].review, Some(ReviewState::Pending));
    assert!(p.step(partial).unwrap().review.is_none());
}

#[test]
fn test_approve_publishes_and_tags_all_steps() {
    let mut p = project_with_done_steps(2);
    deliver(&mut p);
    review::submit_for_review(&mut p, false).unwrap();

    review::approve(&mut p, Some("Lovely work".into())).unwrap();
    assert_eq!(p.stage, Stage::Published);
    assert_eq!(p.feedback.as_deref(), Some("Lovely work"));
    for step in &p.steps {
        assert_eq!(step.review, Some(ReviewState::Approved));
    }
    assert!(p.stage.is_terminal());
}

#[test]
fn test_reject_requires_feedback() {
    let mut p = project_with_done_steps(1);
    deliver(&mut p);
    review::submit_for_review(&mut p, false).unwrap();

    let err = review::reject(&mut p, "  ").unwrap_err();
    assert!(matches!(err, StudioError::Validation { field, .. } if field == "feedback"));
    assert_eq!(p.stage, Stage::Submitted);
}

#[test]
fn test_reject_tags_pending_steps_with_note() {
    let mut p = project_with_done_steps(2);
    deliver(&mut p);
    review::submit_for_review(&mut p, false).unwrap();

    review::reject(&mut p, "Add more detail").unwrap();
    assert_eq!(p.stage, Stage::ChangesRequested);
    assert_eq!(p.feedback.as_deref(), Some("Add more detail"));
    for step in &p.steps {
        assert_eq!(step.review, Some(ReviewState::Rejected));
        assert_eq!(step.review_note.as_deref(), Some("Add more detail"));
    }
}

#[test]
fn test_rework_round_trip_reaches_published() {
    let mut p = project_with_done_steps(2);
    deliver(&mut p);
    review::submit_for_review(&mut p, false).unwrap();
    review::reject(&mut p, "Add more detail").unwrap();

    // Rework loop: back to building, redo a rejected step with fresh
    // evidence.
    lifecycle::advance_stage(&mut p, Stage::Building).unwrap();
    board::move_step(&mut p, 1, StepStatus::Doing, None).unwrap();
    // The stale rejected tag survives the move until the next submission.
    assert_eq!(p.step(1).unwrap().review, Some(ReviewState::Rejected));
    board::move_step(&mut p, 1, StepStatus::Done, Some("proof-v2.png".into())).unwrap();

    lifecycle::advance_stage(&mut p, Stage::Testing).unwrap();
    lifecycle::advance_stage(&mut p, Stage::Delivered).unwrap();
    review::submit_for_review(&mut p, false).unwrap();

    // Fresh submission replaces the stale tags.
    assert!(p
        .steps
        .iter()
        .all(|s| s.review == Some(ReviewState::Pending)));
    assert!(p.steps.iter().all(|s| s.review_note.is_none()));

    review::approve(&mut p, None).unwrap();
    assert_eq!(p.stage, Stage::Published);
}
