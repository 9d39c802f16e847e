use atelier_core::{
    params::{
        AddStep, AdvanceStage, Approve, BindTemplate, Id, MoveStep, PushCommit, Reject,
        RestoreCommit, StepRef, SubmitForReview,
    },
    ReviewState, Stage, StepStatus, StudioError,
};

mod common;
use common::create_test_studio;

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_project_workflow() {
    let (_temp_dir, studio) = create_test_studio().await;

    // Create a project
    let project = studio
        .create_project(&atelier_core::params::CreateProject {
            owner: "ada".to_string(),
            title: "Kinetic sculpture".to_string(),
            description: Some("A wind-driven mobile for the courtyard".to_string()),
        })
        .await
        .expect("Failed to create project");
    let project_id = project.id;

    // Add steps while planning
    let sketch = studio
        .add_step(&AddStep {
            project_id,
            title: "Sketch design".to_string(),
        })
        .await
        .expect("Failed to add step");
    let weld = studio
        .add_step(&AddStep {
            project_id,
            title: "Weld the frame".to_string(),
        })
        .await
        .expect("Failed to add step");

    // Starting to build needs a bound template
    let err = studio
        .advance_stage(&AdvanceStage {
            project_id,
            stage: "building".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidStageTransition { .. }));

    studio
        .bind_template(&BindTemplate {
            project_id,
            template_id: 1,
        })
        .await
        .expect("Failed to bind template");
    studio
        .advance_stage(&AdvanceStage {
            project_id,
            stage: "building".to_string(),
        })
        .await
        .expect("Failed to start building");

    // Work through the first step and commit with evidence
    studio
        .move_step(&MoveStep {
            project_id,
            step_id: sketch.id,
            status: "doing".to_string(),
            evidence: None,
        })
        .await
        .expect("Failed to move step");
    studio
        .move_step(&MoveStep {
            project_id,
            step_id: sketch.id,
            status: "done".to_string(),
            evidence: Some("sketch.png".to_string()),
        })
        .await
        .expect("Failed to complete step");

    let checkpoint = studio
        .push_commit(&PushCommit {
            project_id,
            message: "Sketch finished".to_string(),
            related_step_id: Some(sketch.id),
            evidence_link: Some("https://img.example/sketch.png".to_string()),
        })
        .await
        .expect("Failed to push commit");
    assert_eq!(checkpoint.snapshot.len(), 2);
    // The snapshot reflects the evidence attached in the same action
    assert_eq!(
        checkpoint.snapshot[0].proof.as_deref(),
        Some("https://img.example/sketch.png")
    );

    // Delete the second step, then restore it from the checkpoint
    studio
        .remove_step(&StepRef {
            project_id,
            step_id: weld.id,
        })
        .await
        .expect("Failed to remove step");
    let project = studio
        .get_project(&Id { id: project_id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.steps.len(), 1);
    assert_eq!(project.commits[0].snapshot.len(), 2);

    let restored = studio
        .restore_commit(&RestoreCommit {
            project_id,
            commit_id: checkpoint.id,
            confirmed: true,
        })
        .await
        .expect("Failed to restore commit");
    assert_eq!(restored.steps.len(), 2);

    // Finish the remaining step and move to delivered
    studio
        .move_step(&MoveStep {
            project_id,
            step_id: weld.id,
            status: "doing".to_string(),
            evidence: None,
        })
        .await
        .unwrap();
    studio
        .move_step(&MoveStep {
            project_id,
            step_id: weld.id,
            status: "done".to_string(),
            evidence: Some("frame.jpg".to_string()),
        })
        .await
        .unwrap();
    for stage in ["testing", "delivered"] {
        studio
            .advance_stage(&AdvanceStage {
                project_id,
                stage: stage.to_string(),
            })
            .await
            .expect("Failed to advance stage");
    }

    // Review loop: submit, reject, rework, resubmit, approve
    studio
        .submit_for_review(&SubmitForReview {
            project_id,
            acknowledge_incomplete: false,
        })
        .await
        .expect("Failed to submit");

    let rejected = studio
        .reject(&Reject {
            project_id,
            feedback: "Add more detail to the sketch".to_string(),
        })
        .await
        .expect("Failed to reject");
    assert_eq!(rejected.stage, Stage::ChangesRequested);
    assert!(rejected
        .steps
        .iter()
        .all(|s| s.review == Some(ReviewState::Rejected)));

    studio
        .advance_stage(&AdvanceStage {
            project_id,
            stage: "building".to_string(),
        })
        .await
        .expect("Rework must re-enter building");
    studio
        .move_step(&MoveStep {
            project_id,
            step_id: sketch.id,
            status: "doing".to_string(),
            evidence: None,
        })
        .await
        .expect("Rejected step must be movable again");
    studio
        .move_step(&MoveStep {
            project_id,
            step_id: sketch.id,
            status: "done".to_string(),
            evidence: Some("sketch-v2.png".to_string()),
        })
        .await
        .unwrap();
    for stage in ["testing", "delivered"] {
        studio
            .advance_stage(&AdvanceStage {
                project_id,
                stage: stage.to_string(),
            })
            .await
            .unwrap();
    }
    let resubmitted = studio
        .submit_for_review(&SubmitForReview {
            project_id,
            acknowledge_incomplete: false,
        })
        .await
        .expect("Failed to resubmit");
    assert!(resubmitted
        .steps
        .iter()
        .all(|s| s.review == Some(ReviewState::Pending)));

    let published = studio
        .approve(&Approve {
            project_id,
            feedback: Some("Strong improvement".to_string()),
        })
        .await
        .expect("Failed to approve");
    assert_eq!(published.stage, Stage::Published);
    assert!(published
        .steps
        .iter()
        .all(|s| s.review == Some(ReviewState::Approved)));

    // Published is terminal
    let err = studio
        .advance_stage(&AdvanceStage {
            project_id,
            stage: "building".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidStageTransition { .. }));
}

#[tokio::test]
async fn test_commit_snapshots_survive_step_mutation() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = studio
        .create_project(&atelier_core::params::CreateProject {
            owner: "grace".to_string(),
            title: "Compiler diorama".to_string(),
            description: None,
        })
        .await
        .unwrap();

    for title in ["Lexer", "Parser"] {
        studio
            .add_step(&AddStep {
                project_id: project.id,
                title: title.to_string(),
            })
            .await
            .unwrap();
    }

    let commit = studio
        .push_commit(&PushCommit {
            project_id: project.id,
            message: "Both stages planned".to_string(),
            related_step_id: None,
            evidence_link: None,
        })
        .await
        .unwrap();

    // Mutate the live board every way available
    studio
        .move_step(&MoveStep {
            project_id: project.id,
            step_id: 1,
            status: "doing".to_string(),
            evidence: None,
        })
        .await
        .unwrap();
    studio
        .remove_step(&StepRef {
            project_id: project.id,
            step_id: 2,
        })
        .await
        .unwrap();
    studio
        .add_step(&AddStep {
            project_id: project.id,
            title: "Codegen".to_string(),
        })
        .await
        .unwrap();

    let fetched = studio
        .get_project(&Id { id: project.id })
        .await
        .unwrap()
        .unwrap();
    let snapshot = &fetched.commit(commit.id).unwrap().snapshot;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].status, StepStatus::Todo);
    assert_eq!(snapshot[1].title, "Parser");
}

#[tokio::test]
async fn test_move_step_unknown_ids() {
    let (_temp_dir, studio) = create_test_studio().await;

    let err = studio
        .move_step(&MoveStep {
            project_id: 99,
            step_id: 1,
            status: "doing".to_string(),
            evidence: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::ProjectNotFound { id: 99 }));

    let project = studio
        .create_project(&atelier_core::params::CreateProject {
            owner: "ada".to_string(),
            title: "Kinetic sculpture".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let err = studio
        .move_step(&MoveStep {
            project_id: project.id,
            step_id: 7,
            status: "doing".to_string(),
            evidence: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::StepNotFound { id: 7 }));
}
