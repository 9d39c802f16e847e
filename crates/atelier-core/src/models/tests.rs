use std::str::FromStr;

use super::*;

#[test]
fn test_stage_from_str() {
    assert_eq!(Stage::from_str("planning").unwrap(), Stage::Planning);
    assert_eq!(Stage::from_str("Building").unwrap(), Stage::Building);
    assert_eq!(Stage::from_str("testing").unwrap(), Stage::Testing);
    assert_eq!(Stage::from_str("delivered").unwrap(), Stage::Delivered);
    assert_eq!(Stage::from_str("submitted").unwrap(), Stage::Submitted);
    assert_eq!(
        Stage::from_str("changes_requested").unwrap(),
        Stage::ChangesRequested
    );
    assert_eq!(Stage::from_str("published").unwrap(), Stage::Published);
    assert!(Stage::from_str("archived").is_err());
}

#[test]
fn test_stage_as_str_round_trip() {
    for stage in [
        Stage::Planning,
        Stage::Building,
        Stage::Testing,
        Stage::Delivered,
        Stage::Submitted,
        Stage::ChangesRequested,
        Stage::Published,
    ] {
        assert_eq!(Stage::from_str(stage.as_str()).unwrap(), stage);
    }
}

#[test]
fn test_stage_lock_and_terminal_flags() {
    assert!(!Stage::Planning.locks_template());
    for stage in [
        Stage::Building,
        Stage::Testing,
        Stage::Delivered,
        Stage::Submitted,
        Stage::ChangesRequested,
        Stage::Published,
    ] {
        assert!(stage.locks_template(), "{stage:?} should lock the template");
    }

    assert!(Stage::Published.is_terminal());
    assert!(!Stage::ChangesRequested.is_terminal());
}

#[test]
fn test_step_status_from_str() {
    assert_eq!(StepStatus::from_str("todo").unwrap(), StepStatus::Todo);
    assert_eq!(StepStatus::from_str("doing").unwrap(), StepStatus::Doing);
    assert_eq!(
        StepStatus::from_str("in_progress").unwrap(),
        StepStatus::Doing
    );
    assert_eq!(StepStatus::from_str("Done").unwrap(), StepStatus::Done);
    assert!(StepStatus::from_str("finished").is_err());
}

#[test]
fn test_step_status_icons() {
    assert_eq!(StepStatus::Todo.with_icon(), "○ Todo");
    assert_eq!(StepStatus::Doing.with_icon(), "➤ Doing");
    assert_eq!(StepStatus::Done.with_icon(), "✓ Done");
}

#[test]
fn test_review_state_from_str() {
    assert_eq!(
        ReviewState::from_str("pending").unwrap(),
        ReviewState::Pending
    );
    assert_eq!(
        ReviewState::from_str("approved").unwrap(),
        ReviewState::Approved
    );
    assert_eq!(
        ReviewState::from_str("rejected").unwrap(),
        ReviewState::Rejected
    );
    assert!(ReviewState::from_str("PENDING_REVIEW").is_err());
}

#[test]
fn test_new_project_starts_in_planning() {
    let project = Project::new(1, "ada", "Kinetic sculpture");
    assert_eq!(project.stage, Stage::Planning);
    assert!(project.steps.is_empty());
    assert!(project.commits.is_empty());
    assert!(project.workflow_template_id.is_none());
    assert!(project.feedback.is_none());
    assert_eq!(project.next_step_id, 1);
    assert_eq!(project.next_commit_id, 1);
}

#[test]
fn test_project_step_lookup() {
    let mut project = Project::new(1, "ada", "Kinetic sculpture");
    project
        .steps
        .push(Step::new(5, "Weld the frame", jiff::Timestamp::now()));

    assert!(project.step(5).is_some());
    assert!(project.step(6).is_none());
    project.step_mut(5).unwrap().proof = Some("frame.jpg".to_string());
    assert_eq!(project.step(5).unwrap().proof.as_deref(), Some("frame.jpg"));
}

#[test]
fn test_project_document_round_trip() {
    let mut project = Project::new(3, "ada", "Kinetic sculpture");
    project.description = Some("A wind-driven mobile".to_string());
    project.workflow_template_id = Some(2);
    project.feedback = Some("Add more detail".to_string());

    let mut step = Step::new(1, "Sketch design", jiff::Timestamp::now());
    step.status = StepStatus::Done;
    step.proof = Some("img.png".to_string());
    step.review = Some(ReviewState::Rejected);
    step.review_note = Some("Add more detail".to_string());
    project.steps.push(step);
    project.next_step_id = 2;

    project.commits.push(Commit {
        id: 1,
        message: "First checkpoint".to_string(),
        created_at: jiff::Timestamp::now(),
        snapshot: project.steps.clone(),
        related_step_id: Some(1),
        evidence_link: Some("https://img.example/sketch.png".to_string()),
    });
    project.next_commit_id = 2;

    let document = serde_json::to_string(&project).unwrap();
    let parsed: Project = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed, project);
}

#[test]
fn test_stage_serde_uses_snake_case() {
    let json = serde_json::to_string(&Stage::ChangesRequested).unwrap();
    assert_eq!(json, "\"changes_requested\"");

    let parsed: Stage = serde_json::from_str("\"changes_requested\"").unwrap();
    assert_eq!(parsed, Stage::ChangesRequested);
}

#[test]
fn test_summary_counts() {
    let mut project = Project::new(1, "ada", "Kinetic sculpture");
    let now = jiff::Timestamp::now();

    let mut done = Step::new(1, "Done step", now);
    done.status = StepStatus::Done;
    let mut doing = Step::new(2, "Doing step", now);
    doing.status = StepStatus::Doing;
    let todo = Step::new(3, "Todo step", now);
    project.steps = vec![done, doing, todo];

    project.commits.push(Commit {
        id: 1,
        message: "Checkpoint".to_string(),
        created_at: now,
        snapshot: project.steps.clone(),
        related_step_id: None,
        evidence_link: None,
    });

    let summary = ProjectSummary::from(&project);
    assert_eq!(summary.total_steps, 3);
    assert_eq!(summary.done_steps, 1);
    assert_eq!(summary.doing_steps, 1);
    assert_eq!(summary.commit_count, 1);
}

#[test]
fn test_project_display_contains_metadata() {
    let mut project = Project::new(1, "ada", "Kinetic sculpture");
    project.description = Some("A wind-driven mobile".to_string());

    let output = format!("{project}");
    assert!(output.contains("# 1. Kinetic sculpture"));
    assert!(output.contains("- Owner: ada"));
    assert!(output.contains("- Stage: planning"));
    assert!(output.contains("A wind-driven mobile"));
    assert!(output.contains("No steps on this board."));
}

#[test]
fn test_step_display_shows_review_tag() {
    let mut step = Step::new(1, "Sketch design", jiff::Timestamp::now());
    step.status = StepStatus::Done;
    step.proof = Some("img.png".to_string());
    step.review = Some(ReviewState::Pending);

    let output = format!("{step}");
    assert!(output.contains("✓ Done"));
    assert!(output.contains("⏳ Pending review"));
    assert!(output.contains("img.png"));
}

#[test]
fn test_template_display_joins_phases() {
    let template = WorkflowTemplate {
        id: 1,
        name: "Design Sprint".to_string(),
        description: "A fast loop from idea to tested prototype.".to_string(),
        phases: vec![
            "Discover".to_string(),
            "Sketch".to_string(),
            "Prototype".to_string(),
            "Test".to_string(),
        ],
    };

    let output = format!("{template}");
    assert!(output.contains("Design Sprint"));
    assert!(output.contains("Discover → Sketch → Prototype → Test"));
}

#[test]
fn test_filter_from_list_params() {
    let filter = ProjectFilter::from(&crate::params::ListProjects {
        stage: Some("building".to_string()),
        owner: Some("ada".to_string()),
    });
    assert_eq!(filter.stage, Some(Stage::Building));
    assert_eq!(filter.owner.as_deref(), Some("ada"));

    // Unparsable stage falls back to unfiltered listing.
    let filter = ProjectFilter::from(&crate::params::ListProjects {
        stage: Some("bogus".to_string()),
        owner: None,
    });
    assert!(filter.stage.is_none());
}
