//! Command-line interface definitions and handlers using clap
//!
//! This module defines the CLI structure with clap's derive API and the
//! handlers that execute commands against the studio. It implements the
//! parameter wrapper pattern for clean separation between CLI framework
//! concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command follows the same structure: a CLI-specific argument struct
//! with clap derives, a `From` conversion into the framework-free core
//! parameter type, and a handler that renders the operation's Display
//! output through the terminal renderer.

use anyhow::{Context, Result};
use atelier_core::{
    notices::{Notice, NoticeQueue, Severity},
    params::*,
    CoverAttempt, CreateResult, OperationStatus, Steps, Studio, StudioError, UpdateResult,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::{artist::MonogramArtist, renderer::TerminalRenderer};

/// Command handlers bound to a studio and a renderer.
pub struct Cli {
    studio: Studio,
    renderer: TerminalRenderer,
    notices: NoticeQueue,
}

// ============================================================================
// Project commands
// ============================================================================

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Learner who owns the project
    pub owner: String,
    /// Title of the project
    pub title: String,
    /// Optional description providing more context about the project
    #[arg(
        short,
        long,
        help = "Optional description providing more context about the project"
    )]
    pub description: Option<String>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            owner: val.owner,
            title: val.title,
            description: val.description,
        }
    }
}

/// List projects
#[derive(Args)]
pub struct ListProjectsArgs {
    /// Only show projects in this stage
    #[arg(long, help = "Only show projects in this lifecycle stage")]
    pub stage: Option<String>,
    /// Only show projects owned by this learner
    #[arg(long, help = "Only show projects owned by this learner")]
    pub owner: Option<String>,
}

impl From<ListProjectsArgs> for ListProjects {
    fn from(val: ListProjectsArgs) -> Self {
        ListProjects {
            stage: val.stage,
            owner: val.owner,
        }
    }
}

/// Show details of a specific project
#[derive(Args)]
pub struct ShowProjectArgs {
    /// ID of the project to display
    #[arg(help = "Unique identifier of the project to show details for")]
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Bind a project to a workflow template
///
/// The binding is only open while the project is in planning; once
/// building starts the template is locked for the project's lifetime.
#[derive(Args)]
pub struct BindTemplateArgs {
    /// ID of the project to bind
    pub project_id: u64,
    /// ID of the workflow template from the catalog
    pub template_id: u64,
}

impl From<BindTemplateArgs> for BindTemplate {
    fn from(val: BindTemplateArgs) -> Self {
        BindTemplate {
            project_id: val.project_id,
            template_id: val.template_id,
        }
    }
}

/// Advance a project to the next lifecycle stage
#[derive(Args)]
pub struct AdvanceStageArgs {
    /// ID of the project to advance
    pub project_id: u64,
    /// Target stage
    #[arg(help = "Target stage (building, testing, delivered)")]
    pub stage: StageArg,
}

impl From<AdvanceStageArgs> for AdvanceStage {
    fn from(val: AdvanceStageArgs) -> Self {
        AdvanceStage {
            project_id: val.project_id,
            stage: val.stage.to_string(),
        }
    }
}

/// Generate advisory cover art for a project
#[derive(Args)]
pub struct CoverArgs {
    /// ID of the project to illustrate
    pub id: u64,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List projects
    #[command(aliases = ["l", "ls"])]
    List(ListProjectsArgs),
    /// Show details of a specific project
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// List the workflow template catalog
    #[command(alias = "t")]
    Templates,
    /// Bind a project to a workflow template
    #[command(alias = "b")]
    Bind(BindTemplateArgs),
    /// Advance a project to the next lifecycle stage
    #[command(alias = "a")]
    Advance(AdvanceStageArgs),
    /// Generate advisory cover art for a project
    Cover(CoverArgs),
}

// ============================================================================
// Step commands
// ============================================================================

/// Add a new step to a project's board
#[derive(Args)]
pub struct AddStepArgs {
    /// ID of the project to add the step to
    #[arg(help = "Unique identifier of the project to add this step to")]
    pub project_id: u64,
    /// Title of the step
    pub title: String,
}

impl From<AddStepArgs> for AddStep {
    fn from(val: AddStepArgs) -> Self {
        AddStep {
            project_id: val.project_id,
            title: val.title,
        }
    }
}

/// Remove a step from a project's board
///
/// Removal is unconditional and does not rewrite history: commit snapshots
/// that include the step keep it.
#[derive(Args)]
pub struct RemoveStepArgs {
    /// ID of the owning project
    pub project_id: u64,
    /// ID of the step to remove
    pub step_id: u64,
}

impl From<RemoveStepArgs> for StepRef {
    fn from(val: RemoveStepArgs) -> Self {
        StepRef {
            project_id: val.project_id,
            step_id: val.step_id,
        }
    }
}

/// Move a step to a new board position
///
/// Legal moves are todo→doing, doing→todo, doing→done, and done→doing.
/// Moving to done requires --evidence: completion and evidence capture are
/// one atomic submission.
#[derive(Args)]
pub struct MoveStepArgs {
    /// ID of the owning project
    pub project_id: u64,
    /// ID of the step to move
    pub step_id: u64,
    /// Target status
    #[arg(help = "Target status (todo, doing, done)")]
    pub status: StepStatusArg,
    /// Proof artifact (image or link) - required when moving to done
    #[arg(
        short,
        long,
        help = "Proof artifact (image or link) - required when moving to done"
    )]
    pub evidence: Option<String>,
}

impl From<MoveStepArgs> for MoveStep {
    fn from(val: MoveStepArgs) -> Self {
        MoveStep {
            project_id: val.project_id,
            step_id: val.step_id,
            status: val.status.to_string(),
            evidence: val.evidence,
        }
    }
}

/// Show details of a specific step
#[derive(Args)]
pub struct ShowStepArgs {
    /// ID of the owning project
    pub project_id: u64,
    /// ID of the step to show
    pub step_id: u64,
}

impl From<ShowStepArgs> for StepRef {
    fn from(val: ShowStepArgs) -> Self {
        StepRef {
            project_id: val.project_id,
            step_id: val.step_id,
        }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Add a new step to a project's board
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Remove a step from a project's board
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveStepArgs),
    /// Move a step to a new board position
    #[command(alias = "m")]
    Move(MoveStepArgs),
    /// Show details of a specific step
    #[command(alias = "s")]
    Show(ShowStepArgs),
}

// ============================================================================
// Commit commands
// ============================================================================

/// Record a commit of the current step board
#[derive(Args)]
pub struct PushCommitArgs {
    /// ID of the project to commit
    pub project_id: u64,
    /// Commit message
    pub message: String,
    /// Step this commit documents
    #[arg(long = "step", help = "Step this commit documents")]
    pub related_step_id: Option<u64>,
    /// External proof URL, also attached to the related step's proof
    #[arg(
        long,
        help = "External proof URL; with --step, also attached to the live step before the snapshot"
    )]
    pub evidence_link: Option<String>,
}

impl From<PushCommitArgs> for PushCommit {
    fn from(val: PushCommitArgs) -> Self {
        PushCommit {
            project_id: val.project_id,
            message: val.message,
            related_step_id: val.related_step_id,
            evidence_link: val.evidence_link,
        }
    }
}

/// Show a project's commit history, newest first
#[derive(Args)]
pub struct CommitLogArgs {
    /// ID of the project
    pub project_id: u64,
}

/// Restore the step board from a historical commit
///
/// This overwrites the live board and cannot be undone; later commits stay
/// in the ledger untouched.
#[derive(Args)]
pub struct RestoreCommitArgs {
    /// ID of the owning project
    pub project_id: u64,
    /// ID of the commit to restore from
    pub commit_id: u64,
    /// Confirm the overwrite (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RestoreCommitArgs> for RestoreCommit {
    fn from(val: RestoreCommitArgs) -> Self {
        RestoreCommit {
            project_id: val.project_id,
            commit_id: val.commit_id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum CommitCommands {
    /// Record a commit of the current step board
    #[command(alias = "p")]
    Push(PushCommitArgs),
    /// Show a project's commit history, newest first
    #[command(alias = "l")]
    Log(CommitLogArgs),
    /// Restore the step board from a historical commit
    #[command(alias = "r")]
    Restore(RestoreCommitArgs),
}

// ============================================================================
// Review commands
// ============================================================================

/// Submit a delivered project for instructor review
#[derive(Args)]
pub struct SubmitArgs {
    /// ID of the project to submit
    pub project_id: u64,
    /// Proceed even though some steps are not done
    #[arg(long)]
    pub acknowledge_incomplete: bool,
}

impl From<SubmitArgs> for SubmitForReview {
    fn from(val: SubmitArgs) -> Self {
        SubmitForReview {
            project_id: val.project_id,
            acknowledge_incomplete: val.acknowledge_incomplete,
        }
    }
}

/// Approve a submitted project and publish it
#[derive(Args)]
pub struct ApproveArgs {
    /// ID of the project to approve
    pub project_id: u64,
    /// Optional feedback note for the learner
    #[arg(short, long)]
    pub feedback: Option<String>,
}

impl From<ApproveArgs> for Approve {
    fn from(val: ApproveArgs) -> Self {
        Approve {
            project_id: val.project_id,
            feedback: val.feedback,
        }
    }
}

/// Reject a submitted project, requesting changes
#[derive(Args)]
pub struct RejectArgs {
    /// ID of the project to reject
    pub project_id: u64,
    /// What the learner must fix
    #[arg(short, long)]
    pub feedback: String,
}

impl From<RejectArgs> for Reject {
    fn from(val: RejectArgs) -> Self {
        Reject {
            project_id: val.project_id,
            feedback: val.feedback,
        }
    }
}

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// Submit a delivered project for instructor review
    #[command(alias = "s")]
    Submit(SubmitArgs),
    /// Approve a submitted project and publish it
    #[command(alias = "a")]
    Approve(ApproveArgs),
    /// Reject a submitted project, requesting changes
    #[command(alias = "r")]
    Reject(RejectArgs),
}

/// Command-line argument representation of step status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StepStatusArg {
    /// Mark step as todo
    Todo,
    /// Mark step as doing
    Doing,
    /// Mark step as done
    Done,
}

impl std::fmt::Display for StepStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatusArg::Todo => write!(f, "todo"),
            StepStatusArg::Doing => write!(f, "doing"),
            StepStatusArg::Done => write!(f, "done"),
        }
    }
}

/// Command-line argument representation of lifecycle stages reachable by
/// unilateral advancement
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StageArg {
    /// Start or resume building
    Building,
    /// Move into verification
    Testing,
    /// Mark the work finished and ready for submission
    Delivered,
}

impl std::fmt::Display for StageArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageArg::Building => write!(f, "building"),
            StageArg::Testing => write!(f, "testing"),
            StageArg::Delivered => write!(f, "delivered"),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

impl Cli {
    pub fn new(studio: Studio, renderer: TerminalRenderer) -> Self {
        Self {
            studio,
            renderer,
            notices: NoticeQueue::new(),
        }
    }

    /// Renders every queued notice after the command output.
    fn flush_notices(&mut self) -> Result<()> {
        for notice in self.notices.drain() {
            let prefix = match notice.severity {
                Severity::Info => "Note",
                Severity::Warning => "Warning",
                Severity::Error => "Error",
            };
            self.renderer.render(&format!("{}: {}\n", prefix, notice.message))?;
        }
        Ok(())
    }

    pub async fn list_projects(&mut self, params: &ListProjects) -> Result<()> {
        let summaries = self
            .studio
            .list_projects_summary(params)
            .await
            .context("Failed to list projects")?;

        let title = if summaries.is_empty() {
            "No projects found"
        } else {
            "Projects"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    pub async fn handle_project_command(&mut self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self
                    .studio
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer
                    .render(&CreateResult::new(project).to_string())?;
            }
            ProjectCommands::List(args) => {
                let params = args.into();
                self.list_projects(&params).await?;
            }
            ProjectCommands::Show(args) => {
                let params: Id = args.into();
                match self
                    .studio
                    .get_project(&params)
                    .await
                    .context("Failed to get project")?
                {
                    Some(project) => self.renderer.render(&project.to_string())?,
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Project with ID {} not found",
                            params.id
                        ))
                        .to_string(),
                    )?,
                }
            }
            ProjectCommands::Templates => {
                let templates = self
                    .studio
                    .list_templates()
                    .await
                    .context("Failed to list templates")?;
                let mut output = String::from("# Workflow Templates\n\n");
                for template in &templates {
                    output.push_str(&template.to_string());
                }
                self.renderer.render(&output)?;
            }
            ProjectCommands::Bind(args) => {
                let params: BindTemplate = args.into();
                let project = self
                    .studio
                    .bind_template(&params)
                    .await
                    .context("Failed to bind template")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Bound project {} to workflow template {}. The binding locks once building starts.",
                        project.id, params.template_id
                    ))
                    .to_string(),
                )?;
            }
            ProjectCommands::Advance(args) => {
                let params: AdvanceStage = args.into();
                let project = self
                    .studio
                    .advance_stage(&params)
                    .await
                    .context("Failed to advance stage")?;
                let changes = vec![format!("Advanced stage to {}", project.stage)];
                self.renderer
                    .render(&UpdateResult::with_changes(project, changes).to_string())?;
            }
            ProjectCommands::Cover(args) => {
                let attempt = self
                    .studio
                    .request_cover(&Id { id: args.id }, &MonogramArtist)
                    .await
                    .context("Failed to request cover art")?;
                match attempt {
                    CoverAttempt::Succeeded(art) => self.renderer.render(
                        &OperationStatus::success(format!(
                            "Cover art stored: {}",
                            art.reference
                        ))
                        .to_string(),
                    )?,
                    CoverAttempt::Failed(failure) => {
                        // Advisory only: report and exit cleanly.
                        self.notices
                            .push(Notice::error(format!("Cover generation failed: {failure}")));
                    }
                    CoverAttempt::Pending => {}
                }
            }
        }
        self.flush_notices()
    }

    pub async fn handle_step_command(&mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(args) => {
                let step = self
                    .studio
                    .add_step(&args.into())
                    .await
                    .context("Failed to add step")?;
                self.renderer.render(&CreateResult::new(step).to_string())?;
            }
            StepCommands::Remove(args) => {
                let params: StepRef = args.into();
                let removed = self
                    .studio
                    .remove_step(&params)
                    .await
                    .context("Failed to remove step")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Removed step {} ({}). Commit snapshots keep it.",
                        removed.id, removed.title
                    ))
                    .to_string(),
                )?;
            }
            StepCommands::Move(args) => {
                let params: MoveStep = args.into();
                let project = self
                    .studio
                    .move_step(&params)
                    .await
                    .context("Failed to move step")?;
                let step = project
                    .step(params.step_id)
                    .cloned()
                    .context("Moved step missing from project")?;
                let changes = vec![format!("Moved to {}", step.status)];
                self.renderer
                    .render(&UpdateResult::with_changes(step, changes).to_string())?;
            }
            StepCommands::Show(args) => {
                let params: StepRef = args.into();
                match self
                    .studio
                    .get_step(&params)
                    .await
                    .context("Failed to get step")?
                {
                    Some(step) => self.renderer.render(&step.to_string())?,
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Step with ID {} not found",
                            params.step_id
                        ))
                        .to_string(),
                    )?,
                }
            }
        }
        self.flush_notices()
    }

    pub async fn handle_commit_command(&mut self, command: CommitCommands) -> Result<()> {
        match command {
            CommitCommands::Push(args) => {
                let commit = self
                    .studio
                    .push_commit(&args.into())
                    .await
                    .context("Failed to push commit")?;
                self.renderer
                    .render(&CreateResult::new(commit).to_string())?;
            }
            CommitCommands::Log(args) => {
                let project = self
                    .studio
                    .get_project(&Id {
                        id: args.project_id,
                    })
                    .await
                    .context("Failed to get project")?
                    .with_context(|| format!("Project with ID {} not found", args.project_id))?;
                let log = atelier_core::Commits(project.commits);
                self.renderer.render(&format!("# History\n\n{log}"))?;
            }
            CommitCommands::Restore(args) => {
                let params: RestoreCommit = args.into();
                let project = self
                    .studio
                    .restore_commit(&params)
                    .await
                    .context("Failed to restore commit")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Restored the board of project {} from commit {}. The ledger is unchanged.",
                        project.id, params.commit_id
                    ))
                    .to_string(),
                )?;
                self.renderer
                    .render(&format!("\n{}", Steps(project.steps)))?;
            }
        }
        self.flush_notices()
    }

    pub async fn handle_review_command(&mut self, command: ReviewCommands) -> Result<()> {
        match command {
            ReviewCommands::Submit(args) => {
                let params: SubmitForReview = args.into();
                match self.studio.submit_for_review(&params).await {
                    Ok(project) => {
                        self.renderer.render(
                            &OperationStatus::success(format!(
                                "Project {} submitted for review.",
                                project.id
                            ))
                            .to_string(),
                        )?;
                    }
                    // Soft warning: unfinished steps need an explicit override.
                    Err(err @ StudioError::IncompleteWork { .. }) => {
                        self.notices.push(Notice::warning(format!(
                            "{err}. Re-run with --acknowledge-incomplete to submit anyway."
                        )));
                    }
                    Err(err) => return Err(err).context("Failed to submit for review"),
                }
            }
            ReviewCommands::Approve(args) => {
                let project = self
                    .studio
                    .approve(&args.into())
                    .await
                    .context("Failed to approve project")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Project {} approved and published.",
                        project.id
                    ))
                    .to_string(),
                )?;
            }
            ReviewCommands::Reject(args) => {
                let project = self
                    .studio
                    .reject(&args.into())
                    .await
                    .context("Failed to reject project")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Project {} sent back with changes requested.",
                        project.id
                    ))
                    .to_string(),
                )?;
            }
        }
        self.flush_notices()
    }
}
