//! MCP server implementation for Atelier
//!
//! This module implements the Model Context Protocol server for Atelier,
//! providing a standardized interface for AI models to drive the project
//! workflow engine.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use atelier_core::Studio;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{
    AddStep, AdvanceStage, Approve, BindTemplate, CreateProject, Id, ListProjects, McpResult,
    MoveStep, PushCommit, Reject, RestoreCommit, StepRef, SubmitForReview,
};

/// MCP server for Atelier
#[derive(Clone)]
pub struct AtelierMcpServer {
    studio: Arc<Mutex<Studio>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AtelierMcpServer {
    /// Create a new Atelier MCP server
    pub fn new(studio: Studio) -> Self {
        Self {
            studio: Arc::new(Mutex::new(studio)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.studio.clone())
    }

    #[tool(
        name = "create_project",
        description = "Create a new learner project in the planning stage with an empty step board. Provide the owner's handle, a clear title (required), and an optional description. Returns the new project ID for adding steps and binding a workflow template."
    )]
    async fn create_project(&self, params: Parameters<CreateProject>) -> McpResult {
        self.handlers().create_project(params.0.as_ref()).await
    }

    #[tool(
        name = "list_projects",
        description = "List projects as summaries with step progress and commit counts. Optionally filter by lifecycle stage ('planning', 'building', 'testing', 'delivered', 'submitted', 'changes_requested', 'published') or by owner handle."
    )]
    async fn list_projects(&self, params: Parameters<ListProjects>) -> McpResult {
        self.handlers().list_projects(params.0.as_ref()).await
    }

    #[tool(
        name = "show_project",
        description = "Display complete details of a project: stage, bound workflow template, review feedback, every step with status/proof/review tags, and the commit count. Essential for understanding project scope and progress."
    )]
    async fn show_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_project(params.0.as_ref()).await
    }

    #[tool(
        name = "list_templates",
        description = "List the workflow template catalog: named, ordered phase lists a project can bind to while planning. Use the template ID with bind_template."
    )]
    async fn list_templates(&self) -> McpResult {
        self.handlers().list_templates().await
    }

    #[tool(
        name = "bind_template",
        description = "Bind a project to a workflow template from the catalog. Only possible while the project is in planning: once building starts the binding is locked for the project's lifetime."
    )]
    async fn bind_template(&self, params: Parameters<BindTemplate>) -> McpResult {
        self.handlers().bind_template(params.0.as_ref()).await
    }

    #[tool(
        name = "advance_stage",
        description = "Advance a project's lifecycle stage. Legal moves: planning->building (needs at least one step and a bound template), building->testing, testing->delivered, and changes_requested->building for rework. Submission to review is a separate tool (submit_for_review)."
    )]
    async fn advance_stage(&self, params: Parameters<AdvanceStage>) -> McpResult {
        self.handlers().advance_stage(params.0.as_ref()).await
    }

    #[tool(
        name = "add_step",
        description = "Add a new step to a project's board. Requires project_id and a non-empty title. Steps start with 'todo' status and are appended to the board; there is no upper bound on step count."
    )]
    async fn add_step(&self, params: Parameters<AddStep>) -> McpResult {
        self.handlers().add_step(params.0.as_ref()).await
    }

    #[tool(
        name = "remove_step",
        description = "Remove a step from a project's board unconditionally. History is not rewritten: commit snapshots that include the step keep it, and restoring such a commit brings the step back."
    )]
    async fn remove_step(&self, params: Parameters<StepRef>) -> McpResult {
        self.handlers().remove_step(params.0.as_ref()).await
    }

    #[tool(
        name = "move_step",
        description = "Move a step to a new status. Legal moves: todo->doing, doing->todo, doing->done, done->doing. Moving directly todo->done is rejected.

        IMPORTANT: When moving to 'done', you MUST provide an 'evidence' field with a proof artifact (image or link); completion and evidence capture are one atomic submission. Leaving 'done' clears the proof. Example:
        {
          \"project_id\": 1,
          \"step_id\": 3,
          \"status\": \"done\",
          \"evidence\": \"https://img.example/frame.jpg\"
        }"
    )]
    async fn move_step(&self, params: Parameters<MoveStep>) -> McpResult {
        self.handlers().move_step(params.0.as_ref()).await
    }

    #[tool(
        name = "show_step",
        description = "View detailed information about a specific step including its status, proof artifact, and review tag. Use when you need to focus on a single step rather than the whole project."
    )]
    async fn show_step(&self, params: Parameters<StepRef>) -> McpResult {
        self.handlers().show_step(params.0.as_ref()).await
    }

    #[tool(
        name = "push_commit",
        description = "Record a named snapshot of the project's current step board in the append-only ledger. Requires a non-empty message. Optionally name the step the commit documents (related_step_id) and an evidence_link; when both are given the link is attached to the live step's proof before the snapshot is taken."
    )]
    async fn push_commit(&self, params: Parameters<PushCommit>) -> McpResult {
        self.handlers().push_commit(params.0.as_ref()).await
    }

    #[tool(
        name = "commit_log",
        description = "Show a project's commit history, newest first. Each entry lists the message, timestamp, snapshot size, and any related step or evidence link. Use the commit ID with restore_commit."
    )]
    async fn commit_log(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().commit_log(params.0.as_ref()).await
    }

    #[tool(
        name = "restore_commit",
        description = "Replace the project's live step board with the deep copy stored in a historical commit. This overwrites current steps irreversibly and requires confirmed=true. The ledger itself is untouched: commits made after the restored one remain."
    )]
    async fn restore_commit(&self, params: Parameters<RestoreCommit>) -> McpResult {
        self.handlers().restore_commit(params.0.as_ref()).await
    }

    #[tool(
        name = "submit_for_review",
        description = "Submit a delivered project to the instructor review gate. Every done step is tagged pending review. If some steps are not done the tool reports a soft warning instead of submitting; call again with acknowledge_incomplete=true to submit anyway."
    )]
    async fn submit_for_review(&self, params: Parameters<SubmitForReview>) -> McpResult {
        self.handlers().submit_for_review(params.0.as_ref()).await
    }

    #[tool(
        name = "approve_project",
        description = "Approve a submitted project as the instructor: every step is tagged approved, optional feedback is stored, and the project is published. Published is terminal; no further stage changes are possible."
    )]
    async fn approve_project(&self, params: Parameters<Approve>) -> McpResult {
        self.handlers().approve_project(params.0.as_ref()).await
    }

    #[tool(
        name = "reject_project",
        description = "Reject a submitted project as the instructor. Feedback is required and must explain what to fix; every pending step is tagged rejected with the note attached. The project moves to changes_requested, whose only exit is back to building for rework."
    )]
    async fn reject_project(&self, params: Parameters<Reject>) -> McpResult {
        self.handlers().reject_project(params.0.as_ref()).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AtelierMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "atelier".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Atelier tracks learner-authored projects through a multi-phase workflow with an instructor review gate.

## Core Concepts
- **Projects**: A learner's unit of work with a lifecycle stage (planning → building → testing → delivered → submitted → published, with changes_requested looping back to building)
- **Steps**: Individually movable work items (todo/doing/done); marking a step done requires a proof artifact in the same call
- **Commits**: Immutable snapshots of the step board with point-in-time restore
- **Review gate**: Submission hands the project to the instructor, who approves (publishes) or rejects (requests changes)

## Workflow Examples

### Starting a New Project
1. Create a project with `create_project`
2. Break the work down with `add_step`
3. Pick a workflow with `list_templates` and `bind_template` (locks once building starts)
4. Call `advance_stage` with stage "building"

### Doing the Work
1. Move a step to 'doing' with `move_step` when starting it
2. Move it to 'done' with an evidence link when finished
3. Push a commit at each checkpoint with `push_commit`; use `restore_commit` (confirmed=true) to rewind an experiment

### The Review Loop
1. Advance through testing and delivered, then `submit_for_review`
2. As the instructor: `approve_project` to publish, or `reject_project` with actionable feedback
3. After rejection: `advance_stage` back to building, redo steps with fresh evidence, resubmit

## Best Practices
- Write step titles that name a demonstrable outcome
- Commit before risky experiments so the board can be restored
- Rejection feedback should name the step and the gap"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: AtelierMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Atelier MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
