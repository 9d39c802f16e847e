//! MCP tool handlers implementation

use std::sync::Arc;

use atelier_core::{
    display::{CreateResult, OperationStatus},
    params as core, Studio, StudioError,
};
use log::debug;
use rmcp::{
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper implements the parameter wrapper pattern by wrapping
// any core parameter type in a transparent serde container and adding the
// MCP-specific derives (Deserialize, JsonSchema) for JSON handling, keeping
// the core types clean of framework dependencies.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateProject = McpParams<core::CreateProject>;
pub type ListProjects = McpParams<core::ListProjects>;
pub type BindTemplate = McpParams<core::BindTemplate>;
pub type AdvanceStage = McpParams<core::AdvanceStage>;
pub type AddStep = McpParams<core::AddStep>;
pub type StepRef = McpParams<core::StepRef>;
pub type MoveStep = McpParams<core::MoveStep>;
pub type PushCommit = McpParams<core::PushCommit>;
pub type RestoreCommit = McpParams<core::RestoreCommit>;
pub type SubmitForReview = McpParams<core::SubmitForReview>;
pub type Approve = McpParams<core::Approve>;
pub type Reject = McpParams<core::Reject>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    studio: Arc<Mutex<Studio>>,
}

impl McpHandlers {
    pub fn new(studio: Arc<Mutex<Studio>>) -> Self {
        Self { studio }
    }

    fn text_result(text: String) -> McpResult {
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    pub async fn create_project(&self, params: &core::CreateProject) -> McpResult {
        debug!("create_project: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .create_project(params)
            .await
            .map_err(|e| to_mcp_error("Failed to create project", &e))?;

        Self::text_result(CreateResult::new(project).to_string())
    }

    pub async fn list_projects(&self, params: &core::ListProjects) -> McpResult {
        debug!("list_projects: {:?}", params);

        let summaries = self
            .studio
            .lock()
            .await
            .list_projects_summary(params)
            .await
            .map_err(|e| to_mcp_error("Failed to list projects", &e))?;

        let title = if summaries.is_empty() {
            "No projects found"
        } else {
            "Projects"
        };
        Self::text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_project(&self, params: &core::Id) -> McpResult {
        debug!("show_project: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .get_project(params)
            .await
            .map_err(|e| to_mcp_error("Failed to get project", &e))?
            .ok_or_else(|| {
                McpError::internal_error(format!("Project with ID {} not found", params.id), None)
            })?;

        Self::text_result(project.to_string())
    }

    pub async fn list_templates(&self) -> McpResult {
        debug!("list_templates");

        let templates = self
            .studio
            .lock()
            .await
            .list_templates()
            .await
            .map_err(|e| to_mcp_error("Failed to list templates", &e))?;

        let mut output = String::from("# Workflow Templates\n\n");
        for template in &templates {
            output.push_str(&template.to_string());
        }
        Self::text_result(output)
    }

    pub async fn bind_template(&self, params: &core::BindTemplate) -> McpResult {
        debug!("bind_template: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .bind_template(params)
            .await
            .map_err(|e| to_mcp_error("Failed to bind template", &e))?;

        Self::text_result(
            OperationStatus::success(format!(
                "Bound project {} to workflow template {}. The binding locks once building starts.",
                project.id, params.template_id
            ))
            .to_string(),
        )
    }

    pub async fn advance_stage(&self, params: &core::AdvanceStage) -> McpResult {
        debug!("advance_stage: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .advance_stage(params)
            .await
            .map_err(|e| to_mcp_error("Failed to advance stage", &e))?;

        Self::text_result(
            OperationStatus::success(format!(
                "Project {} is now in stage '{}'.",
                project.id, project.stage
            ))
            .to_string(),
        )
    }

    pub async fn add_step(&self, params: &core::AddStep) -> McpResult {
        debug!("add_step: {:?}", params);

        let step = self
            .studio
            .lock()
            .await
            .add_step(params)
            .await
            .map_err(|e| to_mcp_error("Failed to add step", &e))?;

        Self::text_result(CreateResult::new(step).to_string())
    }

    pub async fn remove_step(&self, params: &core::StepRef) -> McpResult {
        debug!("remove_step: {:?}", params);

        let removed = self
            .studio
            .lock()
            .await
            .remove_step(params)
            .await
            .map_err(|e| to_mcp_error("Failed to remove step", &e))?;

        Self::text_result(
            OperationStatus::success(format!(
                "Removed step {} ({}). Commit snapshots keep it.",
                removed.id, removed.title
            ))
            .to_string(),
        )
    }

    pub async fn move_step(&self, params: &core::MoveStep) -> McpResult {
        debug!("move_step: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .move_step(params)
            .await
            .map_err(|e| to_mcp_error("Failed to move step", &e))?;

        let step = project.step(params.step_id).ok_or_else(|| {
            McpError::internal_error(
                format!("Step with ID {} not found", params.step_id),
                None,
            )
        })?;
        Self::text_result(step.to_string())
    }

    pub async fn show_step(&self, params: &core::StepRef) -> McpResult {
        debug!("show_step: {:?}", params);

        let step = self
            .studio
            .lock()
            .await
            .get_step(params)
            .await
            .map_err(|e| to_mcp_error("Failed to get step", &e))?
            .ok_or_else(|| {
                McpError::internal_error(
                    format!("Step with ID {} not found", params.step_id),
                    None,
                )
            })?;

        Self::text_result(step.to_string())
    }

    pub async fn push_commit(&self, params: &core::PushCommit) -> McpResult {
        debug!("push_commit: {:?}", params);

        let commit = self
            .studio
            .lock()
            .await
            .push_commit(params)
            .await
            .map_err(|e| to_mcp_error("Failed to push commit", &e))?;

        Self::text_result(CreateResult::new(commit).to_string())
    }

    pub async fn commit_log(&self, params: &core::Id) -> McpResult {
        debug!("commit_log: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .get_project(params)
            .await
            .map_err(|e| to_mcp_error("Failed to get project", &e))?
            .ok_or_else(|| {
                McpError::internal_error(format!("Project with ID {} not found", params.id), None)
            })?;

        let log = atelier_core::Commits(project.commits);
        Self::text_result(format!("# History\n\n{log}"))
    }

    pub async fn restore_commit(&self, params: &core::RestoreCommit) -> McpResult {
        debug!("restore_commit: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .restore_commit(params)
            .await
            .map_err(|e| to_mcp_error("Failed to restore commit", &e))?;

        Self::text_result(
            OperationStatus::success(format!(
                "Restored the board of project {} from commit {}. The ledger is unchanged.",
                project.id, params.commit_id
            ))
            .to_string(),
        )
    }

    pub async fn submit_for_review(&self, params: &core::SubmitForReview) -> McpResult {
        debug!("submit_for_review: {:?}", params);

        match self.studio.lock().await.submit_for_review(params).await {
            Ok(project) => Self::text_result(
                OperationStatus::success(format!(
                    "Project {} submitted for review.",
                    project.id
                ))
                .to_string(),
            ),
            // Soft warning, not a tool failure: the caller decides whether
            // to override.
            Err(err @ StudioError::IncompleteWork { .. }) => Self::text_result(format!(
                "{err}. Call submit_for_review again with acknowledge_incomplete=true to \
                 submit anyway."
            )),
            Err(e) => Err(to_mcp_error("Failed to submit for review", &e)),
        }
    }

    pub async fn approve_project(&self, params: &core::Approve) -> McpResult {
        debug!("approve_project: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .approve(params)
            .await
            .map_err(|e| to_mcp_error("Failed to approve project", &e))?;

        Self::text_result(
            OperationStatus::success(format!(
                "Project {} approved and published.",
                project.id
            ))
            .to_string(),
        )
    }

    pub async fn reject_project(&self, params: &core::Reject) -> McpResult {
        debug!("reject_project: {:?}", params);

        let project = self
            .studio
            .lock()
            .await
            .reject(params)
            .await
            .map_err(|e| to_mcp_error("Failed to reject project", &e))?;

        Self::text_result(
            OperationStatus::success(format!(
                "Project {} sent back with changes requested.",
                project.id
            ))
            .to_string(),
        )
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            // Check if any required arguments are missing
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
