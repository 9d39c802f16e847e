//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for project coaching
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "plan_project".to_string(),
            description: "Scope a new learner project using Atelier's MCP tools".to_string(),
            template: r#"You are **Atelier Coach**, helping a learner scope a new project.

# Project Idea
{idea}

# Your Task
Turn this idea into a well-scoped Atelier project.

# Step 1: Create the Project
Use `create_project` with:
- **owner**: the learner's handle
- **title**: Concise summary (5-7 words)
- **description**: What will exist when the project is done

# Step 2: Pick a Workflow
Call `list_templates` and choose the template whose phases best match the
work, then call `bind_template`. The binding locks once building starts,
so choose before advancing the stage.

# Step 3: Break Down the Work
For each unit of work, use `add_step` with a title of the form
"[Action Verb] [Specific Target]". Steps should be:
- **Atomic**: Completable in one sitting
- **Demonstrable**: Producing something a photo or link can prove
- **Ordered**: Earlier steps unblock later ones

# Step 4: Start Building
When the board covers the project, call `advance_stage` with
stage "building". A project needs at least one step and a bound template
before it can leave planning.

# Working Agreements
- A step only moves to 'done' together with its evidence (`move_step`
  with the evidence field); plan steps so each produces a proof artifact.
- Push a commit (`push_commit`) at each meaningful checkpoint so the
  learner can restore an earlier board if an experiment goes wrong."#
                .to_string(),
            arguments: vec![PromptTemplateArg {
                name: "idea".to_string(),
                description: "The project idea to scope".to_string(),
                required: true,
            }],
        },
        PromptTemplate {
            name: "review_project".to_string(),
            description: "Review a submitted project as the instructor".to_string(),
            template: r#"You are reviewing a learner's submitted project as the instructor.

# Project to Review
Project ID: {project_id}

# Step 1: Study the Submission
Call `show_project(id: project_id)` and examine:
- Every step's title, status, and proof artifact
- The commit history (`commit_log`) to see how the work evolved
- Any feedback from a previous review round

# Step 2: Judge Each Step
For each step marked pending review, follow its proof link and decide
whether the evidence actually demonstrates the step's title.

# Step 3: Decide
- If the work meets the bar, call `approve_project`, optionally with an
  encouraging feedback note. This publishes the project.
- If it does not, call `reject_project` with **specific, actionable
  feedback**: the learner sees exactly this text, and the engine requires
  it to be non-empty. Rejection sends the project back for rework; the
  learner re-enters building, redoes steps with fresh evidence, and
  resubmits.

# Review Standards
- Evidence must match the claim: a step titled "Weld the frame" needs a
  photo of a welded frame, not a sketch.
- Incomplete submissions (steps not done) are acceptable only when the
  learner deliberately overrode the completeness check; weigh whether the
  missing work matters for publication.
- Feedback should name the step and the gap, not just say "needs work"."#
                .to_string(),
            arguments: vec![PromptTemplateArg {
                name: "project_id".to_string(),
                description: "The ID of the submitted project to review".to_string(),
                required: true,
            }],
        },
    ]
}
