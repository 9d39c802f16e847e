//! Project lifecycle operations for the Studio.

use tokio::task;

use super::Studio;
use crate::{
    cover::{CoverArtist, CoverAttempt, CoverBrief},
    db::Database,
    engine::lifecycle,
    error::{Result, StudioError},
    models::{Project, ProjectFilter, ProjectSummary, Stage, WorkflowTemplate},
    params::{AdvanceStage, BindTemplate, CreateProject, Id, ListProjects},
};

impl Studio {
    /// Creates a new project in Planning with an empty step board.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let owner = params.owner.trim().to_string();
        let title = params.title.trim().to_string();
        if owner.is_empty() {
            return Err(StudioError::validation(
                "owner",
                "Project owner must not be empty",
            ));
        }
        if title.is_empty() {
            return Err(StudioError::validation(
                "title",
                "Project title must not be empty",
            ));
        }

        let db_path = self.db_path.clone();
        let description = params.description.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_project(&owner, &title, description.as_deref())
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let db_path = self.db_path.clone();
        let project_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_project(project_id)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists projects as summaries, optionally filtered by stage and owner.
    pub async fn list_projects_summary(
        &self,
        params: &ListProjects,
    ) -> Result<crate::display::ProjectSummaries> {
        let db_path = self.db_path.clone();
        let filter = ProjectFilter::from(params);

        let projects = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_projects(Some(&filter))
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let summaries: Vec<ProjectSummary> = projects.iter().map(Into::into).collect();
        Ok(crate::display::ProjectSummaries(summaries))
    }

    /// Lists the workflow template catalog.
    pub async fn list_templates(&self) -> Result<Vec<WorkflowTemplate>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_templates()
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Binds a project to a workflow template from the catalog.
    ///
    /// The template must exist; the binding is frozen once the project
    /// leaves Planning.
    pub async fn bind_template(&self, params: &BindTemplate) -> Result<Project> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let template_id = params.template_id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            if db.get_template(template_id)?.is_none() {
                return Err(StudioError::TemplateNotFound { id: template_id });
            }
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            lifecycle::bind_template(&mut project, template_id)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Advances a project's lifecycle stage along the unilateral edges.
    pub async fn advance_stage(&self, params: &AdvanceStage) -> Result<Project> {
        let target: Stage = params
            .stage
            .parse()
            .map_err(|_| StudioError::Validation {
                field: "stage".to_string(),
                reason: format!(
                    "Invalid stage: {}. Must be one of planning, building, testing, \
                     delivered, submitted, changes_requested, published",
                    params.stage
                ),
            })?;

        let db_path = self.db_path.clone();
        let project_id = params.project_id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            lifecycle::advance_stage(&mut project, target)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Requests cover art from the given artist and stores the result.
    ///
    /// Purely advisory: a failed attempt leaves the project untouched and
    /// is reported through the returned [`CoverAttempt`]; it never blocks
    /// any transition. Concurrent attempts are not tracked; the last
    /// completed one wins.
    pub async fn request_cover(
        &self,
        params: &Id,
        artist: &dyn CoverArtist,
    ) -> Result<CoverAttempt> {
        let project = self
            .get_project(params)
            .await?
            .ok_or(StudioError::ProjectNotFound { id: params.id })?;

        let brief = CoverBrief {
            title: project.title.clone(),
            category: project.stage.as_str().to_string(),
            description: project.description.clone().unwrap_or_default(),
        };

        let attempt = match artist.compose(&brief).await {
            Ok(art) => {
                let db_path = self.db_path.clone();
                let project_id = params.id;
                let reference = art.reference.clone();
                task::spawn_blocking(move || {
                    let mut db = Database::new(&db_path)?;
                    let mut project = db
                        .get_project(project_id)?
                        .ok_or(StudioError::ProjectNotFound { id: project_id })?;
                    project.cover = Some(reference);
                    project.touch();
                    db.store_project(&project)
                })
                .await
                .map_err(|e| StudioError::Configuration {
                    message: format!("Task join error: {e}"),
                })??;
                CoverAttempt::Succeeded(art)
            }
            Err(failure) => CoverAttempt::Failed(failure),
        };

        Ok(attempt)
    }
}
