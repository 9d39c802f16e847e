//! Review gate operations for the Studio.

use tokio::task;

use super::Studio;
use crate::{
    db::Database,
    engine::review,
    error::{Result, StudioError},
    models::Project,
    params::{Approve, Reject, SubmitForReview},
};

impl Studio {
    /// Submits a delivered project for instructor review.
    ///
    /// Raises the soft [`StudioError::IncompleteWork`] when steps remain
    /// unfinished and the override flag is not set.
    pub async fn submit_for_review(&self, params: &SubmitForReview) -> Result<Project> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let acknowledge_incomplete = params.acknowledge_incomplete;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            review::submit_for_review(&mut project, acknowledge_incomplete)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Approves a submitted project and publishes it.
    pub async fn approve(&self, params: &Approve) -> Result<Project> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let feedback = params.feedback.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            review::approve(&mut project, feedback)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Rejects a submitted project, requesting changes.
    pub async fn reject(&self, params: &Reject) -> Result<Project> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let feedback = params.feedback.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            review::reject(&mut project, &feedback)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
