//! Step board and commit ledger operations for the Studio.

use tokio::task;

use super::Studio;
use crate::{
    db::Database,
    engine::{board, ledger},
    error::{Result, StudioError},
    models::{Commit, Project, Step},
    params::{AddStep, MoveStep, PushCommit, RestoreCommit, StepRef},
};

impl Studio {
    /// Appends a new Todo step to the project's board.
    pub async fn add_step(&self, params: &AddStep) -> Result<Step> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let title = params.title.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            let step_id = board::add_step(&mut project, &title)?;
            db.store_project(&project)?;
            // The step was just pushed; fetch it back for the caller.
            let step = project
                .step(step_id)
                .cloned()
                .ok_or(StudioError::StepNotFound { id: step_id })?;
            Ok(step)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a step from the board; recorded snapshots keep it.
    pub async fn remove_step(&self, params: &StepRef) -> Result<Step> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let step_id = params.step_id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            let removed = board::remove_step(&mut project, step_id)?;
            db.store_project(&project)?;
            Ok(removed)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves a step along the legal status edges, attaching evidence when
    /// the target is done.
    pub async fn move_step(&self, params: &MoveStep) -> Result<Project> {
        let target = params.validate()?;

        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let step_id = params.step_id;
        let evidence = params.evidence.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            board::move_step(&mut project, step_id, target, evidence)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a single step from a project's board.
    pub async fn get_step(&self, params: &StepRef) -> Result<Option<Step>> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let step_id = params.step_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            Ok(project.step(step_id).cloned())
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Records a commit of the current step board.
    ///
    /// Evidence attachment and snapshotting are sequenced inside the same
    /// blocking call, so the snapshot always reflects the just-attached
    /// proof.
    pub async fn push_commit(&self, params: &PushCommit) -> Result<Commit> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let message = params.message.clone();
        let related_step_id = params.related_step_id;
        let evidence_link = params.evidence_link.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            let commit_id =
                ledger::push_commit(&mut project, &message, related_step_id, evidence_link)?;
            db.store_project(&project)?;
            let commit = project
                .commit(commit_id)
                .cloned()
                .ok_or(StudioError::CommitNotFound { id: commit_id })?;
            Ok(commit)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Restores the live board from a historical commit.
    pub async fn restore_commit(&self, params: &RestoreCommit) -> Result<Project> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;
        let commit_id = params.commit_id;
        let confirmed = params.confirmed;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            ledger::restore_commit(&mut project, commit_id, confirmed)?;
            db.store_project(&project)?;
            Ok(project)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
