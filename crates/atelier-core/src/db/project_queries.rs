//! Whole-document CRUD for project records.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, StudioError},
    models::{Project, ProjectFilter},
};

// SQL as const strings for compile-time optimization
const NEXT_PROJECT_ID_SQL: &str = "SELECT COALESCE(MAX(id), 0) + 1 FROM projects";
const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (id, owner, stage, created_at, updated_at, document) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_DOCUMENT_SQL: &str = "SELECT document FROM projects WHERE id = ?1";
const REPLACE_DOCUMENT_SQL: &str =
    "UPDATE projects SET stage = ?1, updated_at = ?2, document = ?3 WHERE id = ?4";
const SELECT_ALL_DOCUMENTS_SQL: &str = "SELECT document FROM projects ORDER BY id";

impl super::Database {
    /// Creates a new project record and returns the stored model.
    ///
    /// The id is allocated inside the transaction so concurrent processes
    /// on the same file cannot hand out duplicates.
    pub fn create_project(
        &mut self,
        owner: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id: i64 = tx
            .query_row(NEXT_PROJECT_ID_SQL, [], |row| row.get(0))
            .map_err(|e| StudioError::database("Failed to allocate project id", e))?;

        let mut project = Project::new(id as u64, owner, title);
        project.description = description.map(String::from);

        let document = serde_json::to_string(&project)?;
        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                id,
                &project.owner,
                project.stage.as_str(),
                project.created_at.to_string(),
                project.updated_at.to_string(),
                &document,
            ],
        )
        .map_err(|e| StudioError::database("Failed to insert project", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(project)
    }

    /// Retrieves a project document by id.
    pub fn get_project(&self, project_id: u64) -> Result<Option<Project>> {
        let document: Option<String> = self
            .connection
            .query_row(SELECT_DOCUMENT_SQL, params![project_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StudioError::database("Failed to get project", e))?;

        match document {
            Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            None => Ok(None),
        }
    }

    /// Replaces a project's stored document whole.
    ///
    /// The denormalized stage/updated_at columns are kept in sync in the
    /// same statement; there is no partial-field update path.
    pub fn store_project(&mut self, project: &Project) -> Result<()> {
        let document = serde_json::to_string(project)?;

        let updated = self
            .connection
            .execute(
                REPLACE_DOCUMENT_SQL,
                params![
                    project.stage.as_str(),
                    Timestamp::now().to_string(),
                    &document,
                    project.id as i64,
                ],
            )
            .map_err(|e| StudioError::database("Failed to store project", e))?;

        if updated == 0 {
            return Err(StudioError::ProjectNotFound { id: project.id });
        }

        Ok(())
    }

    /// Lists all project documents, optionally filtered by stage and owner.
    ///
    /// Filtering happens after parsing: listings are small and the
    /// document is authoritative, so there is no point duplicating filter
    /// logic in SQL against the denormalized columns.
    pub fn list_projects(&self, filter: Option<&ProjectFilter>) -> Result<Vec<Project>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_DOCUMENTS_SQL)
            .map_err(|e| StudioError::database("Failed to prepare query", e))?;

        let documents = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StudioError::database("Failed to query projects", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| StudioError::database("Failed to fetch projects", e))?;

        let mut projects = Vec::with_capacity(documents.len());
        for doc in &documents {
            let project: Project = serde_json::from_str(doc)?;
            if let Some(filter) = filter {
                if let Some(stage) = filter.stage {
                    if project.stage != stage {
                        continue;
                    }
                }
                if let Some(owner) = &filter.owner {
                    if &project.owner != owner {
                        continue;
                    }
                }
            }
            projects.push(project);
        }

        Ok(projects)
    }
}
