//! Read-only queries over the workflow template catalog.

use rusqlite::OptionalExtension;

use crate::{
    error::{Result, StudioError},
    models::WorkflowTemplate,
};

const SELECT_TEMPLATES_SQL: &str =
    "SELECT id, name, description, phases FROM workflow_templates ORDER BY id";
const SELECT_TEMPLATE_BY_ID_SQL: &str =
    "SELECT id, name, description, phases FROM workflow_templates WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a WorkflowTemplate from a database row
    fn build_template_from_row(row: &rusqlite::Row) -> rusqlite::Result<WorkflowTemplate> {
        let phases_json: String = row.get(3)?;
        let phases: Vec<String> = serde_json::from_str(&phases_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(WorkflowTemplate {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            description: row.get(2)?,
            phases,
        })
    }

    /// Lists every template in the catalog.
    pub fn list_templates(&self) -> Result<Vec<WorkflowTemplate>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TEMPLATES_SQL)
            .map_err(|e| StudioError::database("Failed to prepare query", e))?;

        let templates = stmt
            .query_map([], Self::build_template_from_row)
            .map_err(|e| StudioError::database("Failed to query templates", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| StudioError::database("Failed to fetch templates", e))?;

        Ok(templates)
    }

    /// Retrieves a single template by its catalog id.
    pub fn get_template(&self, template_id: u64) -> Result<Option<WorkflowTemplate>> {
        let template = self
            .connection
            .query_row(
                SELECT_TEMPLATE_BY_ID_SQL,
                rusqlite::params![template_id as i64],
                Self::build_template_from_row,
            )
            .optional()
            .map_err(|e| StudioError::database("Failed to get template", e))?;

        Ok(template)
    }
}
