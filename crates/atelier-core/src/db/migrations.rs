//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, StudioError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL (idempotent: CREATE IF NOT EXISTS plus
        // INSERT OR IGNORE for the template catalog seed)
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if the stage column exists on projects (pre-stage databases
        // stored it only inside the document)
        let has_stage_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('projects') WHERE name = 'stage'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_stage_column {
            self.connection
                .execute(
                    "ALTER TABLE projects ADD COLUMN stage TEXT NOT NULL DEFAULT 'planning'",
                    [],
                )
                .map_err(|e| {
                    StudioError::database("Failed to add stage column to projects table", e)
                })?;
        }

        Ok(())
    }
}
