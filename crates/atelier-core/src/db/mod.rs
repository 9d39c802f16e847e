//! Database operations and SQLite management for project documents.
//!
//! This module provides the persistence collaborator for the workflow
//! engine. Projects are stored as whole JSON documents with
//! read-modify-write semantics: the full document is the unit of both read
//! and write, inside one transaction, so the step board and the commit
//! ledger can never be torn apart by a partial update. The workflow
//! template catalog is a seeded, read-only table.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod project_queries;
pub mod template_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
