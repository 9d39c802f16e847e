//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create and
//! update operations with consistent messaging and resource display.

use std::fmt;

use crate::models::{Commit, Project, Step};

/// Wrapper type for displaying the result of create operations.
///
/// Formats creation results with a success message carrying the resource
/// type and ID, followed by the full details of the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created project with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created step with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Commit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recorded commit with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the
/// update, giving users clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated project {}", self.resource.id)?;
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step {}", self.resource.id)?;
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn test_create_result_display() {
        let project = Project::new(7, "ada", "New Project");
        let result = CreateResult::new(project);
        let output = format!("{result}");
        assert!(output.contains("Created project with ID: 7"));
        assert!(output.contains("New Project"));
    }

    #[test]
    fn test_update_result_with_changes() {
        let project = Project::new(3, "ada", "Some Project");
        let result = UpdateResult::with_changes(
            project,
            vec!["Advanced stage to building".to_string()],
        );
        let output = format!("{result}");
        assert!(output.contains("Changes made:"));
        assert!(output.contains("Advanced stage to building"));
    }
}
