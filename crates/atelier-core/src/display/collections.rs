//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers provide Display implementations for collections with
//! consistent structure and graceful empty-collection handling.

use std::{fmt, ops::Index};

use crate::models::{Commit, ProjectSummary, Step};

/// Newtype wrapper for displaying collections of project summaries.
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of project summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the project summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ProjectSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the project summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectSummaries {
    type Item = ProjectSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No projects found.")
        } else {
            for project in &self.0 {
                write!(f, "{project}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of steps.
pub struct Steps(pub Vec<Step>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the step at the given index.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.0.get(index)
    }

    /// Get an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }
}

impl Index<usize> for Steps {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Steps {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in &self.0 {
                write!(f, "{step}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the commit ledger.
///
/// Storage order is chronological; history views read newest-first, which
/// is a presentation concern, so this wrapper renders in reverse.
pub struct Commits(pub Vec<Commit>);

impl Commits {
    /// Check if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of commits in the ledger.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the commits in storage (chronological) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Commit> {
        self.0.iter()
    }
}

impl fmt::Display for Commits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No commits recorded.")
        } else {
            for commit in self.0.iter().rev() {
                write!(f, "{commit}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Project, StepStatus};

    fn create_test_summary() -> ProjectSummary {
        let mut project = Project::new(1, "ada", "Test Project");
        project.description = Some("A test project".to_string());
        ProjectSummary::from(&project)
    }

    fn create_test_step() -> Step {
        Step::new(1, "Test Step", Timestamp::from_second(1640995200).unwrap())
    }

    fn create_test_commit(id: u64, message: &str) -> Commit {
        Commit {
            id,
            message: message.to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            snapshot: vec![create_test_step()],
            related_step_id: None,
            evidence_link: None,
        }
    }

    #[test]
    fn test_project_summaries_display() {
        let summaries = ProjectSummaries(vec![create_test_summary()]);
        let output = format!("{summaries}");
        assert!(output.contains("Test Project"));
        assert!(output.contains("ID: 1"));

        let empty = ProjectSummaries(vec![]);
        assert_eq!(format!("{empty}"), "No projects found.\n");
    }

    #[test]
    fn test_steps_display() {
        let steps = Steps(vec![create_test_step()]);
        let output = format!("{steps}");
        assert!(output.contains("Test Step"));
        assert!(output.contains("○ Todo"));

        let empty = Steps(vec![]);
        assert_eq!(format!("{empty}"), "No steps found.\n");
    }

    #[test]
    fn test_steps_display_with_done_status() {
        let mut step = create_test_step();
        step.status = StepStatus::Done;
        step.proof = Some("img.png".to_string());

        let output = format!("{}", Steps(vec![step]));
        assert!(output.contains("✓ Done"));
        assert!(output.contains("img.png"));
    }

    #[test]
    fn test_commits_display_reverse_chronological() {
        let commits = Commits(vec![
            create_test_commit(1, "First checkpoint"),
            create_test_commit(2, "Second checkpoint"),
        ]);
        let output = format!("{commits}");

        let first = output.find("First checkpoint").unwrap();
        let second = output.find("Second checkpoint").unwrap();
        assert!(second < first, "newest commit should render first");

        let empty = Commits(vec![]);
        assert_eq!(format!("{empty}"), "No commits recorded.\n");
    }
}
