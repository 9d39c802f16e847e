//! Filter types for querying projects.

use super::Stage;

/// Filter options for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Filter by lifecycle stage
    pub stage: Option<Stage>,

    /// Filter by owning learner
    pub owner: Option<String>,
}

impl From<&crate::params::ListProjects> for ProjectFilter {
    /// Convert ListProjects parameters to a ProjectFilter for queries.
    ///
    /// Stage strings are parsed leniently here; an unparsable stage simply
    /// yields an unfiltered listing, since listing is a read-only view.
    fn from(params: &crate::params::ListProjects) -> Self {
        Self {
            stage: params
                .stage
                .as_deref()
                .and_then(|s| s.parse::<Stage>().ok()),
            owner: params.owner.clone(),
        }
    }
}
