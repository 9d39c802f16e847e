//! Workflow template catalog entries.

use serde::{Deserialize, Serialize};

/// A named, externally defined set of phases a project can bind to while
/// planning.
///
/// The engine treats templates as opaque selectable options: it needs the
/// id for binding and the name/description/phases for display, and never
/// interprets phase contents beyond that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowTemplate {
    /// Catalog identifier
    pub id: u64,

    /// Template name
    pub name: String,

    /// Short description of the workflow
    pub description: String,

    /// Ordered phase names
    pub phases: Vec<String>,
}
