//! Workspace description model and project classification
//!
//! Callers of the `enrich_prompt` tool describe their codebase with a
//! [`WorkspaceInfo`] record. The `project_type` tag stays a free-form
//! string on the wire; [`ProjectType`] is the typed classification the
//! enricher works with.
//!
//! # Examples
//!
//! ```rust
//! use prompt_enricher_core::workspace::ProjectType;
//!
//! assert_eq!(ProjectType::parse("frontend"), ProjectType::Frontend);
//! assert_eq!(ProjectType::parse("embedded"), ProjectType::Unknown);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Coarse classification of the caller's codebase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Frontend,
    BackendApi,
    Database,
    /// Any tag outside the known set, including the empty string
    Unknown,
}

impl ProjectType {
    /// Parse a project type tag. Unrecognized tags are a valid input and
    /// map to [`ProjectType::Unknown`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "frontend" => ProjectType::Frontend,
            "backend-api" => ProjectType::BackendApi,
            "database" => ProjectType::Database,
            _ => ProjectType::Unknown,
        }
    }

    /// Check whether the tag belongs to the known category set
    pub fn is_known(&self) -> bool {
        !matches!(self, ProjectType::Unknown)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ProjectType::Frontend => "frontend",
            ProjectType::BackendApi => "backend-api",
            ProjectType::Database => "database",
            ProjectType::Unknown => "unknown",
        };
        write!(f, "{}", tag)
    }
}

/// Describes the workspace a prompt originates from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceInfo {
    /// File counts per extension or category, as reported by the caller
    pub file_counts: HashMap<String, u64>,
    /// Free-form project type tag; see [`ProjectType::parse`]
    pub project_type: String,
    /// The heuristic the caller used to derive the tag
    pub original_heuristic: String,
}

impl WorkspaceInfo {
    /// Classify the workspace by its project type tag
    pub fn classify(&self) -> ProjectType {
        ProjectType::parse(&self.project_type)
    }
}
