//! Static instructional suffixes appended during enrichment

use prompt_enricher_core::workspace::ProjectType;

/// Suffix appended to prompts from frontend projects
pub const FRONTEND_SUFFIX: &str =
    "Important: Consider modern frontend frameworks and responsive design principles.";

/// Suffix appended to prompts from backend API and database projects.
/// Both categories intentionally share the same text.
pub const BACKEND_DATABASE_SUFFIX: &str =
    "Important: Focus on scalability, security, and database interactions.";

/// Look up the instructional suffix for a project type.
///
/// Returns `None` for unknown project types, which carry no suffix.
pub fn suffix_for(project_type: ProjectType) -> Option<&'static str> {
    match project_type {
        ProjectType::Frontend => Some(FRONTEND_SUFFIX),
        ProjectType::BackendApi | ProjectType::Database => Some(BACKEND_DATABASE_SUFFIX),
        ProjectType::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_have_suffixes() {
        assert_eq!(suffix_for(ProjectType::Frontend), Some(FRONTEND_SUFFIX));
        assert_eq!(
            suffix_for(ProjectType::BackendApi),
            Some(BACKEND_DATABASE_SUFFIX)
        );
        assert_eq!(
            suffix_for(ProjectType::Database),
            Some(BACKEND_DATABASE_SUFFIX)
        );
    }

    #[test]
    fn test_backend_and_database_share_identical_suffix() {
        assert_eq!(
            suffix_for(ProjectType::BackendApi),
            suffix_for(ProjectType::Database)
        );
    }

    #[test]
    fn test_unknown_category_has_no_suffix() {
        assert_eq!(suffix_for(ProjectType::Unknown), None);
    }
}
