//! Pure prompt enrichment logic
//!
//! # Examples
//!
//! ```rust
//! use prompt_enricher_core::workspace::ProjectType;
//! use prompt_enricher_prompts::enrich;
//!
//! let enriched = enrich("Build a login form", ProjectType::Frontend);
//! assert!(enriched.starts_with("Build a login form"));
//! ```

use crate::templates;
use prompt_enricher_core::enrichment::{EnrichPromptInput, EnrichPromptOutput};
use prompt_enricher_core::workspace::ProjectType;
use tracing::debug;

/// Enrich a raw prompt with the instructional suffix for its project type.
///
/// Total over all string inputs. Unknown project types discard the prompt
/// and yield an empty string.
pub fn enrich(raw_prompt: &str, project_type: ProjectType) -> String {
    match templates::suffix_for(project_type) {
        Some(suffix) => format!("{} {}", raw_prompt, suffix),
        None => String::new(),
    }
}

/// Enrich a typed tool input and wrap the result in the response envelope
pub fn enrich_input(input: &EnrichPromptInput) -> EnrichPromptOutput {
    let project_type = input.workspace_info.classify();
    debug!(%project_type, "enriching prompt");
    EnrichPromptOutput::new(enrich(&input.raw_prompt, project_type))
}
