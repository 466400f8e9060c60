//! Wire types for the `enrich_prompt` tool

use crate::workspace::WorkspaceInfo;
use serde::{Deserialize, Serialize};

/// Arguments accepted by the `enrich_prompt` tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichPromptInput {
    pub raw_prompt: String,
    pub workspace_info: WorkspaceInfo,
}

/// Payload of a successful enrichment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedPromptData {
    pub enriched_prompt: String,
}

/// Response envelope returned by the `enrich_prompt` tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichPromptOutput {
    pub data: EnrichedPromptData,
}

impl EnrichPromptInput {
    /// Parse raw tool arguments into a typed input.
    ///
    /// Shape mismatches (missing `raw_prompt`, missing or malformed
    /// `workspace_info`) surface as validation errors carrying the
    /// underlying parse failure.
    pub fn from_arguments(arguments: serde_json::Value) -> crate::Result<Self> {
        serde_json::from_value(arguments).map_err(|e| crate::Error::validation(e.to_string()))
    }
}

impl EnrichPromptOutput {
    /// Wrap an enriched prompt in the response envelope
    pub fn new<S: Into<String>>(enriched_prompt: S) -> Self {
        Self {
            data: EnrichedPromptData {
                enriched_prompt: enriched_prompt.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_deserialization() {
        let input: EnrichPromptInput = serde_json::from_value(json!({
            "raw_prompt": "Build a login form",
            "workspace_info": {
                "file_counts": {},
                "project_type": "frontend",
                "original_heuristic": "x"
            }
        }))
        .unwrap();
        assert_eq!(input.raw_prompt, "Build a login form");
        assert_eq!(input.workspace_info.project_type, "frontend");
    }

    #[test]
    fn test_input_rejects_missing_raw_prompt() {
        let result = serde_json::from_value::<EnrichPromptInput>(json!({
            "workspace_info": {
                "file_counts": {},
                "project_type": "frontend",
                "original_heuristic": "x"
            }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_input_rejects_malformed_workspace_info() {
        let result = serde_json::from_value::<EnrichPromptInput>(json!({
            "raw_prompt": "p",
            "workspace_info": "not an object"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_arguments_maps_parse_failures_to_validation() {
        let err = EnrichPromptInput::from_arguments(json!({})).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("raw_prompt"));
    }

    #[test]
    fn test_output_envelope_shape() {
        let output = EnrichPromptOutput::new("enriched");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value, json!({"data": {"enriched_prompt": "enriched"}}));
    }
}
