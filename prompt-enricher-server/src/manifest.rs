//! MCP manifest for the prompt enricher server
//!
//! The manifest is static process-wide data: one tool, one resource,
//! and the server identity. It must stay consistent with what the
//! dispatcher in [`crate::handlers`] actually accepts.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Server name advertised in the manifest
pub const SERVER_NAME: &str = "prompt_enricher_mcp_server";

/// Server version advertised in the manifest and the status resource
pub const SERVER_VERSION: &str = "1.0.0";

/// Server description advertised in the manifest
pub const SERVER_DESCRIPTION: &str = "MCP Server for enriching prompts based on project context.";

/// MCP protocol version spoken by this server
pub const MCP_VERSION: &str = "1.0";

/// Name of the single tool this server exposes
pub const ENRICH_PROMPT_TOOL: &str = "enrich_prompt";

/// URI of the single resource this server exposes
pub const STATUS_RESOURCE_URI: &str = "mcp://status";

/// A single named parameter in a tool's input schema
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct McpToolParameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
}

/// Description of an invocable tool
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct McpToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: BTreeMap<String, McpToolParameter>,
    pub output_schema: Value,
}

/// Description of a URI-addressed resource
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct McpResourceDefinition {
    pub uri_pattern: String,
    pub description: String,
}

/// Self-description of the server's callable surface
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct McpManifest {
    pub mcp_version: String,
    pub server_name: String,
    pub server_version: String,
    pub description: String,
    pub tools: Vec<McpToolDefinition>,
    pub resources: Vec<McpResourceDefinition>,
}

/// Build the manifest. Deterministic: repeated calls return structurally
/// identical output.
pub fn manifest() -> McpManifest {
    let mut input_schema = BTreeMap::new();
    input_schema.insert(
        "raw_prompt".to_string(),
        McpToolParameter {
            name: "raw_prompt".to_string(),
            description: "The initial prompt text.".to_string(),
            param_type: "string".to_string(),
            required: true,
        },
    );
    input_schema.insert(
        "workspace_info".to_string(),
        McpToolParameter {
            name: "workspace_info".to_string(),
            description: "Information about the workspace/project.".to_string(),
            param_type: "object".to_string(),
            required: true,
        },
    );

    McpManifest {
        mcp_version: MCP_VERSION.to_string(),
        server_name: SERVER_NAME.to_string(),
        server_version: SERVER_VERSION.to_string(),
        description: SERVER_DESCRIPTION.to_string(),
        tools: vec![McpToolDefinition {
            name: ENRICH_PROMPT_TOOL.to_string(),
            description: "Enriches a raw prompt based on workspace information.".to_string(),
            input_schema,
            output_schema: json!({
                "data": {
                    "type": "object",
                    "properties": {
                        "enriched_prompt": {"type": "string"}
                    }
                }
            }),
        }],
        resources: vec![McpResourceDefinition {
            uri_pattern: STATUS_RESOURCE_URI.to_string(),
            description: "Provides the current status of the server.".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_is_deterministic() {
        let first = manifest();
        let second = manifest();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_manifest_lists_one_tool_and_one_resource() {
        let manifest = manifest();
        assert_eq!(manifest.tools.len(), 1);
        assert_eq!(manifest.tools[0].name, ENRICH_PROMPT_TOOL);
        assert_eq!(manifest.resources.len(), 1);
        assert_eq!(manifest.resources[0].uri_pattern, STATUS_RESOURCE_URI);
    }

    #[test]
    fn test_tool_schema_requires_both_parameters() {
        let manifest = manifest();
        let schema = &manifest.tools[0].input_schema;
        assert!(schema["raw_prompt"].required);
        assert!(schema["workspace_info"].required);
        assert_eq!(schema["raw_prompt"].param_type, "string");
        assert_eq!(schema["workspace_info"].param_type, "object");
    }

    #[test]
    fn test_manifest_serializes_identity() {
        let value = serde_json::to_value(manifest()).unwrap();
        assert_eq!(value["mcp_version"], MCP_VERSION);
        assert_eq!(value["server_name"], SERVER_NAME);
        assert_eq!(value["server_version"], SERVER_VERSION);
        assert_eq!(value["tools"][0]["input_schema"]["raw_prompt"]["type"], "string");
    }
}
