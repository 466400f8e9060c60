//! HTTP handlers for the MCP endpoints

use crate::{manifest, Error, Result};
use axum::{extract::Query, Json};
use prompt_enricher_core::enrichment::{EnrichPromptInput, EnrichPromptOutput};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Tool execution request body
#[derive(Debug, Deserialize)]
pub struct ExecuteToolRequest {
    pub tool_name: String,
    pub arguments: Value,
}

/// Query parameters for resource access
#[derive(Debug, Deserialize)]
pub struct AccessResourceQuery {
    pub uri: String,
}

/// Payload backing the `mcp://status` resource
#[derive(Debug, Serialize)]
struct StatusResource {
    status: &'static str,
    version: &'static str,
}

/// Serve the MCP manifest
pub async fn get_manifest() -> Json<manifest::McpManifest> {
    Json(manifest::manifest())
}

/// Execute a named tool with structured arguments
pub async fn execute_tool(
    Json(request): Json<ExecuteToolRequest>,
) -> Result<Json<EnrichPromptOutput>> {
    if request.tool_name != manifest::ENRICH_PROMPT_TOOL {
        return Err(Error::NotFound(format!(
            "Tool '{}' not found.",
            request.tool_name
        )));
    }

    let input = EnrichPromptInput::from_arguments(request.arguments).map_err(|e| {
        Error::BadRequest(format!(
            "Error processing tool '{}' (enrich_prompt): {}",
            request.tool_name, e
        ))
    })?;

    debug!(tool = manifest::ENRICH_PROMPT_TOOL, "executing tool");
    Ok(Json(prompt_enricher_prompts::enrich_input(&input)))
}

/// Access a named resource by URI
pub async fn access_resource(Query(query): Query<AccessResourceQuery>) -> Result<Json<Value>> {
    match query.uri.as_str() {
        manifest::STATUS_RESOURCE_URI => {
            debug!(uri = %query.uri, "serving resource");
            let payload = serde_json::to_value(StatusResource {
                status: "running",
                version: manifest::SERVER_VERSION,
            })?;
            Ok(Json(payload))
        }
        _ => Err(Error::NotFound(format!(
            "Resource with URI '{}' not found.",
            query.uri
        ))),
    }
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_enricher_prompts::templates;

    fn enrich_request(project_type: &str) -> ExecuteToolRequest {
        ExecuteToolRequest {
            tool_name: "enrich_prompt".to_string(),
            arguments: json!({
                "raw_prompt": "Build a login form",
                "workspace_info": {
                    "file_counts": {},
                    "project_type": project_type,
                    "original_heuristic": "x"
                }
            }),
        }
    }

    #[tokio::test]
    async fn test_execute_known_tool() {
        let Json(output) = execute_tool(Json(enrich_request("frontend"))).await.unwrap();
        assert!(output.data.enriched_prompt.starts_with("Build a login form"));
        assert!(output
            .data
            .enriched_prompt
            .ends_with(templates::FRONTEND_SUFFIX));
    }

    #[tokio::test]
    async fn test_execute_unknown_tool_is_not_found() {
        let request = ExecuteToolRequest {
            tool_name: "unknown_tool".to_string(),
            arguments: json!({}),
        };
        let err = execute_tool(Json(request)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("unknown_tool"));
    }

    #[tokio::test]
    async fn test_execute_tool_with_bad_arguments_is_bad_request() {
        let request = ExecuteToolRequest {
            tool_name: "enrich_prompt".to_string(),
            arguments: json!({}),
        };
        let err = execute_tool(Json(request)).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert!(err
            .to_string()
            .contains("Error processing tool 'enrich_prompt'"));
    }

    #[tokio::test]
    async fn test_status_resource() {
        let Json(payload) = access_resource(Query(AccessResourceQuery {
            uri: "mcp://status".to_string(),
        }))
        .await
        .unwrap();
        assert_eq!(payload, json!({"status": "running", "version": "1.0.0"}));
    }

    #[tokio::test]
    async fn test_unknown_resource_is_not_found() {
        let err = access_resource(Query(AccessResourceQuery {
            uri: "mcp://bogus".to_string(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("mcp://bogus"));
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let Json(payload) = health().await;
        assert_eq!(payload, json!({"status": "ok"}));
    }
}
