//! Prompt Enricher MCP Server
//!
//! HTTP service exposing a manifest, a prompt enrichment tool, a status
//! resource, and a health probe.

use clap::Parser;
use prompt_enricher_server::{config::Config, server::HttpServer, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prompt Enricher MCP Server
#[derive(Parser)]
#[command(name = "prompt-enricher")]
#[command(about = "MCP server for enriching prompts based on project context")]
#[command(version)]
struct Cli {
    /// Override server host
    #[arg(long)]
    host: Option<String>,

    /// Override server port
    #[arg(long)]
    port: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_enricher_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prompt Enricher MCP Server");

    let mut config = if let Some(ref config_path) = cli.config {
        Config::load_from_file(config_path).map_err(|e| {
            error!("Failed to load configuration from {}: {}", config_path, e);
            e
        })?
    } else {
        Config::load().map_err(|e| {
            error!("Failed to load configuration: {}", e);
            e
        })?
    };

    apply_cli_overrides(&mut config, &cli);

    info!("Configuration loaded successfully");

    let server = HttpServer::new(config);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("Prompt Enricher MCP Server shut down gracefully");
    Ok(())
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
}
