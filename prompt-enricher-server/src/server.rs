//! HTTP server bootstrap

use crate::{config::Config, handlers, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// HTTP server instance
pub struct HttpServer {
    config: Config,
}

impl HttpServer {
    /// Create a new server from configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the application router
    pub fn build_router() -> Router {
        Router::new()
            .route("/manifest", get(handlers::get_manifest))
            .route("/execute_tool", post(handlers::execute_tool))
            .route("/access_resource", get(handlers::access_resource))
            .route("/health", get(handlers::health))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> Result<()> {
        let app = Self::build_router();
        let addr = self.config.server_addr();

        info!("Prompt enricher MCP server starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Wait for ctrl-c or SIGTERM
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        info!("Shutdown signal received");
    }
}
