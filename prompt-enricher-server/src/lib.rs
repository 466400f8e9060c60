//! HTTP server application for the prompt enricher MCP service
//!
//! This crate wires the prompt enricher into an axum application:
//! configuration, the MCP manifest, the request dispatcher handlers, and
//! the server bootstrap.

pub mod config;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod server;


pub use error::{Error, Result};

/// Re-export domain crates for convenience
pub use prompt_enricher_core as core;
pub use prompt_enricher_prompts as prompts;
