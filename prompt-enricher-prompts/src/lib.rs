//! Prompt enrichment for the prompt enricher MCP server
//!
//! This crate provides the category suffix templates and the pure
//! enrichment function that appends them to raw prompts.

pub mod enricher;
pub mod templates;

pub use enricher::{enrich, enrich_input};

/// Re-export core types for convenience
pub use prompt_enricher_core as core;
