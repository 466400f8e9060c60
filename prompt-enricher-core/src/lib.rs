//! Core domain models for the prompt enricher MCP server
//!
//! This crate contains the wire-level types exchanged with the
//! `enrich_prompt` tool and the classification of the caller's workspace
//! into a project type.

pub mod enrichment;
pub mod error;
pub mod workspace;

pub use error::{Error, Result};
