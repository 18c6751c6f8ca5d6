//! Core data types for the syncwave planner.
//!
//! This crate defines the types that represent a syncwave project:
//! emitter declarations, manifest parsing, plan configuration (synthetic
//! topics and groups), and fragment merging.
//!
//! This crate is intentionally free of graph algorithms; it only models
//! and loads the declaration snapshot the resolver consumes.

/// Name of the manifest file that marks a syncwave project root.
pub const MANIFEST_FILE: &str = "Syncwave.toml";

pub mod emitter;
pub mod manifest;
pub mod project;
