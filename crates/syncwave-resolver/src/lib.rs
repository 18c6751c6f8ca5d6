//! Emitter graph resolution engine: adjacency construction from declared
//! edges, referential and cycle validation, longest-path priority
//! assignment, transitive trigger closures, and topic/group indexing.

pub mod diagnostics;
pub mod graph;
pub mod index;
pub mod priority;
pub mod resolver;
pub mod trigger;
pub mod validate;
