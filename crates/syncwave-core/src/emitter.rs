use serde::{Deserialize, Serialize};

/// One `[emitter.<id>]` entry as written in the manifest.
///
/// All fields default to empty; an emitter with no topics and no ordering
/// edges is a root that only runs when explicitly requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmitterDecl {
    /// Topics this emitter responds to.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Emitters that must complete before this one may run.
    #[serde(default, rename = "syncs-after")]
    pub syncs_after: Vec<String>,

    /// Emitters whose completion always causes this one to run. Implies
    /// the same ordering as `syncs-after`.
    #[serde(default, rename = "triggered-by")]
    pub triggered_by: Vec<String>,
}

/// A flattened emitter declaration: the manifest entry joined with its id.
///
/// This is the unit the resolver consumes; the manifest layer produces one
/// per emitter after fragment merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub id: String,
    pub topics: Vec<String>,
    pub syncs_after: Vec<String>,
    pub triggered_by: Vec<String>,
}

impl Declaration {
    pub fn new(id: impl Into<String>, decl: EmitterDecl) -> Self {
        Self {
            id: id.into(),
            topics: decl.topics,
            syncs_after: decl.syncs_after,
            triggered_by: decl.triggered_by,
        }
    }
}
