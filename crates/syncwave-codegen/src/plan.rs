//! `plan.json` serialization of a resolution result.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use syncwave_resolver::resolver::ResolutionResult;
use syncwave_util::errors::SyncwaveError;
use syncwave_util::hash::write_if_changed;

/// The serialized plan consumed by downstream execution code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub emitters: Vec<PlanEmitter>,
    /// Topic name to emitter ids, synthetic entries included.
    pub topics: BTreeMap<String, Vec<String>>,
    /// Group name to emitter ids.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Emitters with no declared topics.
    pub untagged: Vec<String>,
    /// Emitter ids grouped by priority level, ascending. Each wave may
    /// run concurrently once every earlier wave has completed.
    pub waves: Vec<Vec<String>>,
}

/// One emitter row in the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEmitter {
    pub id: String,
    pub priority: u32,
    pub topics: Vec<String>,
    #[serde(rename = "syncs-after")]
    pub syncs_after: Vec<String>,
    /// Emitters that fire because this one fired (full closure).
    pub triggers: Vec<String>,
}

/// Assemble the serializable plan from a resolution result.
pub fn build_plan(result: &ResolutionResult) -> Plan {
    let emitters = result
        .graph
        .nodes()
        .map(|node| PlanEmitter {
            id: node.id.clone(),
            priority: result.priorities.get(&node.id).copied().unwrap_or(1),
            topics: node.topics.clone(),
            syncs_after: node.syncs_after.clone(),
            triggers: result
                .trigger_paths
                .get(&node.id)
                .cloned()
                .unwrap_or_default(),
        })
        .collect();

    Plan {
        emitters,
        topics: result.index.topics.clone(),
        groups: result.index.groups.clone(),
        untagged: result.index.untagged.clone(),
        waves: result.waves(),
    }
}

/// Serialize the plan to `path`, rewriting only when the content changed.
/// Returns `true` if the file was written.
pub fn write_plan(result: &ResolutionResult, path: &Path) -> miette::Result<bool> {
    let plan = build_plan(result);
    let json = serde_json::to_string_pretty(&plan).map_err(|e| SyncwaveError::Codegen {
        message: format!("Failed to serialize plan: {e}"),
    })?;
    write_if_changed(path, &format!("{json}\n")).map_err(|e| {
        SyncwaveError::Codegen {
            message: format!("Failed to write {}: {e}", path.display()),
        }
        .into()
    })
}
