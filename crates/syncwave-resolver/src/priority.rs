//! Longest-path priority assignment over the validated ordering graph.

use std::collections::BTreeMap;

use crate::graph::EmitterGraph;

/// Assign every emitter a 1-based priority: roots get 1, every other
/// emitter gets one more than the highest priority among its ordering
/// predecessors. Emitters sharing a priority have no ordering
/// relationship and may run concurrently.
///
/// Requires a validated (acyclic, referentially closed) map; memoization
/// keeps the recursion linear even on diamond-shaped graphs.
pub fn calculate_priorities(graph: &EmitterGraph) -> BTreeMap<String, u32> {
    let mut priorities = BTreeMap::new();
    for id in graph.ids() {
        if !priorities.contains_key(id) {
            visit(graph, id, &mut priorities);
        }
    }
    priorities
}

fn visit(graph: &EmitterGraph, id: &str, priorities: &mut BTreeMap<String, u32>) {
    if priorities.contains_key(id) {
        return;
    }
    let Some(node) = graph.get(id) else {
        return;
    };
    let mut max = 0;
    for pred in &node.syncs_after {
        visit(graph, pred, priorities);
        if let Some(&p) = priorities.get(pred.as_str()) {
            max = max.max(p);
        }
    }
    priorities.insert(id.to_string(), max + 1);
}
