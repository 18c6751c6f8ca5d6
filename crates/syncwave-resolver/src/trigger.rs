//! Trigger closure computation: forward reachability over `triggers`
//! edges, answering "what else eventually fires because this emitter
//! fired".

use std::collections::BTreeMap;

use crate::graph::EmitterGraph;

/// Compute, per emitter, the flattened transitive closure of its
/// `triggers` edges: for each direct trigger, that trigger's own closure
/// is emitted first, then the trigger itself, keeping the first
/// occurrence of every id and dropping later duplicates.
///
/// Requires a validated map (the triggers graph must be acyclic).
pub fn calculate_trigger_paths(graph: &EmitterGraph) -> BTreeMap<String, Vec<String>> {
    let mut paths = BTreeMap::new();
    for id in graph.ids() {
        let mut path = Vec::new();
        collect(graph, id, &mut path);
        paths.insert(id.clone(), path);
    }
    paths
}

fn collect(graph: &EmitterGraph, id: &str, out: &mut Vec<String>) {
    let Some(node) = graph.get(id) else {
        return;
    };
    for fired in &node.triggers {
        if !out.contains(fired) {
            collect(graph, fired, out);
            out.push(fired.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncwave_core::emitter::Declaration;

    /// Build declarations from (id, triggered-by) pairs so the reverse
    /// index comes out of the same two-pass build the resolver uses.
    fn paths_of(edges: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        let declarations: Vec<Declaration> = edges
            .iter()
            .map(|(id, triggered_by)| Declaration {
                id: id.to_string(),
                topics: vec![],
                syncs_after: vec![],
                triggered_by: triggered_by.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        calculate_trigger_paths(&EmitterGraph::build(&declarations))
    }

    #[test]
    fn single_trigger_edge() {
        let paths = paths_of(&[("node1", &[]), ("node2", &["node1"])]);
        assert_eq!(paths["node1"], vec!["node2"]);
        assert!(paths["node2"].is_empty());
    }

    #[test]
    fn disconnected_nodes_have_empty_paths() {
        let paths = paths_of(&[("node1", &[]), ("node2", &[])]);
        assert!(paths["node1"].is_empty());
        assert!(paths["node2"].is_empty());
    }

    #[test]
    fn deep_chain_emits_leaves_before_their_trigger() {
        // node1 fires node2 and node3; node2 fires node4 and node5;
        // node3 fires node6; node4 fires node7.
        let paths = paths_of(&[
            ("node1", &[]),
            ("node2", &["node1"]),
            ("node3", &["node1"]),
            ("node4", &["node2"]),
            ("node5", &["node2"]),
            ("node6", &["node3"]),
            ("node7", &["node4"]),
        ]);
        assert_eq!(
            paths["node1"],
            vec!["node7", "node4", "node5", "node2", "node6", "node3"]
        );
        assert_eq!(paths["node2"], vec!["node7", "node4", "node5"]);
        assert_eq!(paths["node3"], vec!["node6"]);
        assert_eq!(paths["node4"], vec!["node7"]);
        assert!(paths["node7"].is_empty());
    }

    #[test]
    fn shared_target_kept_at_first_occurrence() {
        // node4 is fired by both node2 and node3; it must appear once,
        // where it was first reached.
        let paths = paths_of(&[
            ("node1", &[]),
            ("node2", &["node1"]),
            ("node3", &["node1"]),
            ("node4", &["node2", "node3"]),
            ("node5", &["node4"]),
        ]);
        assert_eq!(paths["node1"], vec!["node5", "node4", "node2", "node3"]);
        assert_eq!(paths["node2"], vec!["node5", "node4"]);
        assert_eq!(paths["node3"], vec!["node5", "node4"]);
        assert_eq!(paths["node4"], vec!["node5"]);
    }

    #[test]
    fn cross_edges_preserve_first_seen_order() {
        let paths = paths_of(&[
            ("node1", &[]),
            ("node2", &["node1"]),
            ("node3", &["node1", "node4"]),
            ("node4", &["node1"]),
            ("node5", &["node2", "node3"]),
            ("node6", &["node2", "node4"]),
            ("node7", &["node3", "node5", "node6"]),
        ]);
        assert_eq!(
            paths["node1"],
            vec!["node7", "node5", "node6", "node2", "node3", "node4"]
        );
        assert_eq!(paths["node2"], vec!["node7", "node5", "node6"]);
        assert_eq!(paths["node3"], vec!["node7", "node5"]);
        assert_eq!(paths["node4"], vec!["node7", "node5", "node3", "node6"]);
        assert_eq!(paths["node5"], vec!["node7"]);
        assert_eq!(paths["node6"], vec!["node7"]);
        assert!(paths["node7"].is_empty());
    }
}
