//! Referential and cycle validation over the built adjacency map.
//!
//! Two checks, both threaded through an explicit [`Diagnostics`]
//! collector: dangling references fail the run before cycle detection
//! starts (cycle traversal assumes every referenced id resolves), and
//! cycle detection then runs from every node along both edge relations
//! separately, carrying the current path for the diagnostic.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostics, EdgeKind, Issue};
use crate::graph::{EmitterGraph, Node};

/// Validate the adjacency map, recording every finding in `diagnostics`.
///
/// When any dangling reference exists, cycle detection is skipped — the
/// collector then holds only referential issues. A clean run leaves the
/// collector empty.
pub fn validate(graph: &EmitterGraph, diagnostics: &mut Diagnostics) {
    check_references(graph, diagnostics);
    if !diagnostics.is_empty() {
        return;
    }
    check_cycles(graph, EdgeKind::SyncsAfter, diagnostics);
    check_cycles(graph, EdgeKind::Triggers, diagnostics);
}

fn check_references(graph: &EmitterGraph, diagnostics: &mut Diagnostics) {
    for node in graph.nodes() {
        for pred in &node.syncs_after {
            if !graph.contains(pred) {
                diagnostics.add(Issue::DanglingReference {
                    emitter: node.id.clone(),
                    reference: pred.clone(),
                    kind: EdgeKind::SyncsAfter,
                });
            }
        }
        for fired in &node.triggers {
            if !graph.contains(fired) {
                diagnostics.add(Issue::DanglingReference {
                    emitter: node.id.clone(),
                    reference: fired.clone(),
                    kind: EdgeKind::Triggers,
                });
            }
        }
    }
}

fn edges_of<'a>(node: &'a Node, kind: EdgeKind) -> &'a [String] {
    match kind {
        EdgeKind::SyncsAfter => &node.syncs_after,
        EdgeKind::Triggers => &node.triggers,
    }
}

/// Depth-first cycle search along one edge relation, started from every
/// node as a potential cycle entry point. A completed-set keeps the scan
/// linear; each distinct cycle is reported once.
fn check_cycles(graph: &EmitterGraph, kind: EdgeKind, diagnostics: &mut Diagnostics) {
    let mut done: HashSet<&str> = HashSet::new();
    for node in graph.nodes() {
        if done.contains(node.id.as_str()) {
            continue;
        }
        let mut path = vec![node.id.as_str()];
        walk(graph, node, kind, &mut path, &mut done, diagnostics);
    }
}

fn walk<'a>(
    graph: &'a EmitterGraph,
    node: &'a Node,
    kind: EdgeKind,
    path: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
    diagnostics: &mut Diagnostics,
) {
    for next in edges_of(node, kind) {
        if path.contains(&next.as_str()) {
            let mut cycle: Vec<String> = path.iter().map(|s| s.to_string()).collect();
            cycle.push(next.clone());
            diagnostics.add(Issue::Cycle { path: cycle, kind });
            continue;
        }
        let Some(next_node) = graph.get(next) else {
            continue;
        };
        if done.contains(next.as_str()) {
            continue;
        }
        path.push(next_node.id.as_str());
        walk(graph, next_node, kind, path, done, diagnostics);
        path.pop();
    }
    done.insert(node.id.as_str());
}
