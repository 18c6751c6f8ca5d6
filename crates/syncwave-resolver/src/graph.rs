//! Emitter adjacency construction and graph queries.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use syncwave_core::emitter::Declaration;

/// A node in the built emitter graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub topics: Vec<String>,
    /// Combined ordering predecessors: declared syncs-after plus declared
    /// triggered-by ids, first occurrence kept.
    pub syncs_after: Vec<String>,
    /// Reverse index: ids of emitters that named this node in their
    /// triggered-by list.
    pub triggers: Vec<String>,
}

impl Node {
    /// `true` if this emitter declares no topics.
    pub fn is_untagged(&self) -> bool {
        self.topics.is_empty()
    }
}

/// The keyed adjacency map, plus a petgraph view of the merged ordering
/// edges for structural queries (roots, successors, wave rendering).
///
/// Built once per resolution run and immutable afterwards. Nodes refer to
/// each other by id only; edges to ids missing from the map are kept in
/// the node edge lists (the validator reports them) but are not added to
/// the petgraph view.
#[derive(Debug)]
pub struct EmitterGraph {
    nodes: BTreeMap<String, Node>,
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl EmitterGraph {
    /// Build the adjacency map from a declaration snapshot.
    ///
    /// Two passes: the first scans every declaration's triggered-by list
    /// to compute the reverse `triggers` index; the second constructs the
    /// node records with `syncs_after` as the union of both declared edge
    /// kinds. Purely structural — no errors are raised here.
    pub fn build(declarations: &[Declaration]) -> Self {
        let mut triggers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for decl in declarations {
            for trigger in &decl.triggered_by {
                let fired = triggers.entry(trigger.clone()).or_default();
                if !fired.contains(&decl.id) {
                    fired.push(decl.id.clone());
                }
            }
        }

        let mut nodes = BTreeMap::new();
        for decl in declarations {
            let mut syncs_after = Vec::new();
            for pred in decl.syncs_after.iter().chain(&decl.triggered_by) {
                if !syncs_after.contains(pred) {
                    syncs_after.push(pred.clone());
                }
            }
            nodes.insert(
                decl.id.clone(),
                Node {
                    id: decl.id.clone(),
                    topics: decl.topics.clone(),
                    syncs_after,
                    triggers: triggers.remove(&decl.id).unwrap_or_default(),
                },
            );
        }

        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();
        for id in nodes.keys() {
            let idx = graph.add_node(id.clone());
            indices.insert(id.clone(), idx);
        }
        for node in nodes.values() {
            for pred in &node.syncs_after {
                // Edge from predecessor to successor: the graph flows in
                // execution order. Dangling ids are left to the validator.
                if let (Some(&from), Some(&to)) = (indices.get(pred), indices.get(&node.id)) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self {
            nodes,
            graph,
            indices,
        }
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All node ids, ordered.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Ids of emitters with no ordering predecessors.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|n| n.syncs_after.is_empty())
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Ids of emitters that must run strictly after `id` (direct only).
    pub fn successors_of(&self, id: &str) -> Vec<&str> {
        let Some(&idx) = self.indices.get(id) else {
            return Vec::new();
        };
        let mut succs: Vec<&str> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect();
        succs.sort_unstable();
        succs
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render the graph as priority waves, one group per level:
    ///
    /// ```text
    /// wave 1
    /// ├── account [sync.account]
    /// └── config
    /// wave 2
    /// └── colors [sync.colors]
    /// ```
    pub fn render_waves(&self, priorities: &BTreeMap<String, u32>) -> String {
        let mut output = String::new();
        let max = priorities.values().copied().max().unwrap_or(0);

        for wave in 1..=max {
            let members: Vec<&Node> = self
                .nodes
                .values()
                .filter(|n| priorities.get(&n.id) == Some(&wave))
                .collect();
            if members.is_empty() {
                continue;
            }
            output.push_str(&format!("wave {wave}\n"));
            let count = members.len();
            for (i, node) in members.iter().enumerate() {
                let connector = if i == count - 1 { "└── " } else { "├── " };
                if node.topics.is_empty() {
                    output.push_str(&format!("{connector}{}\n", node.id));
                } else {
                    output.push_str(&format!(
                        "{connector}{} [{}]\n",
                        node.id,
                        node.topics.join(", ")
                    ));
                }
            }
        }

        output
    }
}
