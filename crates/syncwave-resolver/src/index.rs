//! Topic and group index assembly: direct topic declarations expanded
//! through trigger closures, synthetic all/untagged entries, and named
//! group pass-through.

use std::collections::BTreeMap;

use syncwave_core::manifest::PlanConfig;

use crate::diagnostics::{Diagnostics, Issue};
use crate::graph::EmitterGraph;

/// The queryable index produced from a validated graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIndex {
    /// Topic name to ordered, de-duplicated emitter ids. Includes the
    /// synthetic entries when they are configured.
    pub topics: BTreeMap<String, Vec<String>>,
    /// Group name to its validated member list.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Ids of emitters with no declared topics (unexpanded).
    pub untagged: Vec<String>,
}

impl TopicIndex {
    /// Emitter ids implied by `topic`, empty if the topic is unknown.
    pub fn by_topic(&self, topic: &str) -> &[String] {
        self.topics.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Build the topic/group index.
///
/// Every emitter contributes itself plus its entire trigger path to each
/// of its declared topics, grouped in encounter order with later
/// duplicates dropped. Unknown group members are recorded in
/// `diagnostics`; the caller treats a non-empty collector as fatal.
pub fn build_index(
    graph: &EmitterGraph,
    trigger_paths: &BTreeMap<String, Vec<String>>,
    plan: Option<&PlanConfig>,
    diagnostics: &mut Diagnostics,
) -> TopicIndex {
    let mut topics: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for node in graph.nodes() {
        for topic in &node.topics {
            let entry = topics.entry(topic.clone()).or_default();
            push_unique(entry, &node.id);
            if let Some(path) = trigger_paths.get(&node.id) {
                for id in path {
                    push_unique(entry, id);
                }
            }
        }
    }

    let untagged: Vec<String> = graph
        .nodes()
        .filter(|n| n.is_untagged())
        .map(|n| n.id.clone())
        .collect();

    let mut groups = BTreeMap::new();
    if let Some(plan) = plan {
        if let Some(all_topic) = plan.all_topic() {
            topics.insert(all_topic.to_string(), graph.ids().cloned().collect());
        }
        if let Some(untagged_topic) = plan.untagged_topic() {
            // The untagged entry expands through trigger paths too: each
            // untagged emitter's closure first, then the emitter itself.
            let mut expanded = Vec::new();
            for id in &untagged {
                if let Some(path) = trigger_paths.get(id) {
                    for fired in path {
                        push_unique(&mut expanded, fired);
                    }
                }
                push_unique(&mut expanded, id);
            }
            topics.insert(untagged_topic.to_string(), expanded);
        }

        for (name, members) in &plan.groups {
            let mut resolved = Vec::new();
            for member in members {
                if !graph.contains(member) {
                    diagnostics.add(Issue::UnknownGroupMember {
                        group: name.clone(),
                        member: member.clone(),
                    });
                    continue;
                }
                push_unique(&mut resolved, member);
            }
            groups.insert(name.clone(), resolved);
        }
    }

    TopicIndex {
        topics,
        groups,
        untagged,
    }
}

fn push_unique(list: &mut Vec<String>, id: &str) {
    if !list.iter().any(|existing| existing == id) {
        list.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::calculate_trigger_paths;
    use syncwave_core::emitter::Declaration;

    fn decl(id: &str, topics: &[&str], syncs_after: &[&str], triggered_by: &[&str]) -> Declaration {
        Declaration {
            id: id.to_string(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            syncs_after: syncs_after.iter().map(|s| s.to_string()).collect(),
            triggered_by: triggered_by.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn index_of(declarations: &[Declaration], plan: Option<&PlanConfig>) -> (TopicIndex, Diagnostics) {
        let graph = EmitterGraph::build(declarations);
        let paths = calculate_trigger_paths(&graph);
        let mut diagnostics = Diagnostics::new();
        let index = build_index(&graph, &paths, plan, &mut diagnostics);
        (index, diagnostics)
    }

    fn sample() -> Vec<Declaration> {
        vec![
            decl("account", &["acct"], &[], &[]),
            decl("colors", &["col", "draw"], &["account"], &[]),
            decl("shadows", &["shad", "draw"], &["account"], &[]),
            decl("shapes", &["shape", "draw"], &["account"], &[]),
            decl(
                "objects",
                &[],
                &["colors", "shadows", "shapes"],
                &["account"],
            ),
            decl("details", &["obj_details"], &[], &["objects"]),
        ]
    }

    #[test]
    fn shared_topic_collects_all_declarers() {
        let (index, _) = index_of(&sample(), None);
        assert_eq!(index.by_topic("draw"), ["colors", "shadows", "shapes"]);
    }

    #[test]
    fn topic_expands_through_trigger_path() {
        // account fires objects, which fires details; requesting acct
        // must pull in both even though neither declares the topic.
        let (index, _) = index_of(&sample(), None);
        assert_eq!(index.by_topic("acct"), ["account", "details", "objects"]);
    }

    #[test]
    fn untagged_set_is_unexpanded() {
        let (index, _) = index_of(&sample(), None);
        assert_eq!(index.untagged, vec!["objects"]);
    }

    #[test]
    fn unknown_topic_is_empty() {
        let (index, _) = index_of(&sample(), None);
        assert!(index.by_topic("nope").is_empty());
    }

    #[test]
    fn index_is_order_stable() {
        let (first, _) = index_of(&sample(), None);
        let (second, _) = index_of(&sample(), None);
        assert_eq!(first, second);
    }

    #[test]
    fn synthetic_all_topic_lists_everything() {
        let plan = PlanConfig {
            all_topic: Some("all".into()),
            ..PlanConfig::default()
        };
        let (index, _) = index_of(&sample(), Some(&plan));
        assert_eq!(
            index.by_topic("all"),
            ["account", "colors", "details", "objects", "shadows", "shapes"]
        );
    }

    #[test]
    fn synthetic_untagged_topic_expands_paths() {
        let plan = PlanConfig {
            untagged_topic: Some("all_untagged".into()),
            ..PlanConfig::default()
        };
        let (index, _) = index_of(&sample(), Some(&plan));
        // objects is the only untagged emitter; its closure (details)
        // comes first, then objects itself.
        assert_eq!(index.by_topic("all_untagged"), ["details", "objects"]);
    }

    #[test]
    fn blank_synthetic_names_disable_entries() {
        let plan = PlanConfig {
            all_topic: Some(String::new()),
            untagged_topic: Some("  ".into()),
            ..PlanConfig::default()
        };
        let (index, _) = index_of(&sample(), Some(&plan));
        assert!(index.by_topic("").is_empty());
        assert!(!index.topics.contains_key(""));
        assert_eq!(index.topics.len(), 6); // only the declared topics
    }

    #[test]
    fn groups_pass_through_regardless_of_topics() {
        let mut plan = PlanConfig::default();
        plan.groups
            .insert("pair".into(), vec!["account".into(), "colors".into()]);
        let (index, diagnostics) = index_of(&sample(), Some(&plan));
        assert!(diagnostics.is_empty());
        assert_eq!(index.groups["pair"], vec!["account", "colors"]);
    }

    #[test]
    fn unknown_group_member_is_reported() {
        let mut plan = PlanConfig::default();
        plan.groups
            .insert("bad".into(), vec!["account".into(), "ghost".into()]);
        let (_, diagnostics) = index_of(&sample(), Some(&plan));
        assert_eq!(
            diagnostics.issues,
            vec![Issue::UnknownGroupMember {
                group: "bad".into(),
                member: "ghost".into(),
            }]
        );
    }
}
