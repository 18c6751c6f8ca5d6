//! Generated Rust registry module: static emitter tables with topic,
//! group, and priority lookups, rendered deterministically so repeated
//! builds produce byte-identical output.

use std::path::Path;

use syncwave_resolver::resolver::ResolutionResult;
use syncwave_util::errors::SyncwaveError;
use syncwave_util::hash::write_if_changed;

const HEADER: &str = "\
// @generated by syncwave — do not edit.
//
// Static registry of resolved sync emitters. Emitters sharing a priority
// level have no ordering dependency and may run concurrently; a level may
// only start once every lower level has completed.
";

/// Render the registry module source for a resolution result.
pub fn render_registry(result: &ResolutionResult) -> String {
    let mut out = String::from(HEADER);

    out.push_str(
        "\n#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n\
         pub struct Emitter {\n    \
             pub id: &'static str,\n    \
             pub priority: u32,\n    \
             pub topics: &'static [&'static str],\n\
         }\n\n",
    );

    out.push_str("pub static EMITTERS: &[Emitter] = &[\n");
    for node in result.graph.nodes() {
        let priority = result.priorities.get(&node.id).copied().unwrap_or(1);
        out.push_str(&format!(
            "    Emitter {{ id: {:?}, priority: {priority}, topics: &{:?} }},\n",
            node.id, node.topics
        ));
    }
    out.push_str("];\n\n");

    out.push_str("/// Emitter ids implied by `topic`, in stable order.\n");
    out.push_str("pub fn by_topic(topic: &str) -> &'static [&'static str] {\n");
    out.push_str("    match topic {\n");
    for (topic, ids) in &result.index.topics {
        out.push_str(&format!("        {topic:?} => &{ids:?},\n"));
    }
    out.push_str("        _ => &[],\n    }\n}\n\n");

    out.push_str("/// Members of a named group, in declaration order.\n");
    out.push_str("pub fn group(name: &str) -> &'static [&'static str] {\n");
    out.push_str("    match name {\n");
    for (name, ids) in &result.index.groups {
        out.push_str(&format!("        {name:?} => &{ids:?},\n"));
    }
    out.push_str("        _ => &[],\n    }\n}\n\n");

    out.push_str("/// Emitters with no declared topics.\n");
    out.push_str(&format!(
        "pub fn untagged() -> &'static [&'static str] {{\n    &{:?}\n}}\n\n",
        result.index.untagged
    ));

    out.push_str("/// Resolved priority of an emitter id.\n");
    out.push_str(
        "pub fn priority_of(id: &str) -> Option<u32> {\n    \
             EMITTERS.iter().find(|e| e.id == id).map(|e| e.priority)\n\
         }\n",
    );

    out
}

/// Write the registry module to `path`, rewriting only when the content
/// changed. Returns `true` if the file was written.
pub fn write_registry(result: &ResolutionResult, path: &Path) -> miette::Result<bool> {
    let source = render_registry(result);
    write_if_changed(path, &source).map_err(|e| {
        SyncwaveError::Codegen {
            message: format!("Failed to write {}: {e}", path.display()),
        }
        .into()
    })
}
