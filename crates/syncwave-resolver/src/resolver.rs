//! Resolution pipeline: adjacency build, validation, priority and
//! trigger-closure calculation, index assembly.

use std::collections::BTreeMap;

use syncwave_core::project::Project;
use syncwave_util::errors::SyncwaveError;

use crate::diagnostics::Diagnostics;
use crate::graph::EmitterGraph;
use crate::index::{build_index, TopicIndex};
use crate::priority::calculate_priorities;
use crate::trigger::calculate_trigger_paths;
use crate::validate::validate;

/// The output of a resolution run, handed to codegen.
#[derive(Debug)]
pub struct ResolutionResult {
    pub graph: EmitterGraph,
    /// 1-based execution level per emitter.
    pub priorities: BTreeMap<String, u32>,
    /// Transitive trigger closure per emitter.
    pub trigger_paths: BTreeMap<String, Vec<String>>,
    pub index: TopicIndex,
}

impl ResolutionResult {
    /// Emitter ids grouped by priority level, ascending. Emitters within
    /// one wave carry no ordering dependency on each other; a wave may
    /// only start once every earlier wave has completed.
    pub fn waves(&self) -> Vec<Vec<String>> {
        let max = self.priorities.values().copied().max().unwrap_or(0);
        let mut waves = vec![Vec::new(); max as usize];
        for (id, &priority) in &self.priorities {
            waves[(priority - 1) as usize].push(id.clone());
        }
        waves
    }
}

/// Resolve a declaration snapshot into the final plan tables.
///
/// Fails with a rendered diagnostics list on dangling references,
/// cycles, or unknown group members; no partial result is produced.
pub fn resolve(project: &Project) -> miette::Result<ResolutionResult> {
    let graph = EmitterGraph::build(&project.declarations);
    tracing::debug!(emitters = graph.len(), "built adjacency map");

    let mut diagnostics = Diagnostics::new();
    validate(&graph, &mut diagnostics);
    if !diagnostics.is_empty() {
        return Err(fail(diagnostics));
    }

    let priorities = calculate_priorities(&graph);
    let trigger_paths = calculate_trigger_paths(&graph);

    let index = build_index(&graph, &trigger_paths, project.plan.as_ref(), &mut diagnostics);
    if !diagnostics.is_empty() {
        return Err(fail(diagnostics));
    }

    Ok(ResolutionResult {
        graph,
        priorities,
        trigger_paths,
        index,
    })
}

fn fail(diagnostics: Diagnostics) -> miette::Report {
    SyncwaveError::Resolution {
        message: diagnostics.to_string(),
    }
    .into()
}
