//! Handler for `syncwave topics`.

use miette::Result;

use syncwave_resolver::resolver::{resolve, ResolutionResult};

/// Print the emitters the requested topics imply, in execution order
/// (priority ascending, id as tie-break). No topics prints everything.
pub fn exec(topics: &[String]) -> Result<()> {
    let project = super::load_project()?;
    let result = resolve(&project)?;

    let mut selected: Vec<&str> = if topics.is_empty() {
        result.graph.ids().map(String::as_str).collect()
    } else {
        let mut ids = Vec::new();
        for topic in topics {
            for id in result.index.by_topic(topic) {
                if !ids.contains(&id.as_str()) {
                    ids.push(id.as_str());
                }
            }
        }
        ids
    };

    sort_by_priority(&mut selected, &result);
    for id in selected {
        let priority = result.priorities.get(id).copied().unwrap_or(1);
        println!("{priority:>4}  {id}");
    }
    Ok(())
}

fn sort_by_priority(ids: &mut [&str], result: &ResolutionResult) {
    ids.sort_by_key(|id| (result.priorities.get(*id).copied().unwrap_or(1), *id));
}
