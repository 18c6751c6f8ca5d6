//! Handler for `syncwave check`.

use miette::Result;

use syncwave_resolver::resolver::resolve;
use syncwave_util::progress;

/// Load and resolve the project, reporting diagnostics without emitting
/// anything. Exits non-zero when validation fails.
pub fn exec(verbose: bool) -> Result<()> {
    let project = super::load_project()?;
    progress::status(
        "Checking",
        &format!("{} emitters", project.declarations.len()),
    );

    let result = resolve(&project)?;

    if verbose {
        println!("roots: {}", result.graph.roots().join(", "));
        for node in result.graph.nodes() {
            println!(
                "{} (priority {})",
                node.id,
                result.priorities.get(&node.id).copied().unwrap_or(1)
            );
        }
    }

    let waves = result.waves().len();
    println!(
        "{}: {} emitters across {} wave{}",
        console::style("ok").green().bold(),
        result.graph.len(),
        waves,
        if waves == 1 { "" } else { "s" }
    );
    Ok(())
}
