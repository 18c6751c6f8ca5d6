//! Handler for `syncwave tree`.

use miette::Result;

use syncwave_resolver::resolver::resolve;

/// Render the ordering graph as priority waves. Verbose output appends
/// the direct ordering edges below the wave view.
pub fn exec(verbose: bool) -> Result<()> {
    let project = super::load_project()?;
    let result = resolve(&project)?;
    print!("{}", result.graph.render_waves(&result.priorities));

    if verbose {
        for node in result.graph.nodes() {
            let successors = result.graph.successors_of(&node.id);
            if !successors.is_empty() {
                println!("{} unlocks {}", node.id, successors.join(", "));
            }
        }
    }
    Ok(())
}
