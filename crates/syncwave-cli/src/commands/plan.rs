//! Handler for `syncwave plan`.

use std::path::Path;

use miette::Result;

use syncwave_codegen::{plan, registry};
use syncwave_resolver::resolver::resolve;
use syncwave_util::errors::SyncwaveError;
use syncwave_util::progress;

/// Resolve the project and write `plan.json` plus the generated registry
/// module into the output directory.
pub fn exec(out_dir: &Path) -> Result<()> {
    let root = super::project_root()?;
    let project = super::load_project()?;

    progress::status(
        "Resolving",
        &format!("{} emitters", project.declarations.len()),
    );
    let result = resolve(&project)?;

    let out = if out_dir.is_absolute() {
        out_dir.to_path_buf()
    } else {
        root.join(out_dir)
    };
    syncwave_util::fs::ensure_dir(&out).map_err(SyncwaveError::Io)?;

    let plan_path = out.join("plan.json");
    let registry_path = out.join("emitters.rs");

    let wrote_plan = plan::write_plan(&result, &plan_path)?;
    let wrote_registry = registry::write_registry(&result, &registry_path)?;
    if !wrote_plan && !wrote_registry {
        tracing::debug!("generated output unchanged, files untouched");
    }

    progress::status("Generated", &format!("{}", out.display()));
    println!(
        "wrote plan.json and emitters.rs for {} emitters",
        result.graph.len()
    );
    Ok(())
}
