//! Command dispatch and handler modules.

mod add;
mod check;
mod init;
mod plan;
mod topics;
mod tree;

use std::path::PathBuf;

use miette::Result;

use syncwave_core::project::Project;
use syncwave_core::MANIFEST_FILE;
use syncwave_util::errors::SyncwaveError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init::exec(),
        Command::Check => check::exec(cli.verbose),
        Command::Plan { out_dir } => plan::exec(&out_dir),
        Command::Topics { topics } => topics::exec(&topics),
        Command::Tree => tree::exec(cli.verbose),
        Command::Add {
            id,
            topics,
            syncs_after,
            triggered_by,
        } => add::exec(&id, &topics, &syncs_after, &triggered_by),
    }
}

/// Locate the project root by walking up from the current directory.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(SyncwaveError::Io)?;
    syncwave_util::fs::find_ancestor_with(&cwd, MANIFEST_FILE).ok_or_else(|| {
        SyncwaveError::Manifest {
            message: format!("No {MANIFEST_FILE} found in the current directory or any parent"),
        }
        .into()
    })
}

/// Load the merged project from the discovered root.
fn load_project() -> Result<Project> {
    let root = project_root()?;
    Project::load(&root.join(MANIFEST_FILE))
}
