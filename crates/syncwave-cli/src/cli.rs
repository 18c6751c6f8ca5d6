//! CLI argument definitions for syncwave.
//!
//! Uses `clap` derive macros to define the full command surface. Each
//! command corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "syncwave",
    version,
    about = "A build-time planner for prioritized sync emitters",
    long_about = "syncwave resolves declarative sync-emitter manifests into a validated \
                  dependency graph, per-emitter execution priorities, and a topic index, \
                  and emits the plan for downstream execution code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a starter Syncwave.toml in the current directory
    Init,

    /// Validate the emitter graph without emitting anything
    Check,

    /// Resolve and write plan.json and the generated registry module
    Plan {
        /// Output directory for generated files
        #[arg(long, default_value = "generated")]
        out_dir: PathBuf,
    },

    /// Print the emitters implied by the given topics
    Topics {
        /// Topics to query; prints every emitter when omitted
        topics: Vec<String>,
    },

    /// Render the ordering graph as priority waves
    Tree,

    /// Add an emitter declaration to Syncwave.toml
    Add {
        /// Emitter id
        id: String,
        /// Topic this emitter responds to (repeatable)
        #[arg(long = "topic")]
        topics: Vec<String>,
        /// Emitter that must complete first (repeatable)
        #[arg(long = "syncs-after")]
        syncs_after: Vec<String>,
        /// Emitter whose completion fires this one (repeatable)
        #[arg(long = "triggered-by")]
        triggered_by: Vec<String>,
    },
}

/// Parse CLI arguments from the process environment.
pub fn parse() -> Cli {
    Cli::parse()
}
