use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::emitter::EmitterDecl;
use syncwave_util::errors::SyncwaveError;

/// The parsed representation of a `Syncwave.toml` file (or an included
/// fragment — both share the same schema).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Additional declaration files merged into this manifest, relative
    /// to the manifest's directory.
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub plan: Option<PlanConfig>,

    #[serde(default)]
    pub emitter: BTreeMap<String, EmitterDecl>,
}

/// Root plan configuration from the `[plan]` section.
///
/// Exactly one `[plan]` must exist across the root manifest and its
/// fragments whenever at least one emitter is declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Synthetic topic resolving to every emitter. Blank or absent
    /// disables the entry.
    #[serde(default, rename = "all-topic")]
    pub all_topic: Option<String>,

    /// Synthetic topic resolving to emitters with no declared topics
    /// (expanded through their trigger paths). Blank or absent disables
    /// the entry.
    #[serde(default, rename = "untagged-topic")]
    pub untagged_topic: Option<String>,

    /// Named groups: explicit emitter id lists, independent of topics.
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<String>>,
}

impl PlanConfig {
    /// The all-emitters topic name, if configured and non-blank.
    pub fn all_topic(&self) -> Option<&str> {
        self.all_topic.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// The untagged-emitters topic name, if configured and non-blank.
    pub fn untagged_topic(&self) -> Option<&str> {
        self.untagged_topic
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

impl Manifest {
    /// Load and parse a `Syncwave.toml` (or fragment) from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SyncwaveError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SyncwaveError::Manifest {
                message: format!("Failed to parse Syncwave.toml: {e}"),
            }
            .into()
        })
    }
}
