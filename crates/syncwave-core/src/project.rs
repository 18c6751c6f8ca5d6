//! Project loading: the root manifest plus its included fragments,
//! merged into one immutable declaration snapshot.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::emitter::{Declaration, EmitterDecl};
use crate::manifest::{Manifest, PlanConfig};
use syncwave_util::errors::SyncwaveError;

/// The fully merged declaration snapshot handed to the resolver.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory containing the root `Syncwave.toml`.
    pub root: PathBuf,
    /// All emitter declarations, ordered by id.
    pub declarations: Vec<Declaration>,
    /// The single `[plan]` section, if one is required and declared.
    pub plan: Option<PlanConfig>,
}

impl Project {
    /// Load the root manifest at `manifest_path` and every fragment it
    /// includes, and merge them.
    ///
    /// Structural rules enforced here:
    /// - fragments may not `include` further files;
    /// - an emitter id may be declared in at most one file;
    /// - when at least one emitter is declared, exactly one `[plan]`
    ///   section must exist across the root and all fragments.
    pub fn load(manifest_path: &Path) -> miette::Result<Self> {
        let root_manifest = Manifest::from_path(manifest_path)?;
        let root_dir = manifest_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let mut sources: Vec<(PathBuf, Manifest)> =
            vec![(manifest_path.to_path_buf(), root_manifest)];

        let include = sources[0].1.include.clone();
        for fragment in &include {
            let path = root_dir.join(fragment);
            let manifest = Manifest::from_path(&path)?;
            if !manifest.include.is_empty() {
                return Err(SyncwaveError::Manifest {
                    message: format!(
                        "Fragment {} may not include further files",
                        path.display()
                    ),
                }
                .into());
            }
            sources.push((path, manifest));
        }

        tracing::debug!(fragments = sources.len() - 1, "loaded manifest sources");
        Self::merge(root_dir, sources)
    }

    fn merge(root: PathBuf, sources: Vec<(PathBuf, Manifest)>) -> miette::Result<Self> {
        let mut emitters: BTreeMap<String, EmitterDecl> = BTreeMap::new();
        let mut declared_in: BTreeMap<String, PathBuf> = BTreeMap::new();
        let mut plans: Vec<(PathBuf, PlanConfig)> = Vec::new();

        for (path, manifest) in sources {
            if let Some(plan) = manifest.plan {
                plans.push((path.clone(), plan));
            }
            for (id, decl) in manifest.emitter {
                if let Some(previous) = declared_in.get(&id) {
                    return Err(SyncwaveError::Manifest {
                        message: format!(
                            "Emitter '{id}' is declared in both {} and {}",
                            previous.display(),
                            path.display()
                        ),
                    }
                    .into());
                }
                declared_in.insert(id.clone(), path.clone());
                emitters.insert(id, decl);
            }
        }

        // An empty declaration set resolves to an empty plan; the [plan]
        // multiplicity rule only applies once emitters exist.
        let plan = if emitters.is_empty() {
            plans.into_iter().next().map(|(_, p)| p)
        } else {
            match plans.len() {
                1 => plans.into_iter().next().map(|(_, p)| p),
                0 => {
                    return Err(SyncwaveError::Manifest {
                        message: "Emitters are declared but no [plan] section exists; \
                                  exactly one is required"
                            .to_string(),
                    }
                    .into());
                }
                n => {
                    let files: Vec<String> = plans
                        .iter()
                        .map(|(p, _)| p.display().to_string())
                        .collect();
                    return Err(SyncwaveError::Manifest {
                        message: format!(
                            "Exactly one [plan] section is required, found {n}: {}",
                            files.join(", ")
                        ),
                    }
                    .into());
                }
            }
        };

        let declarations = emitters
            .into_iter()
            .map(|(id, decl)| Declaration::new(id, decl))
            .collect();

        Ok(Self {
            root,
            declarations,
            plan,
        })
    }
}
