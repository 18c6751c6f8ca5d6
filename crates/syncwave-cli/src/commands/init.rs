//! Handler for `syncwave init`.

use miette::Result;

use syncwave_core::MANIFEST_FILE;
use syncwave_util::errors::SyncwaveError;
use syncwave_util::progress;

const STARTER_MANIFEST: &str = r#"[plan]
all-topic = "all"
untagged-topic = "all_untagged"

# [plan.groups]
# user_content = ["notes", "photos"]

[emitter.account]
topics = ["sync.account"]

[emitter.notes]
topics = ["sync.notes"]
triggered-by = ["account"]
"#;

/// Create a starter manifest in the current directory. Existing files
/// are never overwritten.
pub fn exec() -> Result<()> {
    let cwd = std::env::current_dir().map_err(SyncwaveError::Io)?;
    let path = cwd.join(MANIFEST_FILE);
    if path.exists() {
        return Err(SyncwaveError::Manifest {
            message: format!("{MANIFEST_FILE} already exists in {}", cwd.display()),
        }
        .into());
    }

    std::fs::write(&path, STARTER_MANIFEST).map_err(SyncwaveError::Io)?;
    progress::status("Created", &format!("{MANIFEST_FILE} with 2 sample emitters"));
    println!("Created {MANIFEST_FILE}");
    Ok(())
}
