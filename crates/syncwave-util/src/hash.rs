use sha2::{Digest, Sha256};
use std::path::Path;

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Write `content` to `path` only if the on-disk content differs.
///
/// Compares content hashes so unchanged generated files keep their mtime
/// and downstream build tools skip rebuilds. Returns `true` if the file
/// was written.
pub fn write_if_changed(path: &Path, content: &str) -> std::io::Result<bool> {
    if let Ok(existing) = std::fs::read(path) {
        if sha256_bytes(&existing) == sha256_bytes(content.as_bytes()) {
            return Ok(false);
        }
    }
    std::fs::write(path, content)?;
    Ok(true)
}
