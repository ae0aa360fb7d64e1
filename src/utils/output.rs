//! Writing collected data into the staging tree.
//!
//! Every write failure carries the path in its context; the traversal treats
//! these as fatal.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .context(format!("Failed to create directory {}", dir.display()))
}

/// Write text content to `path`
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .context(format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Serialize `value` as YAML and write it to `path`
pub fn write_yaml<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value)
        .context(format!("Failed to serialize YAML for {}", path.display()))?;
    write_text(path, &yaml)
}
