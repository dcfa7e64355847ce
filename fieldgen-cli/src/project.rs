//! Project root discovery

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start` (inclusive) that contains `marker`
#[must_use]
pub fn discover(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// Resolve the project root
///
/// An explicit root is used as-is; otherwise the working directory and its
/// parents are searched for `marker`.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read or no ancestor
/// contains `marker`.
pub fn resolve(explicit: Option<&Path>, marker: &str) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let root = discover(&cwd, marker).with_context(|| {
        format!(
            "No {marker} found in {} or any parent directory (use --root to set the project root)",
            cwd.display()
        )
    })?;

    tracing::debug!(root = %root.display(), marker, "discovered project root");
    Ok(root)
}
