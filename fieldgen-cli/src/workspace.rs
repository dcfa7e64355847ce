//! File-system side of generation
//!
//! The core library only produces strings. Everything that touches a
//! project on disk goes through this module.

use fieldgen::registry::upsert_line_after_anchor;
use fieldgen::{GenError, Result};
use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Serializes read-modify-write cycles on registry files
static REGISTRY_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Outcome of a registry upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryUpdate {
    /// The line was inserted
    Inserted,
    /// The line was already present; the file was not touched
    Unchanged,
}

/// Write a newly generated file, creating parent directories
///
/// # Errors
///
/// Returns [`GenError::DestinationExists`] if `path` exists and `force` is
/// false, or [`GenError::Io`] if the write fails.
pub fn write_new_file(path: &Path, contents: &str, force: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if force {
        fs::write(path, contents)?;
    } else {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(GenError::DestinationExists(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(contents.as_bytes())?;
    }

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Append generated code to `path`, creating it if missing
///
/// Appended code is separated from existing content by one blank line.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the file cannot be read or written.
pub fn append_to_file(path: &Path, code: &str) -> Result<()> {
    let separator = match fs::read_to_string(path) {
        Ok(existing) if existing.is_empty() => "",
        Ok(existing) if existing.ends_with('\n') => "\n",
        Ok(_) => "\n\n",
        Err(err) if err.kind() == ErrorKind::NotFound => "",
        Err(err) => return Err(err.into()),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(separator.as_bytes())?;
    file.write_all(code.as_bytes())?;
    if !code.ends_with('\n') {
        file.write_all(b"\n")?;
    }

    tracing::info!(path = %path.display(), "appended generated code");
    Ok(())
}

/// Insert `line` after the last line containing `anchor` in the file at
/// `path`, unless the line is already present
///
/// A missing file is created containing just `line`.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the file cannot be read or written.
pub fn upsert_registry(path: &Path, anchor: &str, line: &str) -> Result<RegistryUpdate> {
    let _guard = REGISTRY_LOCK.lock();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    let updated = upsert_line_after_anchor(&contents, anchor, line);
    if updated == contents {
        tracing::debug!(path = %path.display(), line, "registry line already present");
        return Ok(RegistryUpdate::Unchanged);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, updated)?;

    tracing::info!(path = %path.display(), line, "registered line");
    Ok(RegistryUpdate::Inserted)
}
