//! Atomic commit of file contents.
//!
//! All writes follow this pattern:
//! 1. Write the full content to the sibling temporary file `<path>.tmp`
//! 2. Sync the temporary file to disk (fsync)
//! 3. Rename the temporary file onto the target path
//!
//! `rename()` replaces the destination atomically when source and destination
//! are on the same filesystem, so a concurrent reader sees either the whole
//! previous version or the whole new one.
//!
//! The temporary file name is fixed rather than randomized: external tooling
//! inspecting the directory expects `<path>.tmp`, and only the lock holder
//! ever writes it. On crash a stale `<path>.tmp` may remain; the next commit
//! overwrites it.

use crate::error::{EditError, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix appended to the target's file name to form the temporary path.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Atomically replace `path` with `content`.
///
/// # Returns
///
/// * `Ok(())` - On successful commit
/// * `Err(EditError::Io)` - On write, sync or rename failure; the temporary
///   file is removed and the target is left untouched
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)?;

    debug!(path = %path.display(), bytes = content.len(), "committed new file version");
    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// The sibling temporary path used while committing `target`.
pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        EditError::io(
            format!("failed to create temporary file '{}'", path.display()),
            e,
        )
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        EditError::io(
            format!("failed to write temporary file '{}'", path.display()),
            e,
        )
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        EditError::io(
            format!("failed to sync temporary file '{}'", path.display()),
            e,
        )
    })?;

    Ok(())
}

/// Rename `source` onto `target`, replacing it.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        EditError::io(
            format!("failed to atomically replace '{}'", target.display()),
            e,
        )
    })?;

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file. Best effort.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
