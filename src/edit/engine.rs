//! The acquire → read → transform → commit → release cycle.

use super::operation::{Change, Operation, UpdateOutcome};
use super::transform;
use crate::error::{EditError, Result};
use crate::fs::atomic_write_file;
use crate::locks::LockManager;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Applies operations to files under the protection of a [`LockManager`].
#[derive(Debug, Clone, Default)]
pub struct Editor {
    locks: LockManager,
}

impl Editor {
    pub fn new(locks: LockManager) -> Self {
        Self { locks }
    }

    pub fn locks(&self) -> &LockManager {
        &self.locks
    }

    /// Apply `op` to the file at `path`.
    ///
    /// The file is read fresh after the lock is acquired, the new content is
    /// computed in memory and committed with an atomic rename. The lock is
    /// released on every exit path, including errors from the transform or
    /// the commit.
    ///
    /// # Returns
    ///
    /// * `Ok(UpdateOutcome)` - `modified` is false when nothing needed to change
    /// * `Err(EditError::NotFound)` - `replace`/`append` on a missing file
    /// * `Err(EditError::NoMatch)` - `replace` text not found; file untouched
    /// * `Err(EditError::LockTimeout)` - the lock stayed busy
    /// * `Err(EditError::InvalidOperation)` - malformed operation
    /// * `Err(EditError::Io)` - read, write or rename failed
    pub fn update(&self, path: &Path, op: &Operation) -> Result<UpdateOutcome> {
        let path = resolve(path)?;

        let created = match op {
            // Establishes a lockable path; the body is written under the lock.
            Operation::Create { .. } => ensure_exists(&path)?,
            _ => {
                fs::metadata(&path).map_err(|e| EditError::from_io_at("stat", &path, e))?;
                false
            }
        };

        let guard = self.locks.acquire(&path)?;
        let result = protected_section(&path, op, created);
        self.locks.release(guard);

        if let Ok(outcome) = &result {
            info!(
                path = %path.display(),
                operation = op.kind(),
                change = ?outcome.change,
                modified = outcome.modified,
                "update finished"
            );
        }
        result
    }
}

fn protected_section(path: &Path, op: &Operation, created: bool) -> Result<UpdateOutcome> {
    let current = fs::read_to_string(path).map_err(|e| EditError::from_io_at("read", path, e))?;

    let staged = transform::apply(&current, op, path, created)?;

    let written = staged.content != current;
    if written {
        atomic_write_file(path, &staged.content)?;
    } else {
        debug!(path = %path.display(), "content unchanged, skipping write");
    }

    let modified = written || created;
    Ok(UpdateOutcome {
        modified,
        change: if modified {
            staged.change
        } else {
            Change::Unchanged
        },
    })
}

fn resolve(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| EditError::io(format!("failed to resolve path '{}'", path.display()), e))
}

/// Create `path` empty if it is missing. Never truncates an existing file.
///
/// Returns whether this call created the file.
fn ensure_exists(path: &Path) -> Result<bool> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            EditError::io(
                format!("failed to create parent directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            debug!(path = %path.display(), "created empty target file");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(EditError::io(
            format!("failed to create '{}'", path.display()),
            e,
        )),
    }
}
