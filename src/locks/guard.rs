//! RAII lock guard implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// RAII guard for a lock marker.
///
/// Owning a `LockGuard` means this process created the marker directory.
/// When dropped, the marker is removed. Release never fails: a marker that
/// is already gone (e.g. pruned as stale by another process) is fine, and
/// any other removal failure is logged rather than returned.
#[derive(Debug)]
pub struct LockGuard {
    /// Path to the marker directory.
    lock_path: PathBuf,

    /// The file the marker protects.
    target: PathBuf,

    /// Whether the lock has been released manually.
    released: bool,
}

impl LockGuard {
    pub(super) fn new(lock_path: PathBuf, target: PathBuf) -> Self {
        Self {
            lock_path,
            target,
            released: false,
        }
    }

    /// Get the path to the marker directory.
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    /// Get the path of the protected file.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Release the lock now instead of at end of scope.
    pub fn release(mut self) {
        self.remove_marker();
    }

    fn remove_marker(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match fs::remove_dir(&self.lock_path) {
            Ok(()) => debug!(lock = %self.lock_path.display(), "released lock"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(lock = %self.lock_path.display(), "lock marker already gone on release");
            }
            Err(e) => warn!(
                lock = %self.lock_path.display(),
                error = %e,
                "failed to release lock"
            ),
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.remove_marker();
    }
}
