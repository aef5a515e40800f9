//! Lock acquisition, inspection, and clearing operations.

use super::guard::LockGuard;
use super::types::LockInfo;
use crate::config::LockConfig;
use crate::error::{EditError, Result};
use rand::Rng;
use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// Suffix appended to the target's file name to form the marker path.
pub const LOCK_SUFFIX: &str = ".lock";

/// The marker directory path for `target`.
pub fn lock_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(LOCK_SUFFIX);
    PathBuf::from(name)
}

/// What a waiter found at an existing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Contention {
    /// The marker was stale and this waiter removed it.
    Pruned,
    /// The marker disappeared before it could be examined.
    Vanished,
    /// The marker is live, or could not be removed; wait and retry.
    Busy,
}

/// Grants exclusive access to files by creating `<target>.lock` directories.
///
/// Directory creation is a single atomic syscall on every supported
/// filesystem, so at most one caller can succeed for a given marker. Waiters
/// poll with jittered backoff and prune markers older than the staleness
/// threshold, which recovers from holders that crashed without releasing.
#[derive(Debug, Clone, Default)]
pub struct LockManager {
    config: LockConfig,
}

impl LockManager {
    pub fn new(config: LockConfig) -> Self {
        Self { config }
    }

    /// Acquire the lock for `target`, waiting up to the configured budget.
    ///
    /// Pruning a stale marker and observing a marker that vanished between
    /// the failed create and the stat both retry immediately without
    /// consuming an attempt. Only the jittered waits count.
    ///
    /// # Returns
    ///
    /// * `Ok(LockGuard)` - The marker was created by this call
    /// * `Err(EditError::LockTimeout)` - Every attempt found a live marker
    /// * `Err(EditError::Io)` - The marker could not be created for any other
    ///   reason (missing directory, permissions)
    pub fn acquire(&self, target: &Path) -> Result<LockGuard> {
        let lock_path = lock_path_for(target);
        let mut attempts = 0;

        while attempts < self.config.max_attempts {
            match fs::create_dir(&lock_path) {
                Ok(()) => {
                    debug!(lock = %lock_path.display(), attempts, "acquired lock");
                    return Ok(LockGuard::new(lock_path, target.to_path_buf()));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                Err(e) => {
                    return Err(EditError::io(
                        format!("failed to create lock '{}'", lock_path.display()),
                        e,
                    ));
                }
            }

            match self.contend(&lock_path) {
                Contention::Pruned | Contention::Vanished => continue,
                Contention::Busy => {}
            }

            attempts += 1;
            let delay = self.next_delay();
            debug!(
                lock = %lock_path.display(),
                attempt = attempts,
                max_attempts = self.config.max_attempts,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "lock busy, waiting"
            );
            thread::sleep(delay);
        }

        Err(EditError::LockTimeout {
            path: target.to_path_buf(),
            attempts,
        })
    }

    /// Release a held lock. Never fails.
    pub fn release(&self, guard: LockGuard) {
        guard.release();
    }

    /// Report the marker for `target`, if one exists.
    pub fn inspect(&self, target: &Path) -> Result<Option<LockInfo>> {
        let lock_path = lock_path_for(target);
        match marker_age(&lock_path) {
            Ok((modified, age)) => Ok(Some(LockInfo {
                is_stale: age > self.config.stale,
                lock_path,
                target: target.to_path_buf(),
                created_at: modified.into(),
                age,
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EditError::io(
                format!("failed to inspect lock '{}'", lock_path.display()),
                e,
            )),
        }
    }

    /// Forcibly remove the marker for `target`.
    ///
    /// The caller is responsible for deciding that clearing is appropriate;
    /// removing a live holder's marker breaks mutual exclusion.
    ///
    /// # Returns
    ///
    /// * `Ok(LockInfo)` - The marker as it was just before removal
    /// * `Err(EditError::UserError)` - No marker exists for `target`
    pub fn clear(&self, target: &Path) -> Result<LockInfo> {
        let info = self.inspect(target)?.ok_or_else(|| {
            EditError::UserError(format!("no lock is held for '{}'", target.display()))
        })?;

        fs::remove_dir(&info.lock_path).map_err(|e| {
            EditError::io(
                format!("failed to clear lock '{}'", info.lock_path.display()),
                e,
            )
        })?;

        info!(lock = %info.lock_path.display(), stale = info.is_stale, "cleared lock");
        Ok(info)
    }

    /// Examine a marker that blocked our create, pruning it if stale.
    pub(super) fn contend(&self, lock_path: &Path) -> Contention {
        match marker_age(lock_path) {
            Ok((_, age)) if age > self.config.stale => {
                warn!(
                    lock = %lock_path.display(),
                    age_ms = u64::try_from(age.as_millis()).unwrap_or(u64::MAX),
                    "found stale lock, pruning"
                );
                match fs::remove_dir(lock_path) {
                    Ok(()) => {
                        info!(lock = %lock_path.display(), "stale lock removed, retrying");
                        Contention::Pruned
                    }
                    // Another waiter won the prune or the holder came back.
                    Err(e) => {
                        debug!(lock = %lock_path.display(), error = %e, "stale prune lost race");
                        Contention::Busy
                    }
                }
            }
            Ok(_) => Contention::Busy,
            // Released between our create and stat.
            Err(e) if e.kind() == ErrorKind::NotFound => Contention::Vanished,
            Err(e) => {
                debug!(lock = %lock_path.display(), error = %e, "failed to stat lock");
                Contention::Busy
            }
        }
    }

    /// Base delay plus uniform jitter in `[0, retry_jitter)`.
    pub(super) fn next_delay(&self) -> Duration {
        let jitter_ms = u64::try_from(self.config.retry_jitter.as_millis()).unwrap_or(u64::MAX);
        let extra = if jitter_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..jitter_ms)
        };
        self.config.retry_delay + Duration::from_millis(extra)
    }
}

/// Modification time and age of the marker.
///
/// A marker stamped in the future (clock skew on a network filesystem) has
/// age zero, so it is never treated as stale.
fn marker_age(lock_path: &Path) -> io::Result<(SystemTime, Duration)> {
    let modified = fs::metadata(lock_path)?.modified()?;
    let age = SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO);
    Ok((modified, age))
}
