//! Cross-process locking over a filesystem path.
//!
//! A file `notes.md` is locked by the existence of the directory
//! `notes.md.lock`. The marker is created with a single `mkdir`, which either
//! succeeds for exactly one caller or fails with `AlreadyExists`, so no
//! check-then-create window exists.
//!
//! # Staleness
//!
//! The marker's modification time stands in for its creation time. A waiter
//! that finds a marker older than the configured threshold assumes the holder
//! crashed, removes the marker and retries. Removal is contested by every
//! waiter, so losing that race simply falls back to waiting.
//!
//! The age check and the removal are two separate syscalls. A waiter that
//! judged a marker stale can therefore remove a fresh marker that another
//! waiter created after pruning the old one, leaving two holders. The window
//! only opens once a holder has exceeded the threshold, so the threshold
//! must comfortably exceed the longest protected section.
//!
//! # Marker Contents
//!
//! The directory is always empty. Other tools prune markers with a plain
//! `rmdir`, which refuses non-empty directories.
//!
//! # RAII Guards
//!
//! Acquisition returns a [`LockGuard`] that removes the marker when dropped.
//! Release never fails; a marker already removed by someone else is ignored.

mod guard;
mod operations;
mod types;


// Re-export public API
pub use guard::LockGuard;
pub use operations::{LOCK_SUFFIX, LockManager, lock_path_for};
pub use types::LockInfo;
