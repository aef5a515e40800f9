//! Filesystem utilities for memedit.
//!
//! Provides the atomic write-temp-then-rename commit used by the update engine.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file, temp_path_for};
