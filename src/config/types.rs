//! Configuration types and defaults for memedit.
//!
//! This module defines enums, the lock tuning value handed to the lock
//! manager, and default value functions used by the Config struct.

use serde::Deserialize;
use std::time::Duration;

/// Output format for log records written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Single-line human readable records (default).
    #[default]
    Compact,
    /// One JSON object per record.
    Json,
}

/// Tuning for lock acquisition.
///
/// Passed explicitly to [`crate::locks::LockManager::new`]; the lock manager
/// never reads thresholds from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockConfig {
    /// Marker age after which the holder is presumed crashed.
    pub stale: Duration,
    /// Base delay between acquisition attempts.
    pub retry_delay: Duration,
    /// Upper bound (exclusive) of the random delay added to `retry_delay`.
    pub retry_jitter: Duration,
    /// Number of wait cycles before giving up.
    pub max_attempts: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            stale: Duration::from_millis(default_lock_stale_ms()),
            retry_delay: Duration::from_millis(default_retry_delay_ms()),
            retry_jitter: Duration::from_millis(default_retry_jitter_ms()),
            max_attempts: default_max_attempts(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_lock_stale_ms() -> u64 {
    15_000
}
pub(crate) fn default_retry_delay_ms() -> u64 {
    200
}
pub(crate) fn default_retry_jitter_ms() -> u64 {
    100
}
pub(crate) fn default_max_attempts() -> u32 {
    15
}
pub(crate) fn default_log_filter() -> String {
    "warn".to_string()
}
