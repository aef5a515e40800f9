//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for memedit.
///
/// Loaded from an optional YAML file; command-line flags override individual
/// values afterwards. Unknown fields in the YAML are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Lock settings
    // =========================================================================
    /// Milliseconds after which a lock marker is considered stale.
    #[serde(default = "default_lock_stale_ms")]
    pub lock_stale_ms: u64,

    /// Base delay in milliseconds between acquisition attempts.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Maximum random jitter in milliseconds added to each retry delay.
    #[serde(default = "default_retry_jitter_ms")]
    pub retry_jitter_ms: u64,

    /// Maximum number of wait cycles before acquisition fails.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    // =========================================================================
    // Logging settings
    // =========================================================================
    /// Filter directive for log output (e.g. `warn`, `memedit=debug`).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log record format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_stale_ms: default_lock_stale_ms(),
            retry_delay_ms: default_retry_delay_ms(),
            retry_jitter_ms: default_retry_jitter_ms(),
            max_attempts: default_max_attempts(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}
