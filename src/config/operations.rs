//! Config loading, validation, and conversion operations.

use super::model::Config;
use super::types::LockConfig;
use crate::error::{EditError, Result};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(EditError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EditError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| EditError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `lock_stale_ms` must be positive
    /// - `max_attempts` must be positive
    /// - `log_filter` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.lock_stale_ms == 0 {
            return Err(EditError::UserError(
                "config validation failed: lock_stale_ms must be greater than 0".to_string(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(EditError::UserError(
                "config validation failed: max_attempts must be greater than 0".to_string(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(EditError::UserError(
                "config validation failed: log_filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Lock tuning derived from this config.
    pub fn lock_config(&self) -> LockConfig {
        LockConfig {
            stale: Duration::from_millis(self.lock_stale_ms),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            retry_jitter: Duration::from_millis(self.retry_jitter_ms),
            max_attempts: self.max_attempts,
        }
    }
}
