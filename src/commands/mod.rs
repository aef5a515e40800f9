//! Command implementations for memedit.
//!
//! This module resolves the effective configuration and routes CLI commands
//! to their handlers.

mod lock;
mod update;

use crate::cli::{Command, GlobalArgs, LockAction, LockCommand};
use memedit::config::Config;
use memedit::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Update(args) => update::cmd_update(args, config),
        Command::Lock(lock_cmd) => dispatch_lock(lock_cmd, config),
    }
}

/// Dispatch lock subcommands.
fn dispatch_lock(lock_cmd: LockCommand, config: &Config) -> Result<()> {
    match lock_cmd.action {
        LockAction::Status(args) => lock::cmd_lock_status(args, config),
        LockAction::Clear(args) => lock::cmd_lock_clear(args, config),
    }
}

/// Build the effective config: the YAML file (if any), then flag overrides.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(stale_ms) = global.stale_ms {
        config.lock_stale_ms = stale_ms;
    }
    if let Some(retry_delay_ms) = global.retry_delay_ms {
        config.retry_delay_ms = retry_delay_ms;
    }
    if let Some(retry_jitter_ms) = global.retry_jitter_ms {
        config.retry_jitter_ms = retry_jitter_ms;
    }
    if let Some(max_attempts) = global.max_attempts {
        config.max_attempts = max_attempts;
    }
    if let Some(log_level) = &global.log_level {
        config.log_filter = log_level.clone();
    }
    if let Some(log_format) = global.log_format {
        config.log_format = log_format;
    }

    config.validate()?;
    Ok(config)
}
