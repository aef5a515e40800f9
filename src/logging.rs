//! Structured log output for the CLI.
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber once at startup. Records go to stderr so stdout stays reserved
//! for command output.

use memedit::config::LogFormat;
use memedit::error::{EditError, Result};
use std::io::{self, IsTerminal};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the global subscriber.
pub fn init(filter: &str, format: LogFormat) -> Result<()> {
    let filter = parse_filter(filter)?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        // Keep colour codes out of redirected output.
        .with_ansi(io::stderr().is_terminal());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| EditError::UserError(format!("failed to install log subscriber: {}", e)))
}

fn parse_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter)
        .map_err(|e| EditError::UserError(format!("invalid log filter '{}': {}", filter, e)))
}
