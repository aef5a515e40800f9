//! CLI argument parsing for memedit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use memedit::config::LogFormat;
use std::path::PathBuf;

/// memedit: safe concurrent editing of shared text files.
///
/// Every edit runs under an exclusive `<file>.lock` directory and is
/// committed through `<file>.tmp` + rename, so concurrent processes never
/// lose each other's updates and readers never see a partial file.
#[derive(Parser, Debug)]
#[command(name = "memedit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// YAML config file with lock and logging settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Age in milliseconds after which a lock is treated as abandoned.
    #[arg(long, global = true)]
    pub stale_ms: Option<u64>,

    /// Base delay in milliseconds between lock attempts.
    #[arg(long, global = true)]
    pub retry_delay_ms: Option<u64>,

    /// Maximum random delay in milliseconds added to each retry.
    #[arg(long, global = true)]
    pub retry_jitter_ms: Option<u64>,

    /// Number of waits before giving up on the lock.
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Log filter directive (e.g. `warn`, `memedit=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log record format.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Available commands for memedit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a replace, append or create operation to a file.
    ///
    /// The file is locked for the duration of the edit and rewritten
    /// atomically.
    Update(UpdateArgs),

    /// Lock management commands.
    ///
    /// Inspect or forcibly clear the lock on a file.
    Lock(LockCommand),
}

/// Kind of update operation.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Replace the first occurrence of --old with --new.
    Replace,
    /// Append --content at the end of the file.
    Append,
    /// Create the file if missing; with --content, set its body.
    Create,
}

/// Arguments for the `update` command.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Target file path.
    #[arg(short, long, default_value = "MEMORY.md")]
    pub file: PathBuf,

    /// Operation to perform.
    #[arg(short, long, value_enum)]
    pub operation: OperationKind,

    /// Text to replace.
    #[arg(long, visible_alias = "search", allow_hyphen_values = true)]
    pub old: Option<String>,

    /// Replacement text.
    #[arg(long, visible_alias = "replace", allow_hyphen_values = true)]
    pub new: Option<String>,

    /// Content to append, or the body for create.
    #[arg(long, allow_hyphen_values = true)]
    pub content: Option<String>,

    /// Read --content from a file (surrounding whitespace trimmed).
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Read --old from a file (surrounding whitespace trimmed).
    #[arg(long)]
    pub old_file: Option<PathBuf>,

    /// Read --new from a file (surrounding whitespace trimmed).
    #[arg(long)]
    pub new_file: Option<PathBuf>,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Lock subcommands.
#[derive(Parser, Debug)]
pub struct LockCommand {
    #[command(subcommand)]
    pub action: LockAction,
}

/// Available lock actions.
#[derive(Subcommand, Debug)]
pub enum LockAction {
    /// Show whether a file is locked, and for how long.
    Status(LockStatusArgs),

    /// Remove a file's lock.
    ///
    /// Requires --force flag to prevent accidental clearing.
    Clear(LockClearArgs),
}

/// Arguments for the `lock status` command.
#[derive(Parser, Debug)]
pub struct LockStatusArgs {
    /// File whose lock to inspect.
    #[arg(short, long, default_value = "MEMORY.md")]
    pub file: PathBuf,

    /// Print the lock as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lock clear` command.
#[derive(Parser, Debug)]
pub struct LockClearArgs {
    /// File whose lock should be cleared.
    #[arg(short, long, default_value = "MEMORY.md")]
    pub file: PathBuf,

    /// Force clearing the lock (required for safety).
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
