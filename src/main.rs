//! memedit CLI entry point.
//!
//! Parses arguments, resolves configuration, installs logging, dispatches to
//! the command handler, and maps errors to exit codes.

mod cli;
mod commands;
mod logging;

use cli::Cli;
use memedit::error::Result;
use memedit::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(&cli.global)?;
    logging::init(&config.log_filter, config.log_format)?;
    commands::dispatch(cli.command, &config)
}
