//! lockgc: garbage collector for persisted resource-lock snapshots.
//!
//! This is the main entry point for the `lockgc` CLI. It parses arguments,
//! loads configuration, installs logging, dispatches to the appropriate
//! command handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod expiry;
pub mod fs;
pub mod locks;
pub mod logging;
pub mod setdiff;
pub mod snapshot;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use context::RunContext;
use error::{GcError, Result};
use logging::LogConfig;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => report_failure(&err, &mut std::io::stderr()),
    }
}

/// Print the user-facing error once and map it to its exit code.
///
/// The tracing event carries only the exit code so JSON logs on stderr do
/// not repeat the message.
fn report_failure<W: Write>(err: &GcError, out: &mut W) -> ExitCode {
    debug!(exit_code = err.exit_code(), "run failed");
    let _ = writeln!(out, "Error: {}", err);
    ExitCode::from(err.exit_code() as u8)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_optional(&cli.global.config)?;

    let log_config = LogConfig::resolve(
        &config,
        cli.global.log_format.as_deref(),
        cli.global.log_level.as_deref(),
    )?;
    logging::init(&log_config)?;

    let ctx = RunContext::resolve(&cli.global, config);
    debug!(
        snapshot = %ctx.snapshot_path.display(),
        now = ctx.now,
        log_format = log_config.format.as_str(),
        "starting lockgc"
    );

    commands::dispatch(&ctx, cli.command)
}
