//! CLI argument parsing for lockgc.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::types::DEFAULT_CONFIG_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// lockgc: garbage collector for persisted resource-lock snapshots.
///
/// Reads a snapshot of lock records (resource group name plus expiry epoch),
/// separates still-held locks from expired ones, and compares snapshots taken
/// at different times.
#[derive(Parser, Debug)]
#[command(name = "lockgc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Snapshot file to read (`-` for stdin). Overrides `snapshot_path` from the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Reference time in Unix epoch seconds (default: current time).
    #[arg(long, global = true, value_name = "EPOCH", allow_negative_numbers = true)]
    pub now: Option<i64>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log output format (json, compact). Overrides `log_format` from the config.
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Log filter directive, e.g. `info`. Overrides `log_level` from the config.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Available commands for lockgc.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List lock records that are still held.
    ///
    /// A record is held while its TTL is strictly after the reference time.
    Valid(ValidArgs),

    /// List lock records that have expired.
    ///
    /// A record whose TTL equals the reference time has expired.
    Expired,

    /// List resource groups held in a previous snapshot but not in the current one.
    ///
    /// Both snapshots are filtered at the same reference time before comparing.
    Diff(DiffArgs),

    /// Report expired records and optionally drop them from the snapshot.
    ///
    /// Without `--write` nothing is modified. With `--write` the snapshot is
    /// rewritten under an exclusive `<snapshot>.lock`.
    Prune(PruneArgs),
}

/// Arguments for the `valid` command.
#[derive(Args, Debug)]
pub struct ValidArgs {
    /// Print only resource group names.
    #[arg(long)]
    pub names: bool,
}

/// Arguments for the `diff` command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// The earlier snapshot.
    #[arg(long, value_name = "PATH")]
    pub previous: PathBuf,

    /// The later snapshot (default: the global snapshot path).
    #[arg(long, value_name = "PATH")]
    pub current: Option<PathBuf>,
}

/// Arguments for the `prune` command.
#[derive(Args, Debug)]
pub struct PruneArgs {
    /// Rewrite the snapshot keeping only valid records.
    #[arg(long)]
    pub write: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
