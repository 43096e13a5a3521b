//! Command line interface and watcher settings.

use std::time::Duration;

use clap::{Parser, Subcommand};

/// Delay between two clipboard polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Delay after a failed poll before trying again.
pub const DEFAULT_ERROR_BACKOFF_MS: u64 = 1000;

/// Prefix marking clipboard text the watcher already wrote.
pub const SENTINEL: char = '+';

#[derive(Debug, Parser)]
#[command(
    name = "clipnum",
    version,
    about = "Watch the clipboard and replace copied numbers with obfuscated ones"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed for the digit scrambler, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity level for logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Obfuscate the given values (or stdin lines) and print them
    Convert {
        /// Values to convert; reads stdin when empty
        values: Vec<String>,
    },
}

/// Resolved settings for the clipboard watcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchConfig {
    pub poll_interval: Duration,
    pub error_backoff: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            error_backoff: Duration::from_millis(DEFAULT_ERROR_BACKOFF_MS),
        }
    }
}
