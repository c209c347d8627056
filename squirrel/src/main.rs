//! Squirrel - find the Claude Code projects you started and forgot about.
//!
//! Reads Claude Code's local data (`~/.claude/history.jsonl` and the
//! per-project session logs), aggregates activity per project, enriches it
//! with session metadata, git state and markers mined from conversations,
//! and sorts the result into open work, recent activity and sleeping
//! projects.
//!
//! Everything is read-only except the acknowledgement store in
//! `~/.config/squirrel/config.json`.

mod analyzer;
mod claude;
mod cli;
mod config;
mod error;
mod git;
mod models;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{execute, Cli};

/// Log filter variable, checked before `RUST_LOG`.
const LOG_ENV: &str = "SQUIRREL_LOG";

/// Log to stderr so JSON on stdout stays machine readable.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    execute(cli)
}
