//! CLI argument parsing and command execution.

mod args;
mod commands;
mod skill;

pub use args::Cli;
pub use commands::execute;
