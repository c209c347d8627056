//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::analyzer::Depth;

/// Squirrel - Find the Claude Code projects you started and forgot about
#[derive(Parser, Debug)]
#[command(name = "squirrel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analysis depth
    #[arg(long, global = true, value_enum, default_value = "medium")]
    pub depth: Depth,

    /// Number of days to look back
    #[arg(long, global = true, default_value = "14")]
    pub days: u32,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute (defaults to status)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Shortcuts for `--depth`, only one may be given.
#[derive(Args, Debug, Default, Clone, Copy)]
#[group(multiple = false)]
pub struct DepthShortcut {
    /// Shortcut for --depth=quick
    #[arg(long)]
    pub quick: bool,

    /// Shortcut for --depth=medium
    #[arg(long)]
    pub medium: bool,

    /// Shortcut for --depth=deep
    #[arg(long)]
    pub deep: bool,
}

impl DepthShortcut {
    /// The selected depth, if any shortcut was given.
    pub const fn selected(self) -> Option<Depth> {
        if self.quick {
            Some(Depth::Quick)
        } else if self.medium {
            Some(Depth::Medium)
        } else if self.deep {
            Some(Depth::Deep)
        } else {
            None
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show open work, recent activity and sleeping projects
    Status {
        #[command(flatten)]
        shortcut: DepthShortcut,
    },

    /// Show only projects with uncommitted changes or feature branches
    Stash,

    /// Show all projects ordered by last activity
    Timeline,

    /// Show a detailed view of one project
    Project {
        /// Path, name or part of a name
        query: String,
    },

    /// Hide a project from the overview
    Ack {
        /// Path, name or part of a name
        query: String,

        /// Only hide it for this long (e.g. 7d, 2w, 3m)
        #[arg(long = "for", value_name = "DURATION")]
        duration: Option<String>,
    },

    /// Show an acknowledged project again
    Unack {
        /// Path, name or part of a name
        query: String,
    },

    /// Install the /squirrel Claude Code skill
    InstallSkill,
}
