use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CommitCommands, ProjectCommands, ReviewCommands, StepCommands};

/// Main command-line interface for the Atelier project workflow tool
///
/// Atelier tracks learner-authored projects through a multi-phase
/// lifecycle: a step board for the work itself, an append-only commit
/// ledger with point-in-time restore, and an instructor review gate that
/// decides publication. It also runs as an MCP (Model Context Protocol)
/// server for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "atl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/atelier/atelier.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Atelier CLI
///
/// The CLI is organized into four command families plus the server mode:
/// - `project`: Lifecycle operations (create, list, bind template, advance)
/// - `step`: Step board operations within a project
/// - `commit`: The board history ledger (push, log, restore)
/// - `review`: The instructor review gate (submit, approve, reject)
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage steps on a project's board
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Manage the board history ledger
    #[command(alias = "c")]
    Commit {
        #[command(subcommand)]
        command: CommitCommands,
    },
    /// Drive the instructor review gate
    #[command(alias = "r")]
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },
    /// Start the MCP server
    Serve,
}
