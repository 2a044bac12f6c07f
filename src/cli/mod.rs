//! CLI module for glee
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// glee - exclude files from git tracking without adding them to .gitignore
#[derive(Parser, Debug)]
#[command(name = "glee")]
#[command(version)]
#[command(about = "Exclude files from git tracking without adding them to .gitignore")]
#[command(long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exclude entries from git tracking
    #[command(long_about = "Add files to the local exclude list, removing them from git tracking.

You can exclude multiple files using glob patterns:
    glee add filename*.txt

To add a glob pattern itself to the exclude list, escape special characters with a backslash:
    glee add filename\\*.txt")]
    Add {
        /// Files or patterns to ignore, relative to the current directory
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Remove entries from the exclude list
    #[command(long_about = "Remove files from the local exclude list, allowing them to be tracked by git again.

Entries are matched exactly against existing lines after being made relative to the
repository root. To remove a glob pattern itself, escape special characters:
    glee remove filename\\*.txt")]
    Remove {
        /// Files or patterns to stop ignoring, relative to the current directory
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// List excluded entries
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Empty the exclude list
    Clear,

    /// Open the exclude file in a text editor
    Edit,

    /// Print the version number of glee
    Version,
}
