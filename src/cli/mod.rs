//! Command-line interface for declutter
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in submodules.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod share;
mod signin;
mod tasks;

/// declutter - Mental Clutter Reduction
///
/// A persisted checklist of self-help tasks: toggle, add, delete, reset
/// to defaults, track progress, and share a completion summary.
#[derive(Parser, Debug)]
#[command(name = "declutter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to the per-user data dir)
    #[arg(long, global = true, env = "DECLUTTER_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in through the access gate
    Signin {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: String,
    },

    /// Show the grouped checklist
    List {
        /// Only show one group (label, or 'custom')
        #[arg(long)]
        group: Option<String>,
    },

    /// Add a task
    Add {
        /// Task text
        text: String,

        /// Group label for the new task (defaults to the custom bucket)
        #[arg(long, default_value = "custom")]
        group: String,
    },

    /// Toggle completion for a task
    Toggle {
        /// Task id
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: String,
    },

    /// Reset the checklist to the built-in defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show completion progress
    Progress,

    /// Share the completion summary
    Share,

    /// Show sign-in state and checklist counts
    Status,

    /// Open the full-screen checklist
    View,
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub data_dir: Option<std::path::PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let options = CmdOptions {
            data_dir: self.data_dir,
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Signin { name, email } => signin::run(options, &name, &email),
            Commands::List { group } => tasks::run_list(options, group.as_deref()),
            Commands::Add { text, group } => tasks::run_add(options, &text, &group),
            Commands::Toggle { id } => tasks::run_toggle(options, &id),
            Commands::Rm { id } => tasks::run_rm(options, &id),
            Commands::Reset { yes } => tasks::run_reset(options, yes),
            Commands::Progress => tasks::run_progress(options),
            Commands::Share => share::run(options),
            Commands::Status => tasks::run_status(options),
            Commands::View => tasks::run_view(options),
        }
    }
}
