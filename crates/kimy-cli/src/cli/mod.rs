//! CLI command definitions and dispatch for the `kimy` binary.
//!
//! Uses clap derive macros. The CLI follows a verb-noun pattern
//! (`kimy chat`, `kimy profile show`).

pub mod chat;
pub mod picker;
pub mod profile;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with Kimy.IA from your terminal.
#[derive(Parser)]
#[command(name = "kimy", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Inspect or edit the saved profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the saved username and avatar.
    Show,

    /// Edit the profile (username + avatar) and save it.
    Edit,
}
