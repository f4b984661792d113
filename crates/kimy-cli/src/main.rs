//! Kimy CLI entry point.
//!
//! Binary name: `kimy`
//!
//! Parses CLI arguments, initializes the database and services, then
//! dispatches to the chat loop or the profile commands.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ProfileCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,kimy=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "kimy", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (DB, config, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat => {
            cli::chat::run_chat_loop(&state).await?;
        }

        Commands::Profile { action } => match action {
            ProfileCommand::Show => {
                cli::profile::show_profile(&state, cli.json).await?;
            }
            ProfileCommand::Edit => {
                cli::profile::edit_profile(&state).await?;
            }
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
