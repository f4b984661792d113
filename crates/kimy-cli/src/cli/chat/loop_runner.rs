//! Main chat loop orchestration.
//!
//! Coordinates the session lifecycle: profile load, welcome banner, initial
//! greeting, then a single event loop that interleaves user input with
//! delayed bot replies. Settings editing tears down the readline, runs the
//! dialoguer flow, and resumes with a fresh prompt.

use std::io::Write;
use std::time::Duration;

use console::style;
use tracing::info;

use kimy_core::conversation::engine::ChatEngine;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat session.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let profile = state.profile_service.load().await;
    let delay = Duration::from_millis(state.config.reply_delay_ms);

    let (mut engine, mut replies) = ChatEngine::new(profile.display_name(), delay);
    let mut renderer = ChatRenderer::new(
        state.config.bot_name.clone(),
        profile.display_name().to_string(),
    );

    print_welcome_banner(&state.config.bot_name, profile.display_name());
    println!("{}", renderer.date_header(engine.conversation().last()));
    println!("{}", renderer.render_line(engine.conversation().last()));
    println!();

    info!(delay_ms = state.config.reply_delay_ms, "chat session started");

    let prompt = format!("  {} ", style("Tú >").green().bold());

    // Outer loop so /settings can release the terminal, run the dialoguer
    // flow, and come back with a fresh prompt.
    'session: loop {
        let (mut chat_input, mut writer) = ChatInput::new(prompt.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

        loop {
            tokio::select! {
                reply = replies.recv() => {
                    let Some(reply) = reply else { break 'session };
                    if let Some(message) = engine.deliver(reply) {
                        writeln!(writer, "{}", renderer.render_line(message))?;
                    }
                }
                event = chat_input.read_line() => match event {
                    InputEvent::Eof => {
                        println!("\n  {}", style("Sesión terminada.").dim());
                        break 'session;
                    }
                    InputEvent::Interrupted => {
                        writeln!(
                            writer,
                            "\n  {}",
                            style("Ctrl+D para salir, o sigue escribiendo.").dim()
                        )?;
                    }
                    InputEvent::Message(text) => {
                        if text.is_empty() {
                            continue;
                        }

                        match commands::parse(&text) {
                            Some(ChatCommand::Help) => commands::print_help(),
                            Some(ChatCommand::Clear) => chat_input.clear(),
                            Some(ChatCommand::Reset) => {
                                engine.reset();
                                writeln!(writer)?;
                                writeln!(writer, "{}", renderer.date_header(engine.conversation().last()))?;
                                writeln!(writer, "{}", renderer.render_line(engine.conversation().last()))?;
                                writeln!(writer)?;
                            }
                            Some(ChatCommand::History) => {
                                writeln!(writer)?;
                                writeln!(writer, "{}", renderer.date_header(engine.conversation().last()))?;
                                for message in engine.conversation().messages() {
                                    writeln!(writer, "{}", renderer.render_line(message))?;
                                }
                                writeln!(writer)?;
                            }
                            Some(ChatCommand::Settings) => {
                                // Readline must let go of the terminal before
                                // dialoguer takes over.
                                drop(chat_input);
                                let updated = crate::cli::profile::edit_profile(state).await?;
                                engine.set_display_name(updated.display_name());
                                renderer.set_user_name(updated.display_name());
                                continue 'session;
                            }
                            Some(ChatCommand::Exit) => {
                                println!("\n  {}", style("Sesión terminada.").dim());
                                break 'session;
                            }
                            Some(ChatCommand::Unknown(cmd_name)) => {
                                writeln!(
                                    writer,
                                    "\n  {} Comando desconocido: {}. Escribe /help para ver los comandos.\n",
                                    style("?").yellow().bold(),
                                    style(cmd_name).dim()
                                )?;
                            }
                            None => {
                                if let Some(message) = engine.send(&text) {
                                    writeln!(writer, "{}", renderer.render_line(message))?;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    info!("chat session ended");
    Ok(())
}
