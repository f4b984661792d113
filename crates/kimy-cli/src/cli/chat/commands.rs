//! Slash command parsing and help text for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for resetting the
//! conversation, reviewing history, and switching to the settings view.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Reset the conversation to a fresh greeting.
    Reset,
    /// Show the conversation so far.
    History,
    /// Open the settings editor (username + avatar).
    Settings,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    match trimmed.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/reset" | "/reiniciar" => Some(ChatCommand::Reset),
        "/history" | "/historial" => Some(ChatCommand::History),
        "/settings" | "/ajustes" => Some(ChatCommand::Settings),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Comandos disponibles:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Muestra esta ayuda");
    println!("  {}    {}", style("/clear").cyan(), "Limpia la pantalla");
    println!(
        "  {}    {}",
        style("/reset").cyan(),
        "Reinicia la conversación"
    );
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Muestra la conversación"
    );
    println!("  {} {}", style("/settings").cyan(), "Abre los ajustes");
    println!("  {}     {}", style("/exit").cyan(), "Termina la sesión");
    println!();
    println!("  {}", style("Ctrl+D para salir, Ctrl+C no pierde mensajes").dim());
    println!();
}
