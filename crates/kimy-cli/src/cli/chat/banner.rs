//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the bot's name, a short description, and the active profile name,
/// plus a hint about slash commands.
pub fn print_welcome_banner(bot_name: &str, display_name: &str) {
    println!();
    println!("  {} {}", "*", style(bot_name).cyan().bold());
    println!(
        "  {}",
        style("Charla guiada por palabras clave; responde en un momento.").dim()
    );
    println!();
    println!("  {}  {}", style("Perfil:").bold(), style(display_name).dim());
    println!();
    println!(
        "  {}",
        style("Escribe /help para ver los comandos, Ctrl+D para salir").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
