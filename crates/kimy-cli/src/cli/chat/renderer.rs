//! Message rendering for the terminal.
//!
//! Timestamps are converted to local time before formatting; the sender
//! name is styled per side (bot cyan, user green).

use chrono::Local;
use console::style;

use kimy_core::time::format::{format_date, format_time};
use kimy_types::message::{Message, Sender};

/// Renders messages and date headers for the chat log.
pub struct ChatRenderer {
    bot_name: String,
    user_name: String,
}

impl ChatRenderer {
    /// Create a renderer with the given bot and user display names.
    pub fn new(bot_name: String, user_name: String) -> Self {
        Self {
            bot_name,
            user_name,
        }
    }

    /// The user display name currently in effect.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Update the user display name (after a profile save).
    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = name.into();
    }

    /// One chat line: time, sender name, text.
    pub fn render_line(&self, message: &Message) -> String {
        let local = message.timestamp.with_timezone(&Local);
        let name = match message.sender {
            Sender::Bot => style(self.bot_name.as_str()).cyan().bold(),
            Sender::User => style(self.user_name.as_str()).green().bold(),
        };
        format!(
            "  {} {}  {}",
            style(format_time(&local)).dim(),
            name,
            message.text
        )
    }

    /// Date header for the log ("Hoy", "Ayer", "05 de agosto").
    pub fn date_header(&self, message: &Message) -> String {
        let local = message.timestamp.with_timezone(&Local);
        format!("  {}", style(format_date(&local, &Local::now())).dim())
    }
}
