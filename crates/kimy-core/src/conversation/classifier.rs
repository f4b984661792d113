//! Keyword classification and the bot's scripted replies.
//!
//! Matching is case-insensitive and substring-based. "hola" is checked
//! before "adiós", so input containing both keywords greets.

/// Impersonal greeting used when a conversation first starts.
pub const INITIAL_GREETING: &str = "¡Hola! ¿En qué puedo ayudarte hoy?";

/// Reply used when the input matches neither keyword.
pub const FALLBACK_REPLY: &str = "Lo siento, no puedo entenderte. ¿En qué puedo ayudarte?";

/// The scripted branch an input falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Greeting,
    Farewell,
    Fallback,
}

/// Classify user input into one of the scripted branches.
pub fn classify(text: &str) -> ReplyKind {
    let lowered = text.to_lowercase();
    if lowered.contains("hola") {
        ReplyKind::Greeting
    } else if lowered.contains("adiós") {
        ReplyKind::Farewell
    } else {
        ReplyKind::Fallback
    }
}

/// Personalized greeting; also the message a reset leaves behind.
pub fn greeting_for(display_name: &str) -> String {
    format!("¡Hola {display_name}! ¿En qué puedo ayudarte hoy?")
}

/// Personalized farewell.
pub fn farewell_for(display_name: &str) -> String {
    format!("Adiós {display_name}! Espero que hablemos pronto.")
}

/// The reply text for a classified input.
pub fn reply_text(kind: ReplyKind, display_name: &str) -> String {
    match kind {
        ReplyKind::Greeting => greeting_for(display_name),
        ReplyKind::Farewell => farewell_for(display_name),
        ReplyKind::Fallback => FALLBACK_REPLY.to_string(),
    }
}
