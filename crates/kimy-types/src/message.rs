//! Conversation message types for Kimy.
//!
//! A conversation is an ordered, append-only sequence of messages exchanged
//! between the user and the scripted bot. Messages are immutable once
//! created and only disappear through a full conversation reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who authored a message.
///
/// Serialized lowercase (`"bot"` / `"user"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Bot => write!(f, "bot"),
            Sender::User => write!(f, "user"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bot" => Ok(Sender::Bot),
            "user" => Ok(Sender::User),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message within a conversation.
///
/// Ids are sequential integers, unique within one conversation; they restart
/// from 1 after a reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(id: u64, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::Bot, Sender::User] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Sender::User);
    }

    #[test]
    fn test_sender_from_str_rejects_unknown() {
        assert!("robot".parse::<Sender>().is_err());
    }

    #[test]
    fn test_message_serialize() {
        let message = Message::new(1, "¡Hola!", Sender::Bot);
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"sender\":\"bot\""));
        assert!(json.contains("\"id\":1"));
    }
}
