//! Conversation state: an ordered, append-only message log.
//!
//! The log always contains at least one message (the greeting appended at
//! construction or reset). Ids are derived from the current length, so they
//! stay sequential and unique as long as all appends happen on one task.

use kimy_types::message::{Message, Sender};

use super::classifier;

/// The ordered sequence of messages shown to the user.
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the impersonal greeting.
    pub fn start() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
        };
        conversation.append(classifier::INITIAL_GREETING.to_string(), Sender::Bot);
        conversation
    }

    /// Messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message. Total thanks to the greeting invariant.
    pub fn last(&self) -> &Message {
        self.messages.last().expect("conversation is never empty")
    }

    fn next_id(&self) -> u64 {
        self.messages.len() as u64 + 1
    }

    fn append(&mut self, text: String, sender: Sender) -> &Message {
        let message = Message::new(self.next_id(), text, sender);
        self.messages.push(message);
        self.last()
    }

    /// Append a user message.
    pub fn append_user(&mut self, text: String) -> &Message {
        self.append(text, Sender::User)
    }

    /// Append a bot message.
    pub fn append_bot(&mut self, text: String) -> &Message {
        self.append(text, Sender::Bot)
    }

    /// Replace the whole log with a single personalized greeting.
    pub fn reset(&mut self, display_name: &str) {
        self.messages.clear();
        self.append(classifier::greeting_for(display_name), Sender::Bot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_contains_greeting() {
        let conversation = Conversation::start();
        assert_eq!(conversation.messages().len(), 1);
        let greeting = conversation.last();
        assert_eq!(greeting.id, 1);
        assert_eq!(greeting.sender, Sender::Bot);
        assert_eq!(greeting.text, classifier::INITIAL_GREETING);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut conversation = Conversation::start();
        conversation.append_user("hola".to_string());
        conversation.append_bot("¡Hola!".to_string());
        conversation.append_user("qué tal".to_string());

        let ids: Vec<u64> = conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_append_order_preserved() {
        let mut conversation = Conversation::start();
        conversation.append_user("uno".to_string());
        conversation.append_user("dos".to_string());
        let texts: Vec<&str> = conversation
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["uno", "dos"]);
    }

    #[test]
    fn test_reset_leaves_single_personalized_greeting() {
        let mut conversation = Conversation::start();
        conversation.append_user("hola".to_string());
        conversation.append_bot("¡Hola Ana!".to_string());

        conversation.reset("Ana");
        assert_eq!(conversation.messages().len(), 1);
        let greeting = conversation.last();
        assert_eq!(greeting.id, 1);
        assert_eq!(greeting.sender, Sender::Bot);
        assert_eq!(greeting.text, "¡Hola Ana! ¿En qué puedo ayudarte hoy?");
    }
}
