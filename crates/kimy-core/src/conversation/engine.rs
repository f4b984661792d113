//! Send/deliver/reset state machine for a chat session.
//!
//! `ChatEngine` owns the message log and the reply scheduler. All mutation
//! goes through it on a single task; the only cross-task traffic is the
//! scheduler's reply channel.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use kimy_types::message::Message;

use super::classifier;
use super::scheduler::{ReplyScheduler, ScheduledReply};
use super::state::Conversation;

/// Drives one conversation: appends user input, schedules scripted replies,
/// delivers them when their delay elapses, and resets the log.
pub struct ChatEngine {
    conversation: Conversation,
    scheduler: ReplyScheduler,
    display_name: String,
}

impl ChatEngine {
    /// Create an engine with a freshly greeted conversation.
    ///
    /// Returns the engine and the channel on which scheduled replies arrive;
    /// the caller is expected to feed received replies back into
    /// [`ChatEngine::deliver`].
    pub fn new(
        display_name: impl Into<String>,
        delay: Duration,
    ) -> (Self, UnboundedReceiver<ScheduledReply>) {
        let (scheduler, rx) = ReplyScheduler::new(delay);
        (
            Self {
                conversation: Conversation::start(),
                scheduler,
                display_name: display_name.into(),
            },
            rx,
        )
    }

    /// The conversation log.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Update the name used in personalized replies (after a profile save).
    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    /// Append a user message and schedule the bot's reply.
    ///
    /// Whitespace-only input is a no-op: nothing is appended and nothing is
    /// scheduled. The reply text is rendered here, with the display name
    /// current at send time.
    pub fn send(&mut self, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.conversation.append_user(text.to_string());
        let kind = classifier::classify(trimmed);
        self.scheduler
            .schedule(classifier::reply_text(kind, &self.display_name));
        info!(kind = ?kind, "bot reply scheduled");
        Some(self.conversation.last())
    }

    /// Deliver a scheduled reply, appending it unless a reset has
    /// invalidated it since it was scheduled.
    pub fn deliver(&mut self, reply: ScheduledReply) -> Option<&Message> {
        if !self.scheduler.is_current(&reply) {
            debug!("dropping reply scheduled before the last reset");
            return None;
        }
        Some(self.conversation.append_bot(reply.text))
    }

    /// Discard the conversation, leaving a single personalized greeting.
    ///
    /// Replies still in flight are invalidated and will never append.
    pub fn reset(&mut self) {
        self.scheduler.invalidate();
        self.conversation.reset(&self.display_name);
        info!("conversation reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kimy_types::message::Sender;

    const DELAY: Duration = Duration::from_millis(1000);

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_then_one_reply_after_delay() {
        let (mut engine, mut rx) = ChatEngine::new("usuario", DELAY);
        assert_eq!(engine.conversation().messages().len(), 1);

        let sent = engine.send("hola").unwrap();
        assert_eq!(sent.sender, Sender::User);
        assert_eq!(sent.id, 2);

        tokio::time::advance(DELAY).await;
        let reply = rx.recv().await.unwrap();
        let delivered = engine.deliver(reply).unwrap();
        assert_eq!(delivered.sender, Sender::Bot);
        assert_eq!(delivered.id, 3);
        assert_eq!(delivered.text, "¡Hola usuario! ¿En qué puedo ayudarte hoy?");

        // Exactly one reply per send.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_send_is_noop() {
        let (mut engine, mut rx) = ChatEngine::new("usuario", DELAY);
        assert!(engine.send("   ").is_none());
        assert_eq!(engine.conversation().messages().len(), 1);

        tokio::time::advance(DELAY).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_sends_queue_independent_replies() {
        let (mut engine, mut rx) = ChatEngine::new("Ana", DELAY);
        engine.send("hola");
        engine.send("nos vemos adiós");

        tokio::time::advance(DELAY).await;
        let first = engine.deliver(rx.recv().await.unwrap()).unwrap().clone();
        let second = engine.deliver(rx.recv().await.unwrap()).unwrap().clone();

        assert_eq!(first.text, "¡Hola Ana! ¿En qué puedo ayudarte hoy?");
        assert_eq!(second.text, "Adiós Ana! Espero que hablemos pronto.");
        assert_eq!(first.id + 1, second.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_in_flight_replies() {
        let (mut engine, mut rx) = ChatEngine::new("Ana", DELAY);
        engine.send("hola");
        engine.reset();
        assert_eq!(engine.conversation().messages().len(), 1);
        assert_eq!(engine.conversation().last().text, "¡Hola Ana! ¿En qué puedo ayudarte hoy?");

        tokio::time::advance(DELAY).await;
        let stale = rx.recv().await.unwrap();
        assert!(engine.deliver(stale).is_none());
        assert_eq!(engine.conversation().messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_stay_monotonic_across_reset() {
        let (mut engine, mut rx) = ChatEngine::new("Ana", DELAY);
        engine.send("hola");
        engine.reset();
        engine.send("qué tal");

        tokio::time::advance(DELAY).await;
        // Stale reply from before the reset, then the live one.
        assert!(engine.deliver(rx.recv().await.unwrap()).is_none());
        engine.deliver(rx.recv().await.unwrap()).unwrap();

        let ids: Vec<u64> = engine.conversation().messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_uses_display_name_at_send_time() {
        let (mut engine, mut rx) = ChatEngine::new("usuario", DELAY);
        engine.send("hola");
        engine.set_display_name("Ana");

        tokio::time::advance(DELAY).await;
        let delivered = engine.deliver(rx.recv().await.unwrap()).unwrap();
        assert_eq!(delivered.text, "¡Hola usuario! ¿En qué puedo ayudarte hoy?");
    }
}
