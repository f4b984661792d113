//! One-shot scheduling of delayed bot replies.
//!
//! Each send spawns a sleep task that posts the prepared reply back to the
//! event loop over an mpsc channel. Replies carry the generation they were
//! scheduled under; a reset bumps the generation, so stale replies are
//! dropped at delivery instead of appending into the fresh conversation.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

/// A bot reply waiting out its delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReply {
    /// Scheduling generation at the time of the send.
    pub generation: u64,
    /// Fully rendered reply text.
    pub text: String,
}

/// Spawns reply timers and tracks the current scheduling generation.
pub struct ReplyScheduler {
    delay: Duration,
    generation: u64,
    tx: mpsc::UnboundedSender<ScheduledReply>,
}

impl ReplyScheduler {
    /// Create a scheduler plus the receiving end the event loop drains.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ScheduledReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                generation: 0,
                tx,
            },
            rx,
        )
    }

    /// Queue `text` for delivery after the configured delay.
    ///
    /// Multiple pending replies are independent and arrive in the order they
    /// were scheduled.
    pub fn schedule(&self, text: String) {
        let tx = self.tx.clone();
        let reply = ScheduledReply {
            generation: self.generation,
            text,
        };
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A closed receiver means the session already ended.
            let _ = tx.send(reply);
        });
    }

    /// Invalidate every reply scheduled so far.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, "pending replies invalidated");
    }

    /// Whether a delivered reply was scheduled after the last invalidation.
    pub fn is_current(&self, reply: &ScheduledReply) -> bool {
        reply.generation == self.generation
    }
}
