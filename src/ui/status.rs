//! Status region text that clears itself after a fixed delay.

use std::time::{Duration, Instant};

/// One-shot message with a restartable deadline.
#[derive(Debug)]
pub struct TransientMessage {
    text: String,
    duration: Duration,
    deadline: Option<Instant>,
}

impl TransientMessage {
    pub fn new(duration: Duration) -> Self {
        Self {
            text: String::new(),
            duration,
            deadline: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show `text` and (re)start the countdown from `now`.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.deadline = Some(now + self.duration);
    }

    /// Clear the text if the deadline has passed. Returns true if it cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.text.clear();
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the message clears, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
