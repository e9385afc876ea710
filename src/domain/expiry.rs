//! Delayed removal queue for ephemeral messages.

use std::{cmp::Reverse, collections::BinaryHeap};

use chrono::{DateTime, Duration, Utc};

use super::message::{Message, MessageId};

/// Default lifetime of an ephemeral message, in seconds.
pub const DEFAULT_EPHEMERAL_TTL_SECS: i64 = 30;

#[derive(Debug, Clone)]
pub struct ExpiryQueue {
    ttl: Duration,
    pending: BinaryHeap<Reverse<(DateTime<Utc>, MessageId)>>,
}

impl Default for ExpiryQueue {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_EPHEMERAL_TTL_SECS))
    }
}

impl ExpiryQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            pending: BinaryHeap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Schedules removal of `message` at `created_at + ttl`.
    ///
    /// Non-ephemeral messages are ignored and yield `None`.
    pub fn schedule_message(&mut self, message: &Message) -> Option<DateTime<Utc>> {
        if !message.is_ephemeral() {
            return None;
        }

        let due_at = message.created_at() + self.ttl;
        self.schedule(message.id(), due_at);
        Some(due_at)
    }

    pub fn schedule(&mut self, id: MessageId, due_at: DateTime<Utc>) {
        self.pending.push(Reverse((due_at, id)));
    }

    /// Pops every entry whose deadline is at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: DateTime<Utc>) -> Vec<MessageId> {
        let mut due = Vec::new();

        while let Some(Reverse((due_at, id))) = self.pending.peek().copied() {
            if due_at > now {
                break;
            }
            self.pending.pop();
            due.push(id);
        }

        due
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.peek().map(|Reverse((due_at, _))| *due_at)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
