//! Message store paired with the expiry queue for its ghost messages.

use chrono::{DateTime, Duration, Utc};

use super::{
    expiry::ExpiryQueue,
    message::{Message, MessageId},
    message_store::MessageStore,
};

#[derive(Debug, Clone, Default)]
pub struct ChatTimeline {
    store: MessageStore,
    expiry: ExpiryQueue,
}

impl ChatTimeline {
    pub fn new(ephemeral_ttl: Duration) -> Self {
        Self {
            store: MessageStore::default(),
            expiry: ExpiryQueue::new(ephemeral_ttl),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn expiry(&self) -> &ExpiryQueue {
        &self.expiry
    }

    /// Sends through the store and schedules expiry for ghost messages.
    pub fn post(
        &mut self,
        content: &str,
        author: &str,
        ephemeral: bool,
        now: DateTime<Utc>,
    ) -> Option<Message> {
        let message = self.store.send(content, author, ephemeral, now)?;
        self.expiry.schedule_message(&message);
        Some(message)
    }

    pub fn react(&mut self, id: MessageId, marker: &str) -> bool {
        self.store.react(id, marker)
    }

    pub fn remove(&mut self, id: MessageId) -> Option<Message> {
        self.store.remove(id)
    }

    /// Fires every due expiry and returns the messages actually removed.
    ///
    /// Entries whose message is already gone are consumed silently.
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> Vec<Message> {
        self.expiry
            .drain_due(now)
            .into_iter()
            .filter_map(|id| self.store.remove(id))
            .collect()
    }

    /// Time left before `message` expires, or `None` for permanent messages.
    pub fn remaining(&self, message: &Message, now: DateTime<Utc>) -> Option<Duration> {
        message.is_ephemeral().then(|| {
            let left = message.created_at() + self.expiry.ttl() - now;
            left.max(Duration::zero())
        })
    }
}
