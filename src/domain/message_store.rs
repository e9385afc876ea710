//! Ordered, session-scoped message list.
//!
//! The store is the only write path for chat messages. Operations on ids that
//! are no longer held are silent no-ops, so late timer callbacks or reactions
//! targeting a removed message never fail.

use chrono::{DateTime, Utc};

use super::message::{Message, MessageId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Appends a new message and returns a copy of it.
    ///
    /// Returns `None` without touching the store when `content` is empty or
    /// whitespace-only.
    pub fn send(
        &mut self,
        content: &str,
        author: &str,
        ephemeral: bool,
        now: DateTime<Utc>,
    ) -> Option<Message> {
        if content.trim().is_empty() {
            return None;
        }

        let mut message = Message::new(content.to_owned(), author.to_owned(), now, ephemeral);
        while self.get(message.id()).is_some() {
            message = Message::new(content.to_owned(), author.to_owned(), now, ephemeral);
        }

        self.messages.push(message.clone());
        Some(message)
    }

    /// Removes the message with `id`, returning it if it was present.
    pub fn remove(&mut self, id: MessageId) -> Option<Message> {
        let index = self.position(id)?;
        Some(self.messages.remove(index))
    }

    /// Appends `marker` to the reactions of `id`. Returns false if absent.
    pub fn react(&mut self, id: MessageId, marker: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.messages[index].push_reaction(marker.to_owned());
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| message.id() == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn ephemeral_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.is_ephemeral())
            .count()
    }

    pub fn reaction_count(&self) -> usize {
        self.messages
            .iter()
            .map(|message| message.reactions().len())
            .sum()
    }

    fn position(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|message| message.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp should be valid")
    }

    #[test]
    fn send_appends_message_with_fresh_id() {
        let mut store = MessageStore::default();
        store.send("first", "Alice", false, now());
        let before: Vec<MessageId> = store.list().iter().map(Message::id).collect();

        let message = store
            .send("second", "Alice", false, now())
            .expect("non-empty content should be accepted");

        assert_eq!(store.len(), 2);
        assert!(!before.contains(&message.id()));
        assert_eq!(store.list()[1].id(), message.id());
    }

    #[test]
    fn send_ignores_empty_content() {
        let mut store = MessageStore::default();

        assert!(store.send("", "Alice", false, now()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn send_ignores_whitespace_only_content() {
        let mut store = MessageStore::default();

        assert!(store.send("  \n\t ", "Alice", true, now()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn send_keeps_content_as_typed() {
        let mut store = MessageStore::default();

        let message = store
            .send("  padded  ", "Alice", false, now())
            .expect("message should be stored");

        assert_eq!(message.content(), "  padded  ");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = MessageStore::default();
        for text in ["a", "b", "c"] {
            store.send(text, "Alice", false, now());
        }

        let contents: Vec<&str> = store.list().iter().map(Message::content).collect();

        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_twice_is_same_as_once() {
        let mut store = MessageStore::default();
        let keep = store.send("keep", "Alice", false, now()).expect("stored");
        let gone = store.send("gone", "Alice", false, now()).expect("stored");

        assert!(store.remove(gone.id()).is_some());
        let after_first = store.clone();
        assert!(store.remove(gone.id()).is_none());

        assert_eq!(store, after_first);
        assert_eq!(store.list()[0].id(), keep.id());
    }

    #[test]
    fn react_appends_exactly_one_marker() {
        let mut store = MessageStore::default();
        let message = store.send("hi", "Alice", false, now()).expect("stored");

        assert!(store.react(message.id(), "👍"));

        let stored = store.get(message.id()).expect("message still present");
        assert_eq!(stored.reactions(), ["👍".to_owned()]);
    }

    #[test]
    fn react_allows_duplicates_in_append_order() {
        let mut store = MessageStore::default();
        let message = store.send("hi", "Alice", false, now()).expect("stored");

        store.react(message.id(), "👍");
        store.react(message.id(), "🔥");
        store.react(message.id(), "👍");

        let stored = store.get(message.id()).expect("message still present");
        assert_eq!(stored.reactions(), ["👍", "🔥", "👍"]);
        assert_eq!(store.reaction_count(), 3);
    }

    #[test]
    fn react_on_unknown_id_leaves_store_unchanged() {
        let mut store = MessageStore::default();
        store.send("hi", "Alice", false, now());
        let snapshot = store.clone();

        assert!(!store.react(MessageId::generate(), "👍"));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn react_after_remove_is_noop() {
        let mut store = MessageStore::default();
        let message = store.send("bye", "Alice", true, now()).expect("stored");
        store.remove(message.id());

        assert!(!store.react(message.id(), "👍"));
        assert!(store.is_empty());
    }

    #[test]
    fn send_react_remove_scenario() {
        let mut store = MessageStore::default();

        let message = store.send("hi", "Alice", false, now()).expect("stored");
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].content(), "hi");
        assert!(store.list()[0].reactions().is_empty());

        store.react(message.id(), "👍");
        assert_eq!(store.list()[0].reactions(), ["👍"]);

        store.remove(message.id());
        assert!(store.list().is_empty());
    }

    #[test]
    fn ephemeral_count_tracks_ghost_messages() {
        let mut store = MessageStore::default();
        store.send("visible", "Alice", false, now());
        store.send("ghost", "Alice", true, now());

        assert_eq!(store.ephemeral_count(), 1);
    }
}
