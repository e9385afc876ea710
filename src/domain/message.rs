use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Opaque message identity, unique across the messages held by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generates a fresh time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
    is_ephemeral: bool,
    reactions: Vec<String>,
}

impl Message {
    pub(super) fn new(
        content: String,
        author: String,
        created_at: DateTime<Utc>,
        is_ephemeral: bool,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            content,
            author,
            created_at,
            is_ephemeral,
            reactions: Vec::new(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_ephemeral(&self) -> bool {
        self.is_ephemeral
    }

    pub fn reactions(&self) -> &[String] {
        &self.reactions
    }

    pub(super) fn push_reaction(&mut self, marker: String) {
        self.reactions.push(marker);
    }
}
