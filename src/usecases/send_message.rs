//! Use case for posting a message to the chat timeline.
//!
//! Sending validates the content, stores the message (scheduling expiry for
//! ghost messages) and hands a record to the optional persistence
//! collaborator. Persistence is fire-and-forget: failures are logged and never
//! undo the in-memory send.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::domain::{message::Message, timeline::ChatTimeline};

/// Command to post a message as `author`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub content: String,
    pub author: String,
    pub ephemeral: bool,
}

/// What the persistence collaborator receives for each sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistRecord {
    pub content: String,
    pub author_id: String,
    pub is_ephemeral: bool,
}

/// Domain-level errors for the send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Content is empty after trimming whitespace.
    EmptyMessage,
}

/// Optional external store for sent messages.
pub trait MessagePersistence {
    /// Persists one sent message.
    ///
    /// # Errors
    /// Any backend failure. Callers log it and move on.
    fn persist(&mut self, record: &PersistRecord) -> Result<()>;
}

impl<T: MessagePersistence + ?Sized> MessagePersistence for &mut T {
    fn persist(&mut self, record: &PersistRecord) -> Result<()> {
        (**self).persist(record)
    }
}

/// Sends a message into `timeline`.
///
/// # Errors
/// Returns `SendMessageError::EmptyMessage` for empty or whitespace-only
/// content; the timeline is left untouched.
pub fn send_message(
    timeline: &mut ChatTimeline,
    persistence: &mut dyn MessagePersistence,
    command: SendMessageCommand,
    now: DateTime<Utc>,
) -> Result<Message, SendMessageError> {
    let message = timeline
        .post(&command.content, &command.author, command.ephemeral, now)
        .ok_or(SendMessageError::EmptyMessage)?;

    tracing::debug!(
        message_id = %message.id(),
        ephemeral = message.is_ephemeral(),
        "message sent"
    );

    let record = PersistRecord {
        content: command.content,
        author_id: command.author,
        is_ephemeral: command.ephemeral,
    };
    if let Err(error) = persistence.persist(&record) {
        tracing::warn!(
            message_id = %message.id(),
            error = %error,
            "message persistence failed, keeping in-memory copy"
        );
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::infra::stubs::RecordingPersistence;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp should be valid")
    }

    fn command(content: &str, ephemeral: bool) -> SendMessageCommand {
        SendMessageCommand {
            content: content.to_owned(),
            author: "You".to_owned(),
            ephemeral,
        }
    }

    #[test]
    fn rejects_empty_message_text() {
        let mut timeline = ChatTimeline::default();
        let mut persistence = RecordingPersistence::default();

        let result = send_message(&mut timeline, &mut persistence, command("", false), t0());

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(timeline.store().is_empty());
        assert!(persistence.records.is_empty());
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let mut timeline = ChatTimeline::default();
        let mut persistence = RecordingPersistence::default();

        let result = send_message(
            &mut timeline,
            &mut persistence,
            command("   \n\t  ", true),
            t0(),
        );

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(timeline.expiry().is_empty());
    }

    #[test]
    fn stores_message_and_forwards_record() {
        let mut timeline = ChatTimeline::default();
        let mut persistence = RecordingPersistence::default();

        let message = send_message(&mut timeline, &mut persistence, command("hi", true), t0())
            .expect("send should succeed");

        assert_eq!(timeline.store().list(), [message]);
        assert_eq!(
            persistence.records,
            vec![PersistRecord {
                content: "hi".to_owned(),
                author_id: "You".to_owned(),
                is_ephemeral: true,
            }]
        );
    }

    #[test]
    fn ghost_send_schedules_expiry() {
        let mut timeline = ChatTimeline::default();
        let mut persistence = RecordingPersistence::default();

        send_message(&mut timeline, &mut persistence, command("boo", true), t0())
            .expect("send should succeed");

        assert_eq!(
            timeline.expiry().next_due(),
            Some(t0() + Duration::seconds(30))
        );
    }

    #[test]
    fn persistence_failure_keeps_message() {
        let mut timeline = ChatTimeline::default();
        let mut persistence = RecordingPersistence {
            fail: true,
            ..RecordingPersistence::default()
        };

        let result = send_message(&mut timeline, &mut persistence, command("hi", false), t0());

        assert!(result.is_ok());
        assert_eq!(timeline.store().len(), 1);
        assert_eq!(persistence.records.len(), 1);
    }
}
