//! Use case for appending reaction markers.

use crate::domain::{message::MessageId, timeline::ChatTimeline};

/// Marker bound to the quick-react key.
pub const THUMBS_UP: &str = "👍";

/// Appends `marker` to message `id`. Unknown ids are ignored.
pub fn react(timeline: &mut ChatTimeline, id: MessageId, marker: &str) -> bool {
    let applied = timeline.react(id, marker);
    if applied {
        tracing::debug!(message_id = %id, marker, "reaction added");
    } else {
        tracing::debug!(message_id = %id, "reaction target no longer exists");
    }
    applied
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn adds_marker_to_existing_message() {
        let mut timeline = ChatTimeline::default();
        let message = timeline.post("hi", "Alice", false, Utc::now()).expect("stored");

        assert!(react(&mut timeline, message.id(), THUMBS_UP));
        assert_eq!(timeline.store().list()[0].reactions(), [THUMBS_UP]);
    }

    #[test]
    fn ignores_unknown_message() {
        let mut timeline = ChatTimeline::default();

        assert!(!react(&mut timeline, MessageId::generate(), THUMBS_UP));
        assert_eq!(timeline.store().reaction_count(), 0);
    }
}
