//! Session setup: builds the shell state a fresh chat window starts with.

use chrono::{DateTime, Duration, Utc};

use crate::{
    domain::{shell_state::ShellState, timeline::ChatTimeline},
    infra::config::ChatConfig,
};

const SYSTEM_AUTHOR: &str = "System";
const ASSISTANT_AUTHOR: &str = "Assistant";
const WELCOME_TEXT: &str = "Hi! Welcome to NovaSphere!";
const GHOST_HINT_TEXT: &str = "Try ghost mode 👻 (Ctrl+G)";

/// Ghost lifetimes are capped at one year so deadlines stay representable.
const MAX_EPHEMERAL_TTL_SECS: u64 = 365 * 24 * 60 * 60;

pub fn open_session(config: &ChatConfig, now: DateTime<Utc>) -> ShellState {
    let ttl = Duration::seconds(config.ephemeral_ttl_secs.min(MAX_EPHEMERAL_TTL_SECS) as i64);
    let mut timeline = ChatTimeline::new(ttl);

    if config.seed_greetings {
        timeline.post(WELCOME_TEXT, SYSTEM_AUTHOR, false, now);
        timeline.post(GHOST_HINT_TEXT, ASSISTANT_AUTHOR, true, now);
    }

    tracing::info!(
        seeded = timeline.store().len(),
        ephemeral_ttl_secs = config.ephemeral_ttl_secs,
        "chat session opened"
    );

    ShellState::new(timeline, now)
}
