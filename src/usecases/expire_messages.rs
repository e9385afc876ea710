//! Fires due ghost-message expiries and maintains their ash effects.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::{effects::AshBurst, shell_state::ShellState};

/// Removes every ghost message whose lifetime ended and spawns one ash burst
/// per removal. Finished bursts are pruned in the same pass.
///
/// Returns how many messages expired.
pub fn expire_due<R: Rng + ?Sized>(
    state: &mut ShellState,
    rng: &mut R,
    now: DateTime<Utc>,
) -> usize {
    let expired = state.timeline_mut().expire_due(now);

    for message in &expired {
        tracing::info!(
            message_id = %message.id(),
            reactions = message.reactions().len(),
            "ghost message expired"
        );
        state.ash_mut().push(AshBurst::spawn(now, rng));
    }

    let pruned = state.ash_mut().prune(now);
    if pruned > 0 {
        tracing::trace!(pruned, "ash bursts cleared");
    }

    expired.len()
}
