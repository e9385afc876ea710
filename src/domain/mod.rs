//! Domain layer: chat entities, the ghost-message lifecycle and shell state.

pub mod admin_gate;
pub mod clock;
pub mod composer;
pub mod effects;
pub mod events;
pub mod expiry;
pub mod message;
pub mod message_store;
pub mod shell_state;
pub mod timeline;
pub mod widgets;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
