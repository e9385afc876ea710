//! Use case layer: application workflows and orchestration.

pub mod admin;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod expire_messages;
pub mod react;
pub mod send_message;
pub mod session;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
