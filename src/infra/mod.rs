//! Infrastructure layer: adapters for config, logging, secrets and storage paths.

pub mod config;
pub mod error;
pub mod logging;
pub mod secrets;
pub mod storage_layout;
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
