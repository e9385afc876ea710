use crate::{domain::admin_gate::AdminGate, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub admin_gate: AdminGate,
}

impl AppContext {
    pub fn new(config: AppConfig, admin_gate: AdminGate) -> Self {
        Self { config, admin_gate }
    }
}
