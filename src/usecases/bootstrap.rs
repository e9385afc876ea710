use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::clock::{Clock, SystemClock},
    infra::{
        self, config, error::AppError, secrets, storage_layout::StorageLayout,
        stubs::NoopPersistence,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        session::open_session,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads config, starts file logging and resolves the admin secret.
///
/// The returned guard keeps the log writer alive; drop it last.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let config = config::load(config_path)?;
    let layout = StorageLayout::resolve(&config.logging)?;
    layout.ensure_dirs()?;
    let guard = infra::logging::init(&config.logging, &layout)?;

    tracing::info!(log_dir = %layout.log_dir.display(), "logging initialized");

    let context = build_context(config)?;
    Ok((context, guard))
}

fn build_context(config: infra::config::AppConfig) -> Result<AppContext, AppError> {
    let admin_gate = secrets::resolve_admin_gate(&config.admin)?;
    Ok(AppContext::new(config, admin_gate))
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let clock = SystemClock;
    let state = open_session(&context.config.chat, clock.now());
    let orchestrator = DefaultShellOrchestrator::new(
        state,
        &context.config.chat,
        context.admin_gate.clone(),
        NoopPersistence,
        clock,
    );

    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(orchestrator),
    }
}
