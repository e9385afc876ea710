use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{
        self,
        admin::{run_admin_check, AdminCheckOutcome, StdTerminal},
        bootstrap,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Admin => {
            let outcome = run_admin_check(&mut StdTerminal, &context.admin_gate)?;
            tracing::info!(outcome = ?outcome, "admin code check finished");
            if outcome != AdminCheckOutcome::Unlocked {
                anyhow::bail!("admin overlay stays locked");
            }
        }
    }

    Ok(())
}
