//! Admin gate workflows: the in-shell code prompt and the `admin` CLI check.

use std::io;

use crate::domain::{
    admin_gate::AdminGate,
    shell_state::{Focus, ShellState},
};

const ACCESS_DENIED_NOTICE: &str = "Access denied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCheckOutcome {
    Unlocked,
    Denied,
    Aborted,
}

pub trait AdminTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()>;
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct StdTerminal;

impl AdminTerminal for StdTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        println!("{line}");
        Ok(())
    }

    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(code) => Ok(Some(code)),
            Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(source) => Err(source),
        }
    }
}

/// Checks the code typed into the shell prompt and opens the overlay on match.
///
/// The prompt is always cleared; a mismatch returns focus to the composer.
pub fn submit_admin_code(state: &mut ShellState, gate: &AdminGate) -> bool {
    let code = state.admin_prompt_mut().take();
    let unlocked = gate.check(&code);

    if unlocked {
        tracing::info!("admin overlay unlocked");
        state.clear_notice();
        state.set_focus(Focus::AdminOverlay);
    } else {
        tracing::warn!("admin code rejected");
        state.set_notice(ACCESS_DENIED_NOTICE);
        state.set_focus(Focus::Composer);
    }

    unlocked
}

/// Prompts once for the admin code without echo.
pub fn run_admin_check(
    terminal: &mut dyn AdminTerminal,
    gate: &AdminGate,
) -> io::Result<AdminCheckOutcome> {
    let Some(code) = terminal.prompt_secret("Admin code: ")? else {
        return Ok(AdminCheckOutcome::Aborted);
    };

    if gate.check(&code) {
        terminal.print_line("Admin overlay unlocked.")?;
        Ok(AdminCheckOutcome::Unlocked)
    } else {
        terminal.print_line("Access denied.")?;
        Ok(AdminCheckOutcome::Denied)
    }
}
