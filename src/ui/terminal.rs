//! Owns the real terminal while the NovaSphere desktop is on screen.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::Hide,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

type DesktopBackend = CrosstermBackend<Stdout>;

/// Raw-mode alternate screen for the chat desktop.
///
/// Dropping the session hands the terminal back in its original state, which
/// also covers the error paths out of the shell loop.
pub struct TerminalSession {
    terminal: Terminal<DesktopBackend>,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        Ok(Self {
            terminal: Terminal::new(DesktopBackend::new(stdout))?,
        })
    }

    /// Renders one desktop frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
