//! Terminal setup and teardown

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};

use crate::error::Result;

/// Terminal configuration
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfig {
    /// Enable raw mode
    pub raw_mode: bool,

    /// Use alternate screen
    pub alternate_screen: bool,

    /// Hide the cursor until a selected panel shows it
    pub hide_cursor: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            raw_mode: true,
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// Owns the terminal state for the lifetime of the UI.
///
/// The screen is restored in `Drop`, so an error or panic unwinding out of
/// the main loop still leaves the caller's shell usable.
pub struct TerminalManager {
    backend: CrosstermBackend<Stdout>,
    config: TerminalConfig,
}

impl TerminalManager {
    /// Initialize the terminal with the given configuration
    pub fn new(config: TerminalConfig) -> Result<Self> {
        if config.raw_mode {
            enable_raw_mode()?;
        }

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }

        let mut backend = CrosstermBackend::new(stdout);
        if config.hide_cursor {
            backend.hide_cursor()?;
        }

        Ok(Self { backend, config })
    }

    pub fn backend_mut(&mut self) -> &mut CrosstermBackend<Stdout> {
        &mut self.backend
    }

    /// Current terminal size as (cols, lines)
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.backend.size()?;
        Ok((size.width, size.height))
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        // Restore terminal state; best effort on the way out.
        let _ = self.backend.show_cursor();
        if self.config.alternate_screen {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
        if self.config.raw_mode {
            let _ = disable_raw_mode();
        }
    }
}
