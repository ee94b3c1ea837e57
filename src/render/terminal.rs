use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use tracing::warn;

use super::{FrameRenderer, Renderer};
use crate::game::GameState;
use crate::metrics::GameMetrics;

pub type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Raw mode and the alternate screen, held for as long as the guard lives.
///
/// Dropping the guard puts the terminal back, so every way out of a
/// session (game over, quit, interrupt, error or panic) restores it.
pub struct TerminalGuard {
    terminal: TuiTerminal,
    restored: bool,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        match Self::setup_screen() {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(err) => {
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    fn setup_screen() -> Result<TuiTerminal> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    }

    pub fn terminal_mut(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }

    /// Restore the terminal now; later calls and the drop are no-ops
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Full-screen ratatui renderer drawing to stderr
pub struct TuiRenderer {
    guard: TerminalGuard,
    renderer: Renderer,
}

impl TuiRenderer {
    pub fn new(guard: TerminalGuard) -> Self {
        Self {
            guard,
            renderer: Renderer::new(),
        }
    }

    /// Give the terminal back before printing plain output
    pub fn finish(mut self) -> Result<()> {
        self.guard.restore()
    }
}

impl FrameRenderer for TuiRenderer {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        let renderer = &self.renderer;
        self.guard
            .terminal_mut()
            .draw(|frame| renderer.render(frame, state, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
