//! Terminal output: the per-tick frame and the closing summary

pub mod renderer;
pub mod summary;
pub mod terminal;

pub use renderer::Renderer;
pub use summary::summary;
pub use terminal::{TerminalGuard, TuiRenderer};

use anyhow::Result;

use crate::game::GameState;
use crate::metrics::GameMetrics;

/// Produces one full redraw per tick
pub trait FrameRenderer {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;
}
