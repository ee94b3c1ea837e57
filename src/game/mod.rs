//! Core simulation for the snake arena
//!
//! This module contains all the game logic without any I/O or rendering dependencies:
//! the bordered grid, agent state, the safety checks and heuristic used by
//! scripted agents, and the turn resolver that advances every agent at once.

pub mod action;
pub mod config;
pub mod director;
pub mod engine;
pub mod grid;
pub mod safety;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, GameMode};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use grid::{BorderKind, Cell, Grid, Segment, HEIGHT, WIDTH};
pub use state::{Agent, AgentId, CollisionType, Control, GameState, Outcome, Position};
