//! Snake Arena - terminal snake with scripted opponents
//!
//! This library provides:
//! - Core simulation (game module): grid, agents, safety checks, heuristic, turn resolver
//! - Keyboard input (input module)
//! - TUI rendering (render module)
//! - The fixed-cadence session loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod menu;
pub mod metrics;
pub mod modes;
pub mod render;
