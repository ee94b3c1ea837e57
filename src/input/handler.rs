use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// Character sent for Ctrl+C, which raw mode delivers as a key press
pub const INTERRUPT: char = '\u{3}';

/// What a polled character asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Turn(Direction),
    Quit,
    Interrupt,
}

impl KeyCommand {
    /// Recognizes `w a s d q` in either case and the interrupt character
    pub fn from_char(key: char) -> Option<KeyCommand> {
        if key == INTERRUPT {
            return Some(KeyCommand::Interrupt);
        }
        if key.eq_ignore_ascii_case(&'q') {
            return Some(KeyCommand::Quit);
        }
        Direction::from_key(key).map(KeyCommand::Turn)
    }
}

/// Translates terminal key events into the single-character key protocol
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<char> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(INTERRUPT);
        }

        match key.code {
            // Arrow keys alias WASD
            KeyCode::Up => Some('w'),
            KeyCode::Down => Some('s'),
            KeyCode::Left => Some('a'),
            KeyCode::Right => Some('d'),

            KeyCode::Esc => Some('q'),
            KeyCode::Char(c) if KeyCommand::from_char(c).is_some() => {
                Some(c.to_ascii_lowercase())
            }

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
