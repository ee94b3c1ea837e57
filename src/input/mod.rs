//! Keyboard input: terminal events in, single characters out

pub mod handler;
pub mod reader;

pub use handler::{InputHandler, KeyCommand, INTERRUPT};
pub use reader::{spawn_key_pump, ChannelKeyReader, KeyReader};
