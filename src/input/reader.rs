use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::warn;

use super::handler::InputHandler;

/// Non-blocking source of key characters
pub trait KeyReader {
    /// Next pending character, or `None` right away if nothing is waiting
    fn poll_key(&mut self) -> Option<char>;
}

/// Reader fed by a background task over a channel
pub struct ChannelKeyReader {
    rx: UnboundedReceiver<char>,
}

impl ChannelKeyReader {
    pub fn new(rx: UnboundedReceiver<char>) -> Self {
        Self { rx }
    }
}

impl KeyReader for ChannelKeyReader {
    fn poll_key(&mut self) -> Option<char> {
        self.rx.try_recv().ok()
    }
}

/// Spawn a task forwarding terminal key presses into a [`ChannelKeyReader`].
///
/// The task ends when the reader is dropped or the event stream fails.
pub fn spawn_key_pump() -> (ChannelKeyReader, JoinHandle<()>) {
    let (tx, rx) = unbounded_channel();

    let handle = tokio::spawn(async move {
        let handler = InputHandler::new();
        let mut events = EventStream::new();

        while let Some(event) = events.next().await {
            match event {
                // Only process key press events, not release
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(c) = handler.handle_key_event(key) {
                        if tx.send(c).is_err() {
                            break;
                        }
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "terminal event stream failed");
                    break;
                }
            }
        }
    });

    (ChannelKeyReader::new(rx), handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_reader_drains_in_order() {
        let (tx, rx) = unbounded_channel();
        let mut reader = ChannelKeyReader::new(rx);

        assert_eq!(reader.poll_key(), None);

        tx.send('w').unwrap();
        tx.send('a').unwrap();
        assert_eq!(reader.poll_key(), Some('w'));
        assert_eq!(reader.poll_key(), Some('a'));
        assert_eq!(reader.poll_key(), None);

        drop(tx);
        assert_eq!(reader.poll_key(), None);
    }
}
