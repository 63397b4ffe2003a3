//! Core worker utilities

use crate::events::Event;
use tokio::sync::mpsc;

/// Event sending shared by the flow workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event; a closed UI is not an error for the worker.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}
