use std::sync::{Mutex, PoisonError};

/// Where `HeroService` reports what it did.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

/// Process-wide list of human-readable status messages.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl MessageSink for MessageService {
    fn add(&self, message: String) {
        tracing::debug!(%message, "message added");
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}
