//! Captures the messages of a single level into an in-memory buffer.

use super::{Hook, HookEvent};
use crate::console::lock;
use crate::level::Level;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Copies every message emitted at exactly `level` into a shared buffer.
///
/// Cloning shares the buffer, so a test can keep one clone and register the other.
#[derive(Debug, Clone)]
pub struct BufferHook {
    id: String,
    level: Level,
    buffer: Arc<Mutex<String>>,
    count: Arc<AtomicUsize>,
}

impl BufferHook {
    #[must_use]
    pub fn new(id: impl Into<String>, level: Level) -> Self {
        Self {
            id: id.into(),
            level,
            buffer: Arc::new(Mutex::new(String::new())),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[must_use]
    pub fn contents(&self) -> String {
        lock(&self.buffer).clone()
    }

    /// Returns the captured text and clears the buffer and the message count.
    #[must_use]
    pub fn take(&self) -> String {
        let mut buffer = lock(&self.buffer);
        self.count.store(0, Ordering::Relaxed);
        std::mem::take(&mut *buffer)
    }

    /// Number of captured messages. A multi-line message counts once.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Hook for BufferHook {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, event: &HookEvent<'_>) -> bool {
        event.level == self.level
    }

    fn action(&self, event: &HookEvent<'_>) {
        let mut buffer = lock(&self.buffer);
        buffer.push_str(event.message);
        if !event.message.ends_with('\n') {
            buffer.push('\n');
        }
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
