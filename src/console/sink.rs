//! Sinks are plain `std::io::Write` values. A console owns its sink behind a mutex so
//! every line is written with a single `write_all` and never interleaves with another.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared, lock-protected sink. Clones of a console write through the same handle.
pub(crate) type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

pub(crate) fn shared(sink: impl Write + Send + 'static) -> SharedSink {
    let sink: Box<dyn Write + Send> = Box::new(sink);
    Arc::new(Mutex::new(sink))
}

/// A panicking hook poisons the lock it held. The protected data is still consistent
/// (a map or a byte sink), so later callers keep using it.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory sink. Cloning shares the buffer, so one clone can be handed to a console
/// and the other inspected.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        lock(&self.buffer).clone()
    }

    /// Buffer contents as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buffer)).into_owned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.buffer).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.buffer).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.buffer).clear();
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.buffer).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
