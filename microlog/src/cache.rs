//! The bounded staging buffer for literal text.

use microlog_api::DebugLog;

/// Capacity of the [`OutputCache`] in bytes.
pub const OUTPUT_CACHE_SIZE: usize = 64;

/// Emitted after every message.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Collects literal text and hands it to a [`DebugLog`] backend in chunks of at most [`OUTPUT_CACHE_SIZE`] bytes.
///
/// The cache flushes itself as soon as it is full. Anything left over must be written out with
/// [`flush`](Self::flush), dropping the cache discards it.
///
/// Only whole characters are stored, a character that does not fit in the remaining space flushes the cache first.
/// This keeps every flushed chunk valid UTF-8.
#[derive(Debug)]
pub struct OutputCache<'b, B>
where
    B: DebugLog + ?Sized,
{
    backend: &'b B,
    buffer: heapless::String<OUTPUT_CACHE_SIZE>,
}

impl<'b, B> OutputCache<'b, B>
where
    B: DebugLog + ?Sized,
{
    /// Creates an empty cache writing into `backend`.
    pub fn new(backend: &'b B) -> Self {
        Self {
            backend,
            buffer: heapless::String::new(),
        }
    }

    /// Returns the number of bytes waiting to be flushed.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing is waiting to be flushed.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends a character, flushing before it if it does not fit and after it if the cache is then full.
    pub fn push(&mut self, character: char) {
        if OUTPUT_CACHE_SIZE - self.buffer.len() < character.len_utf8() {
            self.flush();
        }

        // Cannot fail, there is room for at least one character after the check above.
        let _ = self.buffer.push(character);

        if self.buffer.len() == OUTPUT_CACHE_SIZE {
            self.flush();
        }
    }

    /// Appends every character of `text`.
    pub fn push_str(&mut self, text: &str) {
        text.chars().for_each(|character| self.push(character));
    }

    /// Hands the pending text to the backend and empties the cache.
    ///
    /// Does nothing if the cache is empty.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        self.backend.log_str(&self.buffer);
        self.buffer.clear();
    }
}

impl<B> core::fmt::Write for OutputCache<'_, B>
where
    B: DebugLog + ?Sized,
{
    fn write_str(&mut self, text: &str) -> core::fmt::Result {
        self.push_str(text);
        Ok(())
    }
}
