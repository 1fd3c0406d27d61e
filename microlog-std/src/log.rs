//! Logging related system utilities.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

pub use microlog_api::log::DebugLog;

/// Implements the [`DebugLog`] trait by printing to standard output.
#[derive(Debug, Default)]
pub struct Log;

impl DebugLog for Log {
    /// Prints to [`std::io::stdout`].
    fn log_str(&self, text: &str) {
        write_str(&mut std::io::stdout().lock(), text);
    }

    fn log_i32(&self, value: i32) {
        write_i32(&mut std::io::stdout().lock(), value);
    }

    fn log_f64(&self, value: f64) {
        write_f64(&mut std::io::stdout().lock(), value);
    }
}

/// Implements the [`DebugLog`] trait on top of any [`Write`] implementation, e.g. a serial port device file.
///
/// # Examples
///
/// ```rust
/// use microlog::{MicroErrorReporter, report};
/// use microlog_std::WriterLog;
///
/// let reporter = MicroErrorReporter::new(WriterLog::new(Vec::new()));
/// report!(reporter, "%s: %d", "status", 7);
///
/// let bytes = reporter.backend().take_writer();
/// assert_eq!(bytes, b"status: 7\r\n");
/// ```
#[derive(Debug, Default)]
pub struct WriterLog<W> {
    writer: Mutex<W>,
}

impl<W> WriterLog<W>
where
    W: Write,
{
    /// Creates a backend writing into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the backend, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the writer.
    fn with_writer(&self, f: impl FnOnce(&mut W)) {
        // A panic while writing leaves at worst a partial line, keep logging.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *writer);
    }
}

impl<W> WriterLog<W>
where
    W: Write + Default,
{
    /// Replaces the writer with a fresh default one, returning the old one.
    pub fn take_writer(&self) -> W {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        core::mem::take(&mut *writer)
    }
}

impl<W> DebugLog for WriterLog<W>
where
    W: Write,
{
    fn log_str(&self, text: &str) {
        self.with_writer(|writer| write_str(writer, text));
    }

    fn log_i32(&self, value: i32) {
        self.with_writer(|writer| write_i32(writer, value));
    }

    fn log_f64(&self, value: f64) {
        self.with_writer(|writer| write_f64(writer, value));
    }
}

// this is a logger, ignore any errors writing

fn write_str(writer: &mut impl Write, text: &str) {
    let _ = writer.write_all(text.as_bytes());
}

fn write_i32(writer: &mut impl Write, value: i32) {
    let _ = std::write!(writer, "{value}");
}

fn write_f64(writer: &mut impl Write, value: f64) {
    let _ = std::write!(writer, "{value}");
}
