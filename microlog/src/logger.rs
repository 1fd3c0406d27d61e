//! Bridge from the [`log`] facade to a [`DebugLog`] backend.
//!
//! ```rust
//! use log::LevelFilter;
//! use microlog::logger::DebugLogger;
//! use microlog::test_helpers::RecordingLog;
//! use std::sync::LazyLock;
//!
//! static BACKEND: LazyLock<RecordingLog> = LazyLock::new(RecordingLog::new);
//! static LOGGER: LazyLock<DebugLogger<&RecordingLog>> =
//!     LazyLock::new(|| DebugLogger::new(&*BACKEND, LevelFilter::Info));
//!
//! LazyLock::force(&LOGGER).install().unwrap();
//!
//! log::info!(target: "interpreter", "allocated {} tensors", 12);
//! log::debug!("filtered out");
//!
//! assert_eq!(BACKEND.rendered(), "INFO interpreter: allocated 12 tensors\r\n");
//! ```

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use microlog_api::DebugLog;

use crate::printf::print_fmt;

/// A [`log::Log`] implementation printing records as `<LEVEL> <target>: <message>` lines to a [`DebugLog`] backend.
#[derive(Debug)]
pub struct DebugLogger<B> {
    backend: B,
    max_level: LevelFilter,
}

impl<B> DebugLogger<B> {
    /// Creates a logger printing every record up to `max_level` to `backend`.
    pub const fn new(backend: B, max_level: LevelFilter) -> Self {
        Self { backend, max_level }
    }

    /// Returns the backend records are printed to.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> DebugLogger<B>
where
    B: DebugLog + Send + Sync + 'static,
{
    /// Initializes the backend, registers this logger as the global [`log`] logger and applies its maximum level.
    ///
    /// Fails if a global logger was already set.
    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        self.backend.init();
        log::set_max_level(self.max_level);
        Ok(())
    }
}

impl<B> Log for DebugLogger<B>
where
    B: DebugLog + Send + Sync,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            print_fmt(
                &self.backend,
                format_args!("{} {}: {}", record.level(), record.target(), record.args()),
            );
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use log::{Level, LevelFilter, Log, Record};
    use pretty_assertions::assert_eq;

    use super::DebugLogger;
    use crate::test_helpers::{Call, RecordingLog};

    fn record(logger: &DebugLogger<RecordingLog>, level: Level, message: core::fmt::Arguments<'_>) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("micro_interpreter")
                .args(message)
                .build(),
        );
    }

    #[test]
    fn prints_level_target_and_message() {
        let backend = RecordingLog::new();
        let logger = DebugLogger::new(backend.clone(), LevelFilter::Trace);

        record(
            &logger,
            Level::Warn,
            format_args!("arena uses {} of {} bytes", 900, 1024),
        );

        assert_eq!(
            backend.calls(),
            [
                Call::Str("WARN micro_interpreter: arena uses 900 of 1024 bytes".into()),
                Call::Str("\r\n".into()),
            ]
        );
    }

    #[test]
    fn filters_by_level() {
        let backend = RecordingLog::new();
        let logger = DebugLogger::new(backend.clone(), LevelFilter::Warn);

        record(&logger, Level::Error, format_args!("kept"));
        record(&logger, Level::Info, format_args!("dropped"));
        record(&logger, Level::Trace, format_args!("dropped"));

        assert_eq!(backend.rendered(), "ERROR micro_interpreter: kept\r\n");
    }

    #[test]
    fn off_disables_everything() {
        let backend = RecordingLog::new();
        let logger = DebugLogger::new(backend.clone(), LevelFilter::Off);

        record(&logger, Level::Error, format_args!("dropped"));

        assert!(backend.calls().is_empty());
    }

    #[test]
    fn long_messages_are_split_into_cache_sized_chunks() {
        let backend = RecordingLog::new();
        let logger = DebugLogger::new(backend.clone(), LevelFilter::Info);
        let message = "m".repeat(100);

        record(&logger, Level::Info, format_args!("{message}"));

        let calls = backend.calls();
        // "INFO micro_interpreter: " is 24 bytes, 124 bytes of text in total.
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[0],
            Call::Str(std::format!("INFO micro_interpreter: {}", "m".repeat(40)))
        );
        assert_eq!(calls[1], Call::Str("m".repeat(60)));
        assert_eq!(calls[2], Call::Str("\r\n".into()));
    }
}
