//! Logging related system utilities.

pub use microlog_api::log::DebugLog;

#[cfg(not(target_os = "none"))]
use std::io::Write;

/// Implements the [`DebugLog`] trait.
///
/// [`DebugLog::init`] must be called exactly once before the first message on bare-metal targets.
#[derive(Debug, Default)]
pub struct Log;

impl DebugLog for Log {
    fn init(&self) {
        #[cfg(target_os = "none")]
        rtt_target::rtt_init_print!();
    }

    fn log_str(&self, text: &str) {
        #[cfg(not(target_os = "none"))]
        // this is a logger, ignore any errors writing
        let _ = std::io::stdout().write_all(text.as_bytes());

        #[cfg(target_os = "none")]
        // `"{text}"` _would_ work, except `rtt_target::rprint!` has a buggy macro arm that bypasses the formatting
        // infrastructure on a single expression.
        rtt_target::rprint!("{}", text);
    }

    fn log_i32(&self, value: i32) {
        #[cfg(not(target_os = "none"))]
        let _ = std::write!(std::io::stdout(), "{value}");

        #[cfg(target_os = "none")]
        rtt_target::rprint!("{}", value);
    }

    fn log_f64(&self, value: f64) {
        #[cfg(not(target_os = "none"))]
        let _ = std::write!(std::io::stdout(), "{value}");

        #[cfg(target_os = "none")]
        rtt_target::rprint!("{}", value);
    }
}
