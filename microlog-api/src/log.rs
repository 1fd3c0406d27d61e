//! Traits for outputting primitive log values.

/// `DebugLog` is the raw output channel of a platform (serial port, RTT, semihosting, standard output, ...).
///
/// Implementations render each value and forward it as-is. They do no buffering or line handling of their own and
/// have no way to signal failure.
pub trait DebugLog {
    /// Initializes any state the channel needs before the first write.
    fn init(&self) {
        // noöp
    }

    /// Outputs a fragment of text.
    fn log_str(&self, text: &str);

    /// Outputs a signed 32-bit integer.
    fn log_i32(&self, value: i32);

    /// Outputs a double-precision float.
    fn log_f64(&self, value: f64);
}

impl<T> DebugLog for &T
where
    T: DebugLog + ?Sized,
{
    fn init(&self) {
        (**self).init()
    }

    fn log_str(&self, text: &str) {
        (**self).log_str(text)
    }

    fn log_i32(&self, value: i32) {
        (**self).log_i32(value)
    }

    fn log_f64(&self, value: f64) {
        (**self).log_f64(value)
    }
}
