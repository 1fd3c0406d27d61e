use std::string::String;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use microlog_api::DebugLog;

/// A single call into a [`DebugLog`] backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    /// [`DebugLog::log_str`]
    Str(String),
    /// [`DebugLog::log_i32`]
    Int(i32),
    /// [`DebugLog::log_f64`]
    Float(f64),
}

/// A [`DebugLog`] backend for testing that stores every call in memory.
///
/// Clones share the same storage, so a clone can be handed to the code under test while the original is kept for
/// inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingLog {
    calls: Arc<Mutex<Vec<Call>>>,
    inits: Arc<AtomicUsize>,
}

impl RecordingLog {
    /// Creates a backend with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns and clears all calls recorded so far.
    pub fn take_calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().drain(..).collect()
    }

    /// Returns the text the recorded calls would print, with numbers in their `Display` form.
    pub fn rendered(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| match call {
                Call::Str(text) => text.clone(),
                Call::Int(value) => std::format!("{value}"),
                Call::Float(value) => std::format!("{value}"),
            })
            .collect()
    }

    /// Returns how often [`DebugLog::init`] was called.
    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::Relaxed)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DebugLog for RecordingLog {
    fn init(&self) {
        self.inits.fetch_add(1, Ordering::Relaxed);
    }

    fn log_str(&self, text: &str) {
        self.record(Call::Str(text.into()));
    }

    fn log_i32(&self, value: i32) {
        self.record(Call::Int(value));
    }

    fn log_f64(&self, value: f64) {
        self.record(Call::Float(value));
    }
}
