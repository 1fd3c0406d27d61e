//! Std debug log backend for microlog.
//!
//! This provides the [`DebugLog`](microlog_api::DebugLog) channel on hosted platforms, using the std library.

#![forbid(unsafe_code)]

pub mod log;

pub use log::{Log, WriterLog};
