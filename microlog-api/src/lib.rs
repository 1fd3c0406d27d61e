//! The microlog API.
//!
//! Defines the primitive [`DebugLog`] backend a platform provides and the [`ErrorReporter`] capability exposed to
//! code that wants to report formatted messages.

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

mod arg;
pub mod log;
pub mod reporter;

pub use arg::{Arg, ArgKind};
pub use log::DebugLog;
pub use reporter::ErrorReporter;
