//! # `microlog`
//!
//! A printf-style formatting shim for targets whose only output is a primitive [`DebugLog`] channel.
//!
//! The channel accepts text fragments, 32-bit integers and floats and has no formatting or buffering of its own.
//! This crate scans a format string, batches literal text into a small stack buffer, and turns each `%d`, `%s` or
//! `%f` into the matching typed channel call. Every message ends with `"\r\n"`.
//!
//! ## Feature Flags
//!
//! - `log` - Enable the [`log`](https://docs.rs/log) facade bridge ([`logger::DebugLogger`]), on by default
//! - `std` - Enable standard library support, required by the test helpers
//!
//! ## Basic Usage
//!
//! ```rust
//! use microlog::{MicroErrorReporter, report};
//! use microlog::test_helpers::{Call, RecordingLog};
//!
//! let backend = RecordingLog::new();
//! let reporter = MicroErrorReporter::new(backend.clone());
//!
//! let status = report!(reporter, "Value: %d", 42);
//!
//! assert_eq!(status, 0);
//! assert_eq!(
//!     backend.calls(),
//!     [Call::Str("Value: ".into()), Call::Int(42), Call::Str("\r\n".into())],
//! );
//! ```
//!
//! ## Format Strings
//!
//! Only three conversions exist: `%d` takes an [`Arg::Int`], `%s` an [`Arg::Text`] and `%f` an [`Arg::Float`].
//! A `%` followed by anything else is printed as-is, there is no `%%` escape.
//! A conversion without a matching argument is printed as-is as well, see [`printf::check`] to validate arguments
//! up front.

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(feature = "std")]
extern crate std;

mod cache;
mod error;
#[cfg(feature = "log")]
pub mod logger;
mod macros;
pub mod printf;
mod reporter;
#[cfg(feature = "std")]
#[doc(hidden)]
pub mod test_helpers;

pub use cache::{LINE_TERMINATOR, OUTPUT_CACHE_SIZE, OutputCache};
pub use error::FormatError;
pub use microlog_api::{Arg, ArgKind, DebugLog, ErrorReporter};
pub use printf::{debug_log_printf, print_fmt};
pub use reporter::MicroErrorReporter;
