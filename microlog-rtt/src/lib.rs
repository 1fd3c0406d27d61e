//! RTT debug log backend for microlog.
//!
//! On bare-metal targets (`target_os = "none"`) output goes to the RTT up channel, which a debug probe reads.
//! Binaries must provide a [`critical-section`](https://docs.rs/critical-section) implementation for `rtt-target`.
//!
//! On hosted targets output goes to standard output instead, so code using this backend can be run and tested on the
//! development machine.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(not(target_os = "none"))]
extern crate std;

pub mod log;

pub use log::Log;
