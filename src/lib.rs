//! Elapsed-time stopwatch for shell scripts.
//!
//! A timer is a small file holding the instant it was started, so separate
//! `elapsed` invocations can share it.

pub mod cli;
pub mod error;
pub mod timer;

pub use self::error::{Error, Result};
