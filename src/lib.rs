//! # Progress Timer
//!
//! A console progress bar with ETA estimation, plus a few small helpers for
//! timing loops.
//!
//! ## Overview
//!
//! [`ProgressRenderer`](utils::progress::ProgressRenderer) draws a single
//! line of the form
//!
//! ```text
//! [==========>---------] 50/100 ETA: 1:05
//! ```
//!
//! redrawn in place with a carriage return on every update. The final update
//! ends the line and reports the average time per loop instead:
//!
//! ```text
//! [====================] 100/100 1.3s per loop
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error type shared by the library
//! - [`utils`] - Progress rendering, formatting, clocks and timers
//!
//! ## Example Usage
//!
//! ```bash
//! # Run a simulated loop with a 40-character bar
//! progress-timer demo --total 200 --bar-width 40 --delay-ms 10
//!
//! # Format a number of seconds the way the ETA does
//! progress-timer format-time 3661
//! ```

pub mod error;
pub mod utils;

pub use error::{ProgressError, Result};
