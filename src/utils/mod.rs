//! Utility functions and helpers.
//!
//! - [`progress`] - Console progress bar with ETA estimation
//! - [`format`] - Compact duration and significant-digit formatting
//! - [`time`] - Clocks and an elapsed-time stopwatch
//! - [`iter`] - Sequence helpers
//!
//! # Examples
//!
//! ## Timing a loop with a progress bar
//!
//! ```no_run
//! use progress_timer::utils::progress::ProgressRenderer;
//! use progress_timer::utils::time::Timer;
//!
//! let timer = Timer::start();
//! let mut bar = ProgressRenderer::with_width(100, 40).unwrap();
//! bar.start().unwrap();
//! for i in 1..=100 {
//!     bar.update(i).unwrap();
//! }
//! println!("{}", timer.end());
//! ```

pub mod format;
pub mod iter;
pub mod progress;
pub mod time;
