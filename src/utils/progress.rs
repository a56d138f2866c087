//! Single-line console progress bar with ETA estimation.
//!
//! Each update redraws the bar in place using a carriage return. The final
//! update (`iterations == total`) ends the line and reports the average time
//! per loop instead of an ETA.
//!
//! ```no_run
//! use progress_timer::utils::progress::ProgressRenderer;
//!
//! let mut bar = ProgressRenderer::new(10).unwrap();
//! bar.start().unwrap();
//! for i in 1..=10 {
//!     // ... do work ...
//!     bar.update(i).unwrap();
//! }
//! ```

use crate::error::{ProgressError, Result};
use crate::utils::format::{format_significant, format_time};
use crate::utils::time::{Clock, SystemClock};
use log::{debug, trace};
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

pub const DEFAULT_BAR_WIDTH: usize = 50;

const FILL: char = '=';
const CURSOR: char = '>';
const DASH: char = '-';
/// Trailing blanks that overwrite leftovers from a previous, longer line.
const CLEAR_PADDING: usize = 10;

/// One rendered progress line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The full line, including the leading `\r` and trailing padding.
    pub line: String,
    /// Whether this frame completes the run.
    pub finished: bool,
}

impl Frame {
    /// The bar between the brackets.
    pub fn bar(&self) -> &str {
        let start = self.line.find('[').map_or(0, |i| i + 1);
        let end = self.line.find(']').unwrap_or(self.line.len());
        &self.line[start..end]
    }

    /// Text after the `iterations/total` counter, without padding.
    pub fn suffix(&self) -> &str {
        let body = self.line.trim_end_matches(' ');
        let after_bar = self.line.find("] ").map_or(body.len(), |i| i + 2);
        match body[after_bar..].find(' ') {
            Some(i) => &body[after_bar + i..],
            None => "",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Console progress bar for a task with a known number of iterations.
#[derive(Debug)]
pub struct ProgressRenderer<C: Clock = SystemClock> {
    total: usize,
    bar_width: usize,
    start_time: Option<Instant>,
    clock: C,
}

impl ProgressRenderer<SystemClock> {
    /// Create a renderer with the default bar width.
    pub fn new(total: usize) -> Result<Self> {
        Self::with_width(total, DEFAULT_BAR_WIDTH)
    }

    /// Create a renderer with a custom bar width.
    pub fn with_width(total: usize, bar_width: usize) -> Result<Self> {
        Self::with_clock(total, bar_width, SystemClock)
    }
}

impl<C: Clock> ProgressRenderer<C> {
    /// Create a renderer that reads time from `clock`.
    pub fn with_clock(total: usize, bar_width: usize, clock: C) -> Result<Self> {
        if total == 0 {
            return Err(ProgressError::InvalidArgument(
                "total must be greater than zero".to_string(),
            ));
        }
        if bar_width == 0 {
            return Err(ProgressError::InvalidArgument(
                "bar width must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            total,
            bar_width,
            start_time: None,
            clock,
        })
    }

    /// Number of iterations that completes the run.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Width of the bar in characters.
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// When the current run was first observed, if it has been.
    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// Draw the empty bar and start the clock.
    pub fn start(&mut self) -> Result<()> {
        self.update(0)
    }

    /// Redraw the bar for `iterations` completed loops.
    ///
    /// Writes to stdout without a newline so the next call overwrites the
    /// line; the completing update ends the line instead.
    pub fn update(&mut self, iterations: usize) -> Result<()> {
        let frame = self.frame(iterations)?;
        let stdout = io::stdout();
        write_frame(&frame, &mut stdout.lock())
    }

    /// Render the line for `iterations` without writing it.
    ///
    /// This latches the start time exactly as [`update`](Self::update) does.
    pub fn frame(&mut self, iterations: usize) -> Result<Frame> {
        if iterations > self.total {
            return Err(ProgressError::InvalidArgument(format!(
                "iterations {} exceeds total {}",
                iterations, self.total
            )));
        }

        let finished = iterations == self.total;
        let fraction = iterations as f64 / self.total as f64;
        let now = self.clock.now();

        let suffix = if finished {
            let start = self.start_time.ok_or_else(|| {
                ProgressError::Precondition(
                    "update called at completion before start".to_string(),
                )
            })?;
            let total_secs = now.saturating_duration_since(start).as_secs();
            let per_loop = format_significant(total_secs as f64 / iterations as f64, 2);
            debug!(
                "Completed {} iterations in {}s ({}s per loop)",
                iterations, total_secs, per_loop
            );
            format!(" {}s per loop", per_loop)
        } else if self.start_time.is_none() || iterations == 0 {
            debug!(
                "{} start time at {} of {}",
                if self.start_time.is_some() {
                    "Resetting"
                } else {
                    "Latching"
                },
                iterations,
                self.total
            );
            self.start_time = Some(now);
            String::new()
        } else {
            let start = self.start_time.unwrap_or(now);
            let elapsed = now.saturating_duration_since(start).as_secs() as f64;
            let remaining = ((1.0 - fraction) * elapsed / fraction) as u64;
            format!(" ETA: {}", format_time(remaining))
        };

        let bar = self.render_bar(fraction, finished);
        let mut line = format!("\r[{}] {}/{}{}", bar, iterations, self.total, suffix);
        line.push_str(&" ".repeat(CLEAR_PADDING));
        trace!("Rendered frame {:?}", line);

        Ok(Frame { line, finished })
    }

    fn render_bar(&self, fraction: f64, finished: bool) -> String {
        let mut ticks = ((fraction * self.bar_width as f64) as usize).min(self.bar_width);
        let mut bar = String::with_capacity(self.bar_width);

        if finished {
            bar.extend(std::iter::repeat(FILL).take(ticks));
            bar.extend(std::iter::repeat(DASH).take(self.bar_width - ticks));
        } else {
            // Keep room for the cursor when the fill rounds up to the full width.
            ticks = ticks.min(self.bar_width - 1);
            bar.extend(std::iter::repeat(FILL).take(ticks));
            bar.push(CURSOR);
            bar.extend(std::iter::repeat(DASH).take(self.bar_width - ticks - 1));
        }

        bar
    }
}

/// Write a frame, ending the line only when the run is finished.
fn write_frame<W: Write>(frame: &Frame, out: &mut W) -> Result<()> {
    if frame.finished {
        writeln!(out, "{}", frame.line)?;
    } else {
        write!(out, "{}", frame.line)?;
    }
    out.flush()?;
    Ok(())
}
