//! Clocks and a simple elapsed-time stopwatch.

use log::info;
use std::cell::Cell;
use std::fmt;
use std::time::{Duration, Instant};

/// Source of the current monotonic time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Reads [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Useful for driving a renderer or timer deterministically.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Total time this clock has been advanced.
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Stopwatch owned by the caller.
///
/// ```
/// use progress_timer::utils::time::Timer;
///
/// let timer = Timer::start();
/// let elapsed = timer.end();
/// println!("{}", elapsed);
/// ```
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    started: Instant,
}

impl Timer<SystemClock> {
    /// Start a timer on the system clock.
    pub fn start() -> Self {
        Self::start_with(SystemClock)
    }
}

impl<C: Clock> Timer<C> {
    /// Start a timer on `clock`.
    pub fn start_with(clock: C) -> Self {
        let started = clock.now();
        Self { clock, started }
    }

    /// Time since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    /// Stop the timer and return the final reading.
    pub fn end(self) -> Elapsed {
        let elapsed = Elapsed(self.elapsed());
        info!("{}", elapsed);
        elapsed
    }
}

/// A finished [`Timer`] reading.
///
/// Displays as `"{seconds}.{millis} seconds elapsed"` with the milliseconds
/// zero-padded to three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(Duration);

impl Elapsed {
    /// The reading as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Whole seconds.
    pub fn seconds(&self) -> u64 {
        self.0.as_secs()
    }

    /// Milliseconds past the last whole second.
    pub fn millis(&self) -> u32 {
        self.0.subsec_millis()
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03} seconds elapsed", self.seconds(), self.millis())
    }
}
