// Tests for the elapsed-time stopwatch, clocks and the lmap helper.

use progress_timer::utils::iter::lmap;
use progress_timer::utils::time::{Clock, ManualClock, SystemClock, Timer};
use std::thread;
use std::time::Duration;

#[test]
fn test_timer_system_clock() {
    let timer = Timer::start();
    thread::sleep(Duration::from_millis(20));
    let elapsed = timer.end();
    assert!(elapsed.as_duration() >= Duration::from_millis(20));
    assert!(elapsed.to_string().ends_with(" seconds elapsed"));
}

#[test]
fn test_timer_manual_clock() {
    let clock = ManualClock::new();
    let timer = Timer::start_with(&clock);
    clock.advance(Duration::from_millis(3_007));

    let elapsed = timer.end();
    assert_eq!(elapsed.seconds(), 3);
    assert_eq!(elapsed.millis(), 7);
    assert_eq!(elapsed.to_string(), "3.007 seconds elapsed");
}

#[test]
fn test_system_clock_monotonic() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}

#[test]
fn test_lmap_over_range() {
    let squares = lmap(|n: u64| n * n, 0..5);
    assert_eq!(squares, vec![0, 1, 4, 9, 16]);
}
