// Tests for the compact duration formatter used in ETA output.

use progress_timer::utils::format::{format_duration, format_significant, format_time};
use std::time::Duration;

#[test]
fn test_format_time_zero() {
    assert_eq!(format_time(0), "0s");
}

#[test]
fn test_format_time_seconds() {
    assert_eq!(format_time(45), "45s");
    assert_eq!(format_time(59), "59s");
}

#[test]
fn test_format_time_minutes() {
    assert_eq!(format_time(90), "1:30");
    assert_eq!(format_time(605), "10:05");
    assert_eq!(format_time(3599), "59:59");
}

#[test]
fn test_format_time_hours() {
    assert_eq!(format_time(3600), "1:00:00");
    assert_eq!(format_time(3661), "1:01:01");
    assert_eq!(format_time(7322), "2:02:02");
}

#[test]
fn test_format_time_large() {
    assert_eq!(format_time(100 * 3600 + 59), "100:00:59");
    let formatted = format_time(u64::MAX);
    assert!(!formatted.is_empty());
    assert_eq!(formatted.matches(':').count(), 2);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_millis(1_999)), "1s");
    assert_eq!(format_duration(Duration::from_secs(90)), "1:30");
}

#[test]
fn test_format_significant_two_digits() {
    assert_eq!(format_significant(0.0, 2), "0.0");
    assert_eq!(format_significant(0.25, 2), "0.25");
    assert_eq!(format_significant(1.3333, 2), "1.3");
    assert_eq!(format_significant(25.0, 2), "2.5e+01");
}
