//! Duration and number formatting utilities.
//!
//! This module provides the text formatting used by the progress renderer
//! for ETA and per-loop figures.

use std::time::Duration;

/// Formats a number of seconds as a compact clock string.
///
/// Hours are only shown when non-zero, and minutes only when hours or
/// minutes are non-zero. Below one minute the value is a plain count of
/// seconds with an `s` suffix.
///
/// # Examples
///
/// ```
/// use progress_timer::utils::format::format_time;
///
/// assert_eq!(format_time(0), "0s");
/// assert_eq!(format_time(45), "45s");
/// assert_eq!(format_time(90), "1:30");
/// assert_eq!(format_time(3661), "1:01:01");
/// ```
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Formats a [`Duration`] with [`format_time`], truncating to whole seconds.
pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_secs())
}

/// Formats a float to `digits` significant digits.
///
/// Fixed notation is used while the decimal exponent stays in
/// `-4..digits - 1`, always keeping one digit after the point. Anything
/// else switches to scientific notation with a signed, two-digit exponent.
/// Trailing zeros are stripped in both forms.
///
/// # Examples
///
/// ```
/// use progress_timer::utils::format::format_significant;
///
/// assert_eq!(format_significant(0.5, 2), "0.5");
/// assert_eq!(format_significant(1.0, 2), "1.0");
/// assert_eq!(format_significant(0.123, 2), "0.12");
/// assert_eq!(format_significant(12.0, 2), "1.2e+01");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // Rust's `{:e}` rounds to the requested precision, so the exponent
    // read back already accounts for carries like 9.96 -> 1.0e1.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 - 1 {
        let mantissa = strip_trailing_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let stripped = strip_trailing_zeros(&fixed);
        if stripped.contains('.') {
            stripped.to_string()
        } else {
            format!("{}.0", stripped)
        }
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
