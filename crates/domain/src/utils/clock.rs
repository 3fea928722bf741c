//! 12-hour clock-string parsing and formatting.
//!
//! The schedule wire format carries human-readable spans such as
//! `"10:00 AM - 11:30 AM"` alongside the ISO timestamps. Parsing here is
//! strict: a string that cannot be decomposed into hour/minute/period is a
//! [`RotaError::Parse`], never a silently skipped event.

use chrono::{NaiveTime, Timelike};

use crate::errors::{Result, RotaError};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Parse a 12-hour clock string (`"10:00 AM"`, `"9 PM"`) into a time of day.
///
/// Minutes are optional and default to zero. The hour must be 1-12 and the
/// AM/PM designator is required.
///
/// # Errors
/// `RotaError::Parse` describing the first token that failed.
pub fn parse_clock(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();

    let (time_part, period) = if let Some(rest) = trimmed.strip_suffix("AM") {
        (rest, Period::Am)
    } else if let Some(rest) = trimmed.strip_suffix("PM") {
        (rest, Period::Pm)
    } else {
        return Err(RotaError::Parse(format!("clock string '{input}' is missing AM/PM")));
    };

    let time_part = time_part.trim();
    let (hour_str, minute_str) = match time_part.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (time_part, None),
    };

    let hour12: u32 = hour_str
        .parse()
        .map_err(|_| RotaError::Parse(format!("clock string '{input}' has a non-numeric hour")))?;
    if !(1..=12).contains(&hour12) {
        return Err(RotaError::Parse(format!(
            "clock string '{input}' hour must be 1-12, got {hour12}"
        )));
    }

    let minute: u32 = match minute_str {
        Some(m) => m.parse().map_err(|_| {
            RotaError::Parse(format!("clock string '{input}' has non-numeric minutes"))
        })?,
        None => 0,
    };

    let hour = match (period, hour12) {
        (Period::Am, 12) => 0,
        (Period::Am, h) => h,
        (Period::Pm, 12) => 12,
        (Period::Pm, h) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| RotaError::Parse(format!("clock string '{input}' minutes must be 0-59")))
}

/// Parse a `"10:00 AM - 11:30 AM"` span into its start and end times.
///
/// # Errors
/// `RotaError::Parse` when the separator is missing or either side fails
/// [`parse_clock`].
pub fn parse_time_label(input: &str) -> Result<(NaiveTime, NaiveTime)> {
    let (start, end) = input
        .split_once(" - ")
        .ok_or_else(|| RotaError::Parse(format!("time span '{input}' is missing ' - '")))?;
    Ok((parse_clock(start)?, parse_clock(end)?))
}

/// Render a time of day as a 12-hour clock string, e.g. `"10:00 AM"`.
pub fn format_clock(time: NaiveTime) -> String {
    let hour = time.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, time.minute(), period)
}

/// Render an hour-gutter label for the daily grid, e.g. `"8 AM"`, `"12 PM"`.
pub fn format_hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h > 12 => format!("{} PM", h - 12),
        h => format!("{h} AM"),
    }
}
