//! Time math for the daily grid.
//!
//! Pure conversions between timestamps and vertical minute offsets in the
//! bounded daily window. Everything here computes in minutes; the
//! minute-to-pixel multiplication belongs to the caller (see
//! [`CalendarConfig::pixels_for_minutes`]).
//!
//! Out-of-window times are NOT clamped: an event starting before the window
//! yields a negative offset, and callers decide whether to clip, scroll, or
//! reject.

use chrono::{NaiveDateTime, Timelike};
use rota_domain::{CalendarConfig, Result, RotaError};

/// Minutes elapsed since the window start on the timestamp's own calendar
/// day. Negative when the timestamp precedes the window; resolution is one
/// minute (seconds truncate).
pub fn offset_minutes(ts: NaiveDateTime, window_start_hour: u32) -> i64 {
    let since_midnight = i64::from(ts.hour()) * 60 + i64::from(ts.minute());
    since_midnight - i64::from(window_start_hour) * 60
}

/// Non-negative duration between two timestamps, in minutes.
///
/// # Errors
/// `RotaError::Range` when `end` precedes `start`. Equal timestamps are a
/// valid zero-minute duration.
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> Result<i64> {
    if end < start {
        return Err(RotaError::Range(format!("duration end {end} precedes start {start}")));
    }
    Ok((end - start).num_minutes())
}

/// Offset of the "current time" marker within the window, or `None` when the
/// clock is outside the configured hours.
///
/// Recomputed by an external periodic tick; idempotent, and a missed tick
/// only leaves the marker stale.
pub fn marker_offset(now: NaiveDateTime, config: &CalendarConfig) -> Option<i64> {
    config.window_contains(now).then(|| offset_minutes(now, config.window_start_hour))
}
