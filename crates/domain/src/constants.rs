//! Domain constants
//!
//! Centralized location for the calendar defaults shared by configuration
//! and tests.

/// First hour shown in the daily window (8 AM).
pub const DEFAULT_WINDOW_START_HOUR: u32 = 8;

/// Last hour shown in the daily window, inclusive (8 PM).
pub const DEFAULT_WINDOW_END_HOUR: u32 = 20;

/// Vertical scale used by presentation to turn minutes into layout units.
pub const DEFAULT_PIXELS_PER_HOUR: f64 = 60.0;

/// Layout height floor for zero-duration events. The stored event duration
/// is never altered; only the rendered block is clamped.
pub const DEFAULT_MIN_BLOCK_MINUTES: i64 = 20;

/// Calendar-day wire format (`2023-09-05`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
