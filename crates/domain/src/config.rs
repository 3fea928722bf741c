//! Calendar configuration

use chrono::{NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MIN_BLOCK_MINUTES, DEFAULT_PIXELS_PER_HOUR, DEFAULT_WINDOW_END_HOUR,
    DEFAULT_WINDOW_START_HOUR,
};
use crate::errors::{Result, RotaError};

/// Calendar engine configuration
///
/// The engine computes in minutes; `pixels_per_hour` exists so callers can
/// turn minute offsets into layout units without hard-coding the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First hour of the daily window.
    pub window_start_hour: u32,
    /// Last hour of the daily window, inclusive.
    pub window_end_hour: u32,
    /// Presentation scale factor; never used in engine arithmetic.
    pub pixels_per_hour: f64,
    /// Layout height floor applied to degenerate (zero-duration) events.
    pub min_block_minutes: i64,
    /// Canonical week-start weekday for week and month-grid ranges.
    pub week_start: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            window_start_hour: DEFAULT_WINDOW_START_HOUR,
            window_end_hour: DEFAULT_WINDOW_END_HOUR,
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
            min_block_minutes: DEFAULT_MIN_BLOCK_MINUTES,
            week_start: Weekday::Mon,
        }
    }
}

impl CalendarConfig {
    /// Check the configuration is internally consistent.
    ///
    /// # Errors
    /// Returns `RotaError::Config` when the window is inverted or empty of
    /// hours, or when the scale/floor values are not positive.
    pub fn validate(&self) -> Result<()> {
        if self.window_start_hour > 23 || self.window_end_hour > 23 {
            return Err(RotaError::Config(format!(
                "window hours must be 0-23, got {}-{}",
                self.window_start_hour, self.window_end_hour
            )));
        }
        if self.window_start_hour > self.window_end_hour {
            return Err(RotaError::Config(format!(
                "window start hour {} is after end hour {}",
                self.window_start_hour, self.window_end_hour
            )));
        }
        if self.pixels_per_hour <= 0.0 {
            return Err(RotaError::Config(format!(
                "pixels_per_hour must be positive, got {}",
                self.pixels_per_hour
            )));
        }
        if self.min_block_minutes <= 0 {
            return Err(RotaError::Config(format!(
                "min_block_minutes must be positive, got {}",
                self.min_block_minutes
            )));
        }
        Ok(())
    }

    /// Total minutes covered by the daily window (end hour inclusive).
    pub fn window_minutes(&self) -> i64 {
        (i64::from(self.window_end_hour) - i64::from(self.window_start_hour) + 1) * 60
    }

    /// Whether a timestamp's hour lies within the configured window.
    ///
    /// The engine itself never clamps; this predicate exists for callers
    /// deciding whether to clip, scroll, or reject an out-of-window event.
    pub fn window_contains(&self, ts: NaiveDateTime) -> bool {
        let hour = ts.hour();
        hour >= self.window_start_hour && hour <= self.window_end_hour
    }

    /// Convert a minute offset/duration into layout units for presentation.
    pub fn pixels_for_minutes(&self, minutes: i64) -> f64 {
        minutes as f64 / 60.0 * self.pixels_per_hour
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CalendarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_start_hour, 8);
        assert_eq!(config.window_end_hour, 20);
        assert_eq!(config.week_start, Weekday::Mon);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let config = CalendarConfig { window_start_hour: 20, window_end_hour: 8, ..Default::default() };
        assert!(matches!(config.validate(), Err(RotaError::Config(_))));
    }

    #[test]
    fn window_minutes_counts_inclusive_end_hour() {
        // 8 AM through 8 PM inclusive is 13 hour rows
        let config = CalendarConfig::default();
        assert_eq!(config.window_minutes(), 13 * 60);
    }

    #[test]
    fn window_contains_checks_hour_bounds() {
        let config = CalendarConfig::default();
        let at = |h: u32| {
            NaiveDate::from_ymd_opt(2023, 9, 5)
                .and_then(|d| d.and_hms_opt(h, 0, 0))
                .unwrap()
        };
        assert!(!config.window_contains(at(7)));
        assert!(config.window_contains(at(8)));
        assert!(config.window_contains(at(20)));
        assert!(!config.window_contains(at(21)));
    }

    #[test]
    fn pixels_scale_matches_hour_height() {
        let config = CalendarConfig::default();
        assert!((config.pixels_for_minutes(60) - 60.0).abs() < f64::EPSILON);
        assert!((config.pixels_for_minutes(90) - 90.0).abs() < f64::EPSILON);
    }
}
