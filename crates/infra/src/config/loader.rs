//! Configuration loader
//!
//! Loads the calendar configuration from a TOML file and environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Start from the built-in defaults (8 AM - 8 PM window, Monday weeks)
//! 2. If a config file is present, its values replace the defaults
//! 3. Environment variables override both
//! 4. The merged result is validated before it is returned
//!
//! ## Environment Variables
//! - `ROTA_WINDOW_START_HOUR`: first hour of the daily window
//! - `ROTA_WINDOW_END_HOUR`: last hour of the daily window, inclusive
//! - `ROTA_PIXELS_PER_HOUR`: presentation scale factor
//! - `ROTA_MIN_BLOCK_MINUTES`: layout floor for zero-duration events
//! - `ROTA_WEEK_START`: week-start weekday (`monday`, `sun`, ...)
//!
//! ## File Locations
//! The loader probes `./rota.toml` then `./config.toml` in the working
//! directory; a missing file is not an error.

use std::path::Path;
use std::str::FromStr;

use chrono::Weekday;
use rota_domain::{CalendarConfig, Result, RotaError};
use tracing::{debug, info};

/// Load configuration with the default probe order.
///
/// # Errors
/// Returns `RotaError::Config` if a present file fails to parse, an
/// environment override has an invalid value, or the merged configuration
/// is inconsistent.
pub fn load() -> Result<CalendarConfig> {
    // A .env file is optional; ignore a missing one
    dotenvy::dotenv().ok();

    let mut config = load_from_file(None)?.unwrap_or_default();
    apply_env_overrides(&mut config)?;
    config.validate()?;

    info!(
        window_start = config.window_start_hour,
        window_end = config.window_end_hour,
        week_start = %config.week_start,
        "calendar configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a TOML file.
///
/// With `path = None` the default probe locations are tried; a missing file
/// yields `Ok(None)` so callers can fall back to defaults.
///
/// # Errors
/// `RotaError::Config` when a present file cannot be read or parsed.
pub fn load_from_file(path: Option<&Path>) -> Result<Option<CalendarConfig>> {
    let candidates: Vec<&Path> =
        path.map_or_else(|| vec![Path::new("rota.toml"), Path::new("config.toml")], |p| vec![p]);

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        let raw = std::fs::read_to_string(candidate).map_err(|e| {
            RotaError::Config(format!("failed to read {}: {e}", candidate.display()))
        })?;
        let config: CalendarConfig = toml::from_str(&raw).map_err(|e| {
            RotaError::Config(format!("failed to parse {}: {e}", candidate.display()))
        })?;
        debug!(path = %candidate.display(), "calendar configuration file loaded");
        return Ok(Some(config));
    }

    Ok(None)
}

fn apply_env_overrides(config: &mut CalendarConfig) -> Result<()> {
    if let Some(hour) = env_parse::<u32>("ROTA_WINDOW_START_HOUR")? {
        config.window_start_hour = hour;
    }
    if let Some(hour) = env_parse::<u32>("ROTA_WINDOW_END_HOUR")? {
        config.window_end_hour = hour;
    }
    if let Some(scale) = env_parse::<f64>("ROTA_PIXELS_PER_HOUR")? {
        config.pixels_per_hour = scale;
    }
    if let Some(minutes) = env_parse::<i64>("ROTA_MIN_BLOCK_MINUTES")? {
        config.min_block_minutes = minutes;
    }
    if let Ok(raw) = std::env::var("ROTA_WEEK_START") {
        config.week_start = Weekday::from_str(&raw)
            .map_err(|_| RotaError::Config(format!("invalid ROTA_WEEK_START: {raw}")))?;
    }
    Ok(())
}

fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| RotaError::Config(format!("invalid {name}: {raw}"))),
        Err(_) => Ok(None),
    }
}
