//! # Rota Domain
//!
//! Business domain types and models for the Rota scheduling engine.
//!
//! This crate contains:
//! - Domain data types (Event, Attendee, RecurrenceRule, ViewState, ...)
//! - Domain error types and Result definitions
//! - Calendar configuration structures
//! - Domain constants and clock-string utilities
//!
//! ## Architecture
//! - No dependencies on other Rota crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::CalendarConfig;
pub use errors::{Result, RotaError};
pub use types::*;
// Re-export clock utilities
pub use utils::clock::{format_clock, format_hour_label, parse_clock, parse_time_label};
