//! Error types used throughout the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rota
///
/// Expected conditions (an empty day, no events in range) are `Ok` values,
/// never errors. Engine functions return a typed failure instead of logging
/// or swallowing.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RotaError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rota operations
pub type Result<T> = std::result::Result<T, RotaError>;
