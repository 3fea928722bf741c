//! # Rota API
//!
//! Application layer - the command/query surface consumed by a frontend.
//!
//! This crate contains:
//! - Commands (frontend → engine bridge)
//! - Application context (dependency injection)
//! - Logging bootstrap and command execution logging
//!
//! ## Architecture
//! - Depends on `rota-domain`, `rota-core`, and `rota-infra`
//! - Wires up the hexagonal architecture
//! - Commands only construct payloads and route them; all semantics live in
//!   the core services

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::SchedulerContext;
pub use utils::logging::init_logging;
