//! Logging bootstrap and command execution logging.

use std::time::Duration;

use rota_domain::RotaError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info`. Safe to call once at startup;
/// a second call is ignored so tests can race to initialize.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"events::create_event"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Keeps the command wrappers concise and the log shape consistent. Callers
/// must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `RotaError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RotaError) -> &'static str {
    match error {
        RotaError::Parse(_) => "parse",
        RotaError::Range(_) => "range",
        RotaError::Validation(_) => "validation",
        RotaError::NotFound(_) => "not_found",
        RotaError::Config(_) => "config",
        RotaError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_labels_are_stable() {
        assert_eq!(error_label(&RotaError::Parse("x".into())), "parse");
        assert_eq!(error_label(&RotaError::NotFound("x".into())), "not_found");
    }
}
