//! Recurrence commands
//!
//! Expansion and committing are deliberately split so the frontend can show
//! the batch before anything is written.

use std::sync::Arc;
use std::time::Instant;

use rota_domain::{Event, EventId, RecurrenceRule, Result};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::SchedulerContext;

/// Expand a recurrence rule without writing anything.
pub async fn preview_recurrence(
    ctx: &Arc<SchedulerContext>,
    rule: RecurrenceRule,
) -> Result<Vec<Event>> {
    let command_name = "recurrence::preview_recurrence";
    let start = Instant::now();

    let result = ctx.schedule.preview_recurrence(&rule).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Expand a recurrence rule and commit every occurrence to the store.
///
/// Occurrences are not deduplicated against existing events; committing the
/// same rule twice creates a second batch.
pub async fn create_recurring_events(
    ctx: &Arc<SchedulerContext>,
    rule: RecurrenceRule,
) -> Result<Vec<EventId>> {
    let command_name = "recurrence::create_recurring_events";
    let start = Instant::now();

    info!(
        command = command_name,
        start_date = %rule.start_date,
        end_date = %rule.end_date,
        "Creating recurring events"
    );
    let result = ctx.schedule.commit_recurrence(&rule).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
