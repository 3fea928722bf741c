//! RSVP commands

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDateTime;
use rota_core::attendance::rsvp;
use rota_domain::{Event, EventId, Result, RsvpStatus};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::SchedulerContext;

/// Set a student's RSVP status on an event.
///
/// `status` arrives as the wire string (`"pending"`, `"confirmed"`,
/// `"declined"`); anything else is a `Validation` error before the store is
/// touched.
pub async fn set_attendee_status(
    ctx: &Arc<SchedulerContext>,
    event_id: EventId,
    student_id: &str,
    student_name: &str,
    status: &str,
) -> Result<Event> {
    let command_name = "attendance::set_attendee_status";
    let start = Instant::now();

    let result = match status.parse::<RsvpStatus>() {
        Ok(status) => {
            info!(command = command_name, event_id, student_id, %status, "Updating RSVP");
            ctx.schedule.set_attendee_status(event_id, student_id, student_name, status).await
        }
        Err(err) => Err(err),
    };

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Remove a student's attendee record from an event.
pub async fn remove_attendee(
    ctx: &Arc<SchedulerContext>,
    event_id: EventId,
    student_id: &str,
) -> Result<Event> {
    let command_name = "attendance::remove_attendee";
    let start = Instant::now();

    info!(command = command_name, event_id, student_id, "Removing attendee");
    let result = ctx.schedule.remove_attendee(event_id, student_id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Whether RSVP changes are still meaningful for an event at `now`:
/// not canceled, and the end time has not passed.
pub async fn attendance_modifiable(
    ctx: &Arc<SchedulerContext>,
    event_id: EventId,
    now: NaiveDateTime,
) -> Result<bool> {
    let command_name = "attendance::attendance_modifiable";
    let start = Instant::now();

    let result = ctx.store.event(event_id).await.map(|event| rsvp::is_modifiable(&event, now));

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
