//! Event CRUD commands

use std::sync::Arc;
use std::time::Instant;

use rota_domain::{DateSpan, Event, EventDraft, EventId, EventPatch, Result};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::SchedulerContext;

/// Create a single event; the store assigns and returns the id.
pub async fn create_event(ctx: &Arc<SchedulerContext>, draft: EventDraft) -> Result<EventId> {
    let command_name = "events::create_event";
    let start = Instant::now();

    info!(command = command_name, date = %draft.date, "Creating event");
    let result = ctx.schedule.create_event(draft).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Apply a partial-field patch to an event.
pub async fn update_event(
    ctx: &Arc<SchedulerContext>,
    id: EventId,
    patch: EventPatch,
) -> Result<Event> {
    let command_name = "events::update_event";
    let start = Instant::now();

    info!(command = command_name, event_id = id, "Updating event");
    let result = ctx.schedule.update_event(id, patch).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Delete an event by id.
pub async fn delete_event(ctx: &Arc<SchedulerContext>, id: EventId) -> Result<()> {
    let command_name = "events::delete_event";
    let start = Instant::now();

    info!(command = command_name, event_id = id, "Deleting event");
    let result = ctx.schedule.delete_event(id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Fetch a single event by id.
pub async fn get_event(ctx: &Arc<SchedulerContext>, id: EventId) -> Result<Event> {
    let command_name = "events::get_event";
    let start = Instant::now();

    let result = ctx.store.event(id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Events within an inclusive date span, ordered by date and start time.
pub async fn events_in_range(
    ctx: &Arc<SchedulerContext>,
    span: DateSpan,
) -> Result<Vec<Event>> {
    let command_name = "events::events_in_range";
    let start = Instant::now();

    let result = ctx.schedule.events_in_range(span).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Events belonging to a course.
pub async fn events_for_course(ctx: &Arc<SchedulerContext>, course_id: i64) -> Result<Vec<Event>> {
    let command_name = "events::events_for_course";
    let start = Instant::now();

    let result = ctx.store.events_for_course(course_id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Events owned by a teacher.
pub async fn events_for_teacher(
    ctx: &Arc<SchedulerContext>,
    teacher_id: &str,
) -> Result<Vec<Event>> {
    let command_name = "events::events_for_teacher";
    let start = Instant::now();

    let result = ctx.store.events_for_teacher(teacher_id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Events a student is listed on as an attendee.
pub async fn events_for_student(
    ctx: &Arc<SchedulerContext>,
    student_id: &str,
) -> Result<Vec<Event>> {
    let command_name = "events::events_for_student";
    let start = Instant::now();

    let result = ctx.store.events_for_student(student_id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
