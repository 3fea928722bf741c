//! RSVP tracking - pure transforms over an event's attendee list.

use chrono::NaiveDateTime;
use rota_domain::{Attendee, Event, EventStatus, Result, RotaError, RsvpStatus};

/// Set a student's RSVP status, returning the updated event.
///
/// Upsert semantics: an existing `student_id` is updated in place, otherwise
/// a new attendee is appended. The input event is never mutated, so calling
/// twice for the same student leaves exactly one record carrying the most
/// recent status.
pub fn set_status(
    event: &Event,
    student_id: &str,
    student_name: &str,
    status: RsvpStatus,
) -> Event {
    let mut updated = event.clone();

    match updated.attendees.iter_mut().find(|a| a.student_id == student_id) {
        Some(attendee) => {
            attendee.status = status;
        }
        None => {
            updated.attendees.push(Attendee {
                student_id: student_id.to_string(),
                student_name: student_name.to_string(),
                status,
            });
        }
    }

    updated
}

/// Add a new attendee record.
///
/// Unlike [`set_status`], this is a create: attempting to insert a
/// `student_id` that already exists on the event is a `Validation` error
/// rather than an update.
pub fn add_attendee(event: &Event, attendee: Attendee) -> Result<Event> {
    if event.attendee(&attendee.student_id).is_some() {
        return Err(RotaError::Validation(format!(
            "student {} is already an attendee of event {}",
            attendee.student_id, event.id
        )));
    }

    let mut updated = event.clone();
    updated.attendees.push(attendee);
    Ok(updated)
}

/// Remove a student's attendee record, returning the updated event.
/// Removing an absent student is a no-op.
pub fn remove_attendee(event: &Event, student_id: &str) -> Event {
    let mut updated = event.clone();
    updated.attendees.retain(|a| a.student_id != student_id);
    updated
}

/// Whether RSVP changes are still meaningful for this event.
///
/// Caller-side policy predicate: canceled events and events whose end time
/// has passed are closed. The engine itself does not enforce this on
/// [`set_status`].
pub fn is_modifiable(event: &Event, now: NaiveDateTime) -> bool {
    event.status != EventStatus::Canceled && event.end_time > now
}
