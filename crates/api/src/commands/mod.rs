//! Command surface exposed to the frontend.
//!
//! Commands construct payloads and route them to the engine services; they
//! carry no scheduling semantics of their own. Each wrapper logs a
//! structured execution record.

pub mod attendance;
pub mod calendar;
pub mod events;
pub mod recurrence;

pub use attendance::{attendance_modifiable, remove_attendee, set_attendee_status};
pub use calendar::{
    hour_labels, layout_for_day, month_grid_range, schedule_view, time_marker, visible_range,
};
pub use events::{
    create_event, delete_event, events_for_course, events_for_student, events_for_teacher,
    events_in_range, get_event, update_event,
};
pub use recurrence::{create_recurring_events, preview_recurrence};
