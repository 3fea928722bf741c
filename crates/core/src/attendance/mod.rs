//! Attendance management.
//!
//! Two concerns share this module: per-event RSVP state (the attendee list
//! embedded in an event) and roll-call sheets recorded after a sitting.
//! Both are pure transforms; the store applies the results.

pub mod roll_call;
pub mod rsvp;
