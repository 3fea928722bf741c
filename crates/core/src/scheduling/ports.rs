//! Port interfaces for the event store
//!
//! These traits define the boundary between the calendar engine and the
//! collection that owns the events. Implementations are the single writer;
//! the engine never mutates state through anything but these commands.

use async_trait::async_trait;
use rota_domain::{DateSpan, Event, EventDraft, EventId, EventPatch, Result};

/// Trait for the authoritative event collection.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events whose `date` lies within the inclusive span, ordered by
    /// `(date, start_time, id)`. An empty span result is a valid empty list.
    async fn events_in_range(&self, span: DateSpan) -> Result<Vec<Event>>;

    /// Fetch a single event.
    ///
    /// # Errors
    /// `RotaError::NotFound` when the id is absent from the collection.
    async fn event(&self, id: EventId) -> Result<Event>;

    /// Insert a new event; the store assigns and returns the id.
    async fn insert(&self, draft: EventDraft) -> Result<EventId>;

    /// Insert a batch of events carrying pre-assigned ids (recurrence
    /// occurrences). The store must advance its id counter past them.
    ///
    /// # Errors
    /// `RotaError::Validation` when any carried id collides with an existing
    /// event.
    async fn insert_batch(&self, events: Vec<Event>) -> Result<Vec<EventId>>;

    /// Apply a partial-field patch to an event, returning the updated event.
    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Event>;

    /// Delete an event by id.
    async fn delete(&self, id: EventId) -> Result<()>;

    /// Highest id currently in the collection (0 when empty). Used as the
    /// floor for recurrence id assignment.
    async fn max_id(&self) -> Result<EventId>;

    /// Events belonging to a course.
    async fn events_for_course(&self, course_id: i64) -> Result<Vec<Event>>;

    /// Events owned by a teacher.
    async fn events_for_teacher(&self, teacher_id: &str) -> Result<Vec<Event>>;

    /// Events a student is listed on as an attendee.
    async fn events_for_student(&self, student_id: &str) -> Result<Vec<Event>>;
}
