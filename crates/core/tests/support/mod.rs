use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rota_core::scheduling::ports::EventStore;
use rota_domain::{
    DateSpan, Event, EventDraft, EventId, EventPatch, EventStatus, EventType,
    Result as DomainResult, RotaError,
};

/// In-memory mock for `EventStore`.
///
/// Holds events behind a plain mutex and answers queries with linear scans.
/// Designed for service tests where deterministic behavior matters more
/// than lookup speed.
#[derive(Default, Clone)]
pub struct MockEventStore {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MockEventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events: Arc::new(Mutex::new(events)) }
    }

    /// Convenience helper for adding a single event to the mock.
    pub fn with_event(self, event: Event) -> Self {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    fn guard(&self) -> DomainResult<std::sync::MutexGuard<'_, Vec<Event>>> {
        self.events.lock().map_err(|_| RotaError::Internal("event store lock poisoned".into()))
    }
}

#[async_trait]
impl EventStore for MockEventStore {
    async fn events_in_range(&self, span: DateSpan) -> DomainResult<Vec<Event>> {
        let mut events: Vec<Event> =
            self.guard()?.iter().filter(|e| span.contains(e.date)).cloned().collect();
        events.sort_by_key(|e| (e.date, e.start_time, e.id));
        Ok(events)
    }

    async fn event(&self, id: EventId) -> DomainResult<Event> {
        self.guard()?
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| RotaError::NotFound(format!("event {id}")))
    }

    async fn insert(&self, draft: EventDraft) -> DomainResult<EventId> {
        let mut guard = self.guard()?;
        let id = guard.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        guard.push(draft.into_event(id));
        Ok(id)
    }

    async fn insert_batch(&self, events: Vec<Event>) -> DomainResult<Vec<EventId>> {
        let mut guard = self.guard()?;
        for event in &events {
            if guard.iter().any(|existing| existing.id == event.id) {
                return Err(RotaError::Validation(format!("id {} already exists", event.id)));
            }
        }
        let ids = events.iter().map(|e| e.id).collect();
        guard.extend(events);
        Ok(ids)
    }

    async fn update(&self, id: EventId, patch: EventPatch) -> DomainResult<Event> {
        let mut guard = self.guard()?;
        let event = guard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RotaError::NotFound(format!("event {id}")))?;
        patch.apply(event);
        Ok(event.clone())
    }

    async fn delete(&self, id: EventId) -> DomainResult<()> {
        let mut guard = self.guard()?;
        let before = guard.len();
        guard.retain(|e| e.id != id);
        if guard.len() == before {
            return Err(RotaError::NotFound(format!("event {id}")));
        }
        Ok(())
    }

    async fn max_id(&self) -> DomainResult<EventId> {
        Ok(self.guard()?.iter().map(|e| e.id).max().unwrap_or(0))
    }

    async fn events_for_course(&self, course_id: i64) -> DomainResult<Vec<Event>> {
        Ok(self.guard()?.iter().filter(|e| e.course_id == Some(course_id)).cloned().collect())
    }

    async fn events_for_teacher(&self, teacher_id: &str) -> DomainResult<Vec<Event>> {
        Ok(self
            .guard()?
            .iter()
            .filter(|e| e.teacher_id.as_deref() == Some(teacher_id))
            .cloned()
            .collect())
    }

    async fn events_for_student(&self, student_id: &str) -> DomainResult<Vec<Event>> {
        Ok(self
            .guard()?
            .iter()
            .filter(|e| e.attendees.iter().any(|a| a.student_id == student_id))
            .cloned()
            .collect())
    }
}

/// Helper to build a stored event on a given day.
pub fn create_test_event(id: EventId, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
    Event {
        id,
        title: format!("Event {id}"),
        description: String::new(),
        location: String::new(),
        date,
        start_time: date.and_hms_opt(start.0, start.1, 0).unwrap_or_default(),
        end_time: date.and_hms_opt(end.0, end.1, 0).unwrap_or_default(),
        event_type: EventType::Lesson,
        recurring: false,
        teacher_id: Some("teacher1".to_string()),
        teacher: Some("Sarah Johnson".to_string()),
        course_id: Some(1),
        status: EventStatus::Scheduled,
        attendees: vec![],
    }
}
