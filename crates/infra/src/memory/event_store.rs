//! In-memory event store.
//!
//! The authoritative event collection: an id-indexed arena behind a
//! read-write lock, with a monotonic counter owning id assignment. Point
//! mutations are O(1) average; range queries materialize an ordered
//! `(date, start_time, id)` view on demand. The store is the single writer
//! in the system; engine reads see a consistent snapshot.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use rota_core::scheduling::ports::EventStore;
use rota_domain::{
    DateSpan, Event, EventDraft, EventId, EventPatch, Result, RotaError,
};
use tracing::debug;

/// Id-indexed in-memory event collection.
pub struct InMemoryEventStore {
    events: RwLock<HashMap<EventId, Event>>,
    next_id: AtomicI64,
}

impl InMemoryEventStore {
    /// Create an empty store; ids start at 1.
    pub fn new() -> Self {
        Self { events: RwLock::new(HashMap::new()), next_id: AtomicI64::new(1) }
    }

    /// Create a store seeded with existing events. The id counter starts
    /// past the highest seeded id.
    ///
    /// # Errors
    /// `RotaError::Validation` on duplicate seed ids; any seed event failing
    /// its own invariants propagates its error.
    pub fn with_events(seed: Vec<Event>) -> Result<Self> {
        let mut events = HashMap::with_capacity(seed.len());
        let mut max_id = 0;

        for event in seed {
            event.validate()?;
            let id = event.id;
            max_id = max_id.max(id);
            if events.insert(id, event).is_some() {
                return Err(RotaError::Validation(format!("duplicate seed event id {id}")));
            }
        }

        Ok(Self { events: RwLock::new(events), next_id: AtomicI64::new(max_id + 1) })
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    fn sorted(mut events: Vec<Event>) -> Vec<Event> {
        events.sort_by_key(|e| (e.date, e.start_time, e.id));
        events
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn events_in_range(&self, span: DateSpan) -> Result<Vec<Event>> {
        let events =
            self.events.read().values().filter(|e| span.contains(e.date)).cloned().collect();
        Ok(Self::sorted(events))
    }

    async fn event(&self, id: EventId) -> Result<Event> {
        self.events
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| RotaError::NotFound(format!("event {id}")))
    }

    async fn insert(&self, draft: EventDraft) -> Result<EventId> {
        draft.validate()?;
        let mut events = self.events.write();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        events.insert(id, draft.into_event(id));
        debug!(event_id = id, "inserted event");
        Ok(id)
    }

    async fn insert_batch(&self, batch: Vec<Event>) -> Result<Vec<EventId>> {
        let mut events = self.events.write();

        for event in &batch {
            event.validate()?;
            if events.contains_key(&event.id) {
                return Err(RotaError::Validation(format!(
                    "event id {} already exists in the store",
                    event.id
                )));
            }
        }

        let mut ids = Vec::with_capacity(batch.len());
        let mut highest = self.next_id.load(Ordering::SeqCst);
        for event in batch {
            highest = highest.max(event.id + 1);
            ids.push(event.id);
            events.insert(event.id, event);
        }
        // Counter advances past any carried id so later inserts stay unique
        self.next_id.store(highest, Ordering::SeqCst);

        debug!(count = ids.len(), "inserted event batch");
        Ok(ids)
    }

    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Event> {
        let mut events = self.events.write();
        let event =
            events.get_mut(&id).ok_or_else(|| RotaError::NotFound(format!("event {id}")))?;

        // Apply to a copy first; an invalid patched event never commits
        let mut patched = event.clone();
        patch.apply(&mut patched);
        patched.validate()?;

        *event = patched.clone();
        Ok(patched)
    }

    async fn delete(&self, id: EventId) -> Result<()> {
        self.events
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RotaError::NotFound(format!("event {id}")))
    }

    async fn max_id(&self) -> Result<EventId> {
        Ok(self.events.read().keys().copied().max().unwrap_or(0))
    }

    async fn events_for_course(&self, course_id: i64) -> Result<Vec<Event>> {
        let events = self
            .events
            .read()
            .values()
            .filter(|e| e.course_id == Some(course_id))
            .cloned()
            .collect();
        Ok(Self::sorted(events))
    }

    async fn events_for_teacher(&self, teacher_id: &str) -> Result<Vec<Event>> {
        let events = self
            .events
            .read()
            .values()
            .filter(|e| e.teacher_id.as_deref() == Some(teacher_id))
            .cloned()
            .collect();
        Ok(Self::sorted(events))
    }

    async fn events_for_student(&self, student_id: &str) -> Result<Vec<Event>> {
        let events = self
            .events
            .read()
            .values()
            .filter(|e| e.attendees.iter().any(|a| a.student_id == student_id))
            .cloned()
            .collect();
        Ok(Self::sorted(events))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rota_domain::{Attendee, EventStatus, EventType, RsvpStatus};

    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, d).unwrap()
    }

    fn create_test_draft(day: NaiveDate, start_hour: u32) -> EventDraft {
        EventDraft {
            title: "Lesson".to_string(),
            description: String::new(),
            location: String::new(),
            date: day,
            start_time: day.and_hms_opt(start_hour, 0, 0).unwrap(),
            end_time: day.and_hms_opt(start_hour + 1, 0, 0).unwrap(),
            event_type: EventType::Lesson,
            recurring: false,
            teacher_id: Some("teacher1".to_string()),
            teacher: None,
            course_id: Some(1),
            status: EventStatus::Scheduled,
            attendees: vec![],
        }
    }

    fn stored_event(id: EventId, day: NaiveDate, start_hour: u32) -> Event {
        create_test_draft(day, start_hour).into_event(id)
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids() {
        let store = InMemoryEventStore::new();

        let first = store.insert(create_test_draft(date(5), 9)).await.unwrap();
        let second = store.insert(create_test_draft(date(5), 11)).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.max_id().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn seeded_store_counts_from_highest_seed_id() {
        let store =
            InMemoryEventStore::with_events(vec![stored_event(41, date(5), 9)]).unwrap();

        let next = store.insert(create_test_draft(date(6), 9)).await.unwrap();
        assert_eq!(next, 42);
    }

    #[tokio::test]
    async fn duplicate_seed_ids_are_rejected() {
        let result = InMemoryEventStore::with_events(vec![
            stored_event(1, date(5), 9),
            stored_event(1, date(6), 9),
        ]);
        assert!(matches!(result, Err(RotaError::Validation(_))));
    }

    #[tokio::test]
    async fn range_query_is_ordered_and_inclusive() {
        let store = InMemoryEventStore::with_events(vec![
            stored_event(3, date(7), 9),
            stored_event(1, date(5), 11),
            stored_event(2, date(5), 9),
            stored_event(4, date(9), 9),
        ])
        .unwrap();

        let events = store
            .events_in_range(DateSpan { start: date(5), end: date(7) })
            .await
            .unwrap();

        let ids: Vec<EventId> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let store = InMemoryEventStore::new();
        assert!(matches!(store.event(7).await, Err(RotaError::NotFound(_))));
        assert!(matches!(store.delete(7).await, Err(RotaError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_applies_patch_and_keeps_rest() {
        let store =
            InMemoryEventStore::with_events(vec![stored_event(1, date(5), 9)]).unwrap();

        let patch = EventPatch { title: Some("Renamed".to_string()), ..Default::default() };
        let updated = store.update(1, patch).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.course_id, Some(1));
    }

    #[tokio::test]
    async fn invalid_patch_never_commits() {
        let store =
            InMemoryEventStore::with_events(vec![stored_event(1, date(5), 9)]).unwrap();

        // Move the end time before the start
        let patch = EventPatch {
            end_time: Some(date(5).and_hms_opt(8, 0, 0).unwrap()),
            ..Default::default()
        };
        let err = store.update(1, patch).await.unwrap_err();
        assert!(matches!(err, RotaError::Range(_)));

        // Stored event untouched
        let event = store.event(1).await.unwrap();
        assert_eq!(event.end_time, date(5).and_hms_opt(10, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn batch_insert_advances_the_counter_past_carried_ids() {
        let store = InMemoryEventStore::new();

        let batch = vec![stored_event(10, date(5), 9), stored_event(11, date(7), 9)];
        let ids = store.insert_batch(batch).await.unwrap();
        assert_eq!(ids, vec![10, 11]);

        let next = store.insert(create_test_draft(date(8), 9)).await.unwrap();
        assert_eq!(next, 12);
    }

    #[tokio::test]
    async fn batch_insert_rejects_id_collisions() {
        let store =
            InMemoryEventStore::with_events(vec![stored_event(1, date(5), 9)]).unwrap();

        let err = store
            .insert_batch(vec![stored_event(1, date(6), 9)])
            .await
            .unwrap_err();
        assert!(matches!(err, RotaError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn selectors_filter_by_course_teacher_and_student() {
        let mut tagged = stored_event(1, date(5), 9);
        tagged.attendees.push(Attendee {
            student_id: "s1".to_string(),
            student_name: "Mike Chen".to_string(),
            status: RsvpStatus::Confirmed,
        });
        let mut other = stored_event(2, date(6), 9);
        other.course_id = Some(2);
        other.teacher_id = Some("teacher2".to_string());

        let store = InMemoryEventStore::with_events(vec![tagged, other]).unwrap();

        assert_eq!(store.events_for_course(1).await.unwrap().len(), 1);
        assert_eq!(store.events_for_teacher("teacher2").await.unwrap().len(), 1);
        let for_student = store.events_for_student("s1").await.unwrap();
        assert_eq!(for_student.len(), 1);
        assert_eq!(for_student[0].id, 1);
    }
}
