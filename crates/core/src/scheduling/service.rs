//! Schedule service - ties navigation, expansion and layout together.

use std::sync::Arc;

use ahash::AHashMap as HashMap;
use chrono::NaiveDate;
use rota_domain::{
    CalendarConfig, DateSpan, Event, EventDraft, EventId, EventPatch, LayoutBlock, RecurrenceRule,
    Result, RsvpStatus, ViewState,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ports::EventStore;
use crate::attendance::rsvp;
use crate::layout::LayoutBuilder;
use crate::navigation::ViewNavigator;
use crate::recurrence;

/// One day of a computed schedule view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub events: Vec<Event>,
    pub blocks: Vec<LayoutBlock>,
}

/// The ordered, positioned event list handed to presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub span: DateSpan,
    pub days: Vec<DaySchedule>,
}

/// Calendar orchestration service.
///
/// Every render recomputes from a fresh store snapshot: visible range →
/// range query → per-day overlap layout. The pipeline is intentionally
/// uncached; cost is dominated by the per-day layout sort.
pub struct ScheduleService {
    store: Arc<dyn EventStore>,
    config: CalendarConfig,
    layout: LayoutBuilder,
}

impl ScheduleService {
    /// Create a new schedule service over a validated configuration.
    pub fn new(store: Arc<dyn EventStore>, config: CalendarConfig) -> Result<Self> {
        let layout = LayoutBuilder::new(config.clone())?;
        Ok(Self { store, config, layout })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Navigator seeded with this service's week-start convention.
    pub fn navigator(&self, state: ViewState) -> ViewNavigator {
        ViewNavigator::new(state.anchor, state.mode, self.config.week_start)
    }

    /// Compute the full view for a navigation state: one positioned day
    /// schedule per visible date.
    pub async fn view(&self, state: ViewState) -> Result<ScheduleView> {
        let span = self.navigator(state).visible_range();
        let events = self.store.events_in_range(span).await?;
        debug!(start = %span.start, end = %span.end, count = events.len(), "computing schedule view");

        let mut by_date: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
        for event in events {
            by_date.entry(event.date).or_default().push(event);
        }

        let mut days = Vec::with_capacity(span.num_days() as usize);
        for date in span.days() {
            let day_events = by_date.remove(&date).unwrap_or_default();
            let blocks = self.layout.layout_for_day(date, &day_events)?;
            days.push(DaySchedule { date, events: day_events, blocks });
        }

        Ok(ScheduleView { span, days })
    }

    /// Layout blocks for one day's events, fetched from the store.
    pub async fn layout_for_day(&self, date: NaiveDate) -> Result<Vec<LayoutBlock>> {
        let events = self.store.events_in_range(DateSpan::single(date)).await?;
        self.layout.layout_for_day(date, &events)
    }

    /// Events within an inclusive date span.
    pub async fn events_in_range(&self, span: DateSpan) -> Result<Vec<Event>> {
        self.store.events_in_range(span).await
    }

    /// Create a single event; the store assigns the id.
    pub async fn create_event(&self, draft: EventDraft) -> Result<EventId> {
        draft.validate()?;
        let id = self.store.insert(draft).await?;
        info!(event_id = id, "created event");
        Ok(id)
    }

    /// Apply a partial-field patch to an event.
    pub async fn update_event(&self, id: EventId, patch: EventPatch) -> Result<Event> {
        self.store.update(id, patch).await
    }

    /// Delete an event by id.
    pub async fn delete_event(&self, id: EventId) -> Result<()> {
        self.store.delete(id).await?;
        info!(event_id = id, "deleted event");
        Ok(())
    }

    /// Expand a recurrence rule without writing anything, so the batch can
    /// be inspected before committing.
    pub async fn preview_recurrence(&self, rule: &RecurrenceRule) -> Result<Vec<Event>> {
        let max_id = self.store.max_id().await?;
        recurrence::expand(rule, max_id)
    }

    /// Expand a recurrence rule and commit the occurrences to the store.
    ///
    /// No deduplication against existing events is performed; see
    /// [`preview_recurrence`](Self::preview_recurrence) for the inspection
    /// path.
    pub async fn commit_recurrence(&self, rule: &RecurrenceRule) -> Result<Vec<EventId>> {
        let max_id = self.store.max_id().await?;
        let occurrences = recurrence::expand(rule, max_id)?;
        if occurrences.is_empty() {
            return Ok(Vec::new());
        }

        let ids = self.store.insert_batch(occurrences).await?;
        info!(count = ids.len(), "committed recurring events");
        Ok(ids)
    }

    /// Set a student's RSVP status on an event and persist the new attendee
    /// list as a patch.
    pub async fn set_attendee_status(
        &self,
        event_id: EventId,
        student_id: &str,
        student_name: &str,
        status: RsvpStatus,
    ) -> Result<Event> {
        let event = self.store.event(event_id).await?;
        let updated = rsvp::set_status(&event, student_id, student_name, status);

        let patch = EventPatch { attendees: Some(updated.attendees), ..Default::default() };
        self.store.update(event_id, patch).await
    }

    /// Remove a student's attendee record from an event.
    pub async fn remove_attendee(&self, event_id: EventId, student_id: &str) -> Result<Event> {
        let event = self.store.event(event_id).await?;
        let updated = rsvp::remove_attendee(&event, student_id);

        let patch = EventPatch { attendees: Some(updated.attendees), ..Default::default() };
        self.store.update(event_id, patch).await
    }
}
