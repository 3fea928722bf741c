//! Domain types and models
//!
//! The wire shape (camelCase field names, `2023-09-11T10:00:00` timestamps)
//! matches what the frontend already exchanges with the store.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, RotaError};
use crate::utils::clock::format_clock;

/// Stable event identifier, assigned by the store.
pub type EventId = i64;

// ============================================================================
// Event
// ============================================================================

/// Display/categorization tag. No behavioral effect on layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Lesson,
    Practice,
    Exam,
    Workshop,
    Meeting,
    OfficeHours,
    Lecture,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Practice => "practice",
            Self::Exam => "exam",
            Self::Workshop => "workshop",
            Self::Meeting => "meeting",
            Self::OfficeHours => "office-hours",
            Self::Lecture => "lecture",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Canceled,
    Rescheduled,
}

/// A student's attendance confirmation for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = RotaError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            other => Err(RotaError::Validation(format!("invalid RSVP status: {other}"))),
        }
    }
}

/// Attendee record embedded in an event, keyed by `student_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub student_id: String,
    pub student_name: String,
    #[serde(default)]
    pub status: RsvpStatus,
}

impl Attendee {
    /// New attendee with the default `pending` status.
    pub fn pending(student_id: impl Into<String>, student_name: impl Into<String>) -> Self {
        Self { student_id: student_id.into(), student_name: student_name.into(), status: RsvpStatus::Pending }
    }
}

/// A schedule entry: one dated, timed event.
///
/// Invariant: `start_time` and `end_time` fall on `date`; the model does not
/// support cross-midnight events. Zero-duration events are representable
/// (the layout stage floors their rendered height, never the stored times).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl Event {
    /// Check the event's time invariants.
    ///
    /// # Errors
    /// - `RotaError::Range` when `end_time` is before `start_time`
    /// - `RotaError::Validation` when either timestamp is off `date`
    pub fn validate(&self) -> Result<()> {
        if self.start_time.date() != self.date || self.end_time.date() != self.date {
            return Err(RotaError::Validation(format!(
                "event {} times do not fall on its date {}",
                self.id, self.date
            )));
        }
        if self.end_time < self.start_time {
            return Err(RotaError::Range(format!(
                "event {} ends before it starts ({} < {})",
                self.id, self.end_time, self.start_time
            )));
        }
        Ok(())
    }

    /// Stored duration in minutes. Zero for point events.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Human-readable time span, e.g. `"10:00 AM - 11:30 AM"`.
    pub fn time_label(&self) -> String {
        format!("{} - {}", format_clock(self.start_time.time()), format_clock(self.end_time.time()))
    }

    /// Look up an attendee by student id.
    pub fn attendee(&self, student_id: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.student_id == student_id)
    }
}

/// Payload for creating an event, before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl EventDraft {
    /// Promote the draft to a stored event under the given id.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            event_type: self.event_type,
            recurring: self.recurring,
            teacher_id: self.teacher_id,
            teacher: self.teacher,
            course_id: self.course_id,
            status: self.status,
            attendees: self.attendees,
        }
    }

    /// Same invariants as [`Event::validate`].
    pub fn validate(&self) -> Result<()> {
        // Id is not assigned yet; borrow the event-level checks.
        self.clone().into_event(0).validate()
    }

    /// Build a draft from a date and a 12-hour span label, e.g.
    /// `"10:00 AM - 11:30 AM"`.
    ///
    /// # Errors
    /// `RotaError::Parse` when the label cannot be decomposed into
    /// hour/minute/period; `RotaError::Range` when the parsed span is
    /// inverted.
    pub fn from_time_label(
        title: impl Into<String>,
        date: NaiveDate,
        time_label: &str,
        event_type: EventType,
    ) -> Result<Self> {
        let (start, end) = crate::utils::clock::parse_time_label(time_label)?;
        let draft = Self {
            title: title.into(),
            description: String::new(),
            location: String::new(),
            date,
            start_time: date.and_time(start),
            end_time: date.and_time(end),
            event_type,
            recurring: false,
            teacher_id: None,
            teacher: None,
            course_id: None,
            status: EventStatus::Scheduled,
            attendees: Vec::new(),
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Partial-field patch addressed to an event id.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,
}

impl EventPatch {
    /// Apply the patch to an event in place.
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(recurring) = self.recurring {
            event.recurring = recurring;
        }
        if let Some(teacher_id) = &self.teacher_id {
            event.teacher_id = Some(teacher_id.clone());
        }
        if let Some(teacher) = &self.teacher {
            event.teacher = Some(teacher.clone());
        }
        if let Some(course_id) = self.course_id {
            event.course_id = Some(course_id);
        }
        if let Some(status) = self.status {
            event.status = status;
        }
        if let Some(attendees) = &self.attendees {
            event.attendees = attendees.clone();
        }
    }

    /// True when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Recurrence
// ============================================================================

/// Set of weekdays, wire-encoded as numbers 0=Sunday … 6=Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct WeekdaySet {
    days: [bool; 7],
}

impl WeekdaySet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from weekday values.
    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::empty();
        for day in days {
            set.insert(day);
        }
        set
    }

    /// Build from 0=Sunday … 6=Saturday numbers.
    ///
    /// # Errors
    /// `RotaError::Validation` for any number outside 0-6.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self> {
        let mut set = Self::empty();
        for &n in numbers {
            if n > 6 {
                return Err(RotaError::Validation(format!("invalid weekday number: {n}")));
            }
            set.days[n as usize] = true;
        }
        Ok(set)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.days[day.num_days_from_sunday() as usize] = true;
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days[day.num_days_from_sunday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.days.iter().any(|&d| d)
    }

    pub fn len(&self) -> usize {
        self.days.iter().filter(|&&d| d).count()
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        (0u8..7).filter(|&n| set.days[n as usize]).collect()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = RotaError;

    fn try_from(numbers: Vec<u8>) -> Result<Self> {
        Self::from_numbers(&numbers)
    }
}

/// Template event for recurrence expansion: an [`Event`] minus `id`, `date`
/// and `attendees`, with times held as time-of-day components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
    pub start_clock: NaiveTime,
    pub end_clock: NaiveTime,
}

impl EventTemplate {
    /// # Errors
    /// `RotaError::Range` when the template ends before it starts.
    pub fn validate(&self) -> Result<()> {
        if self.end_clock < self.start_clock {
            return Err(RotaError::Range(format!(
                "template '{}' ends before it starts ({} < {})",
                self.title, self.end_clock, self.start_clock
            )));
        }
        Ok(())
    }

    /// Produce a concrete occurrence on `date` under a fresh id.
    ///
    /// The template itself is never mutated; every occurrence starts with an
    /// empty attendee list and `recurring = true`.
    pub fn materialize(&self, id: EventId, date: NaiveDate) -> Event {
        Event {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date,
            start_time: date.and_time(self.start_clock),
            end_time: date.and_time(self.end_clock),
            event_type: self.event_type,
            recurring: true,
            teacher_id: self.teacher_id.clone(),
            teacher: self.teacher.clone(),
            course_id: self.course_id,
            status: EventStatus::Scheduled,
            attendees: Vec::new(),
        }
    }
}

/// Weekly recurrence over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(rename = "baseEvent")]
    pub template: EventTemplate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_of_week: WeekdaySet,
}

impl RecurrenceRule {
    /// # Errors
    /// `RotaError::Range` when the date bounds are inverted or the template
    /// itself is inverted.
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(RotaError::Range(format!(
                "recurrence start {} is after end {}",
                self.start_date, self.end_date
            )));
        }
        self.template.validate()
    }
}

// ============================================================================
// Views & layout
// ============================================================================

/// Calendar view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

/// Navigation direction for [`ViewMode`] stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    /// Signed step multiplier (-1 or +1).
    pub fn delta(&self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Navigation state: the date the view is centered on and the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub anchor: NaiveDate,
    pub mode: ViewMode,
}

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Span covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate the covered days in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Computed geometric placement for one event within a day's rendering.
///
/// `duration_minutes` is layout height: for degenerate events it is floored
/// to the configured minimum while the stored event duration stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBlock {
    pub event_id: EventId,
    /// Minutes since the window start; negative when the event starts before
    /// the window (no clamping at this layer).
    pub start_offset_minutes: i64,
    pub duration_minutes: i64,
    pub column_index: usize,
    pub column_count: usize,
}

// ============================================================================
// Roll-call attendance
// ============================================================================

/// Roll-call outcome for one student at one event sitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl FromStr for AttendanceStatus {
    type Err = RotaError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "excused" => Ok(Self::Excused),
            other => Err(RotaError::Validation(format!("invalid attendance status: {other}"))),
        }
    }
}

/// One student's mark within an [`AttendanceSheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub student_id: String,
    pub student_name: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub note: String,
}

/// Roll-call record for one event sitting, keyed by `(event_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSheet {
    pub id: i64,
    pub event_id: EventId,
    #[serde(default)]
    pub course_id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub records: Vec<AttendanceMark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_event() -> Event {
        let day = date(2023, 9, 11);
        Event {
            id: 1,
            title: "Music Theory Fundamentals".to_string(),
            description: String::new(),
            location: "Virtual Classroom 1".to_string(),
            date: day,
            start_time: day.and_hms_opt(10, 0, 0).unwrap(),
            end_time: day.and_hms_opt(11, 30, 0).unwrap(),
            event_type: EventType::Lecture,
            recurring: false,
            teacher_id: Some("teacher1".to_string()),
            teacher: Some("Sarah Johnson".to_string()),
            course_id: Some(1),
            status: EventStatus::Scheduled,
            attendees: vec![],
        }
    }

    #[test]
    fn event_validates_date_alignment() {
        let mut event = sample_event();
        assert!(event.validate().is_ok());

        event.end_time = date(2023, 9, 12).and_hms_opt(0, 30, 0).unwrap();
        assert!(matches!(event.validate(), Err(RotaError::Validation(_))));
    }

    #[test]
    fn event_rejects_negative_duration_only() {
        let mut event = sample_event();
        event.end_time = event.start_time;
        // Zero-duration point events are storable
        assert!(event.validate().is_ok());
        assert_eq!(event.duration_minutes(), 0);

        event.end_time = event.start_time - chrono::Duration::minutes(1);
        assert!(matches!(event.validate(), Err(RotaError::Range(_))));
    }

    #[test]
    fn time_label_renders_twelve_hour_span() {
        let event = sample_event();
        assert_eq!(event.time_label(), "10:00 AM - 11:30 AM");
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut event = sample_event();
        let patch = EventPatch {
            title: Some("Renamed".to_string()),
            status: Some(EventStatus::Canceled),
            ..Default::default()
        };
        patch.apply(&mut event);

        assert_eq!(event.title, "Renamed");
        assert_eq!(event.status, EventStatus::Canceled);
        assert_eq!(event.location, "Virtual Classroom 1");
    }

    #[test]
    fn weekday_set_round_trips_sunday_numbering() {
        // 2 = Tuesday, 4 = Thursday in 0=Sunday numbering
        let set = WeekdaySet::from_numbers(&[2, 4]).unwrap();
        assert!(set.contains(Weekday::Tue));
        assert!(set.contains(Weekday::Thu));
        assert!(!set.contains(Weekday::Sun));
        assert_eq!(Vec::<u8>::from(set), vec![2, 4]);
    }

    #[test]
    fn weekday_set_rejects_out_of_range_numbers() {
        assert!(matches!(WeekdaySet::from_numbers(&[7]), Err(RotaError::Validation(_))));
    }

    #[test]
    fn template_materializes_fresh_occurrence() {
        let template = EventTemplate {
            title: "Weekly Lesson".to_string(),
            description: String::new(),
            location: "Room 2".to_string(),
            event_type: EventType::Lesson,
            teacher_id: Some("teacher1".to_string()),
            teacher: None,
            course_id: None,
            start_clock: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_clock: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        };

        let event = template.materialize(7, date(2023, 9, 5));
        assert_eq!(event.id, 7);
        assert_eq!(event.date, date(2023, 9, 5));
        assert_eq!(event.start_time, date(2023, 9, 5).and_hms_opt(10, 0, 0).unwrap());
        assert!(event.recurring);
        assert!(event.attendees.is_empty());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn date_span_iterates_inclusive_days() {
        let span = DateSpan { start: date(2023, 9, 5), end: date(2023, 9, 7) };
        let days: Vec<_> = span.days().collect();
        assert_eq!(days, vec![date(2023, 9, 5), date(2023, 9, 6), date(2023, 9, 7)]);
        assert_eq!(span.num_days(), 3);
    }

    #[test]
    fn draft_from_time_label_parses_the_span() {
        let draft = EventDraft::from_time_label(
            "Office Hours",
            date(2023, 9, 11),
            "1:00 PM - 2:30 PM",
            EventType::OfficeHours,
        )
        .unwrap();

        assert_eq!(draft.start_time, date(2023, 9, 11).and_hms_opt(13, 0, 0).unwrap());
        assert_eq!(draft.end_time, date(2023, 9, 11).and_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn draft_from_garbled_label_is_a_parse_error() {
        let result = EventDraft::from_time_label(
            "Office Hours",
            date(2023, 9, 11),
            "13:00 - 14:30",
            EventType::OfficeHours,
        );
        assert!(matches!(result, Err(RotaError::Parse(_))));
    }

    #[test]
    fn draft_from_inverted_label_is_a_range_error() {
        let result = EventDraft::from_time_label(
            "Office Hours",
            date(2023, 9, 11),
            "2:30 PM - 1:00 PM",
            EventType::OfficeHours,
        );
        assert!(matches!(result, Err(RotaError::Range(_))));
    }

    #[test]
    fn event_serializes_with_camel_case_wire_names() {
        let value = serde_json::to_value(sample_event()).unwrap();
        assert!(value.get("startTime").is_some());
        assert!(value.get("teacherId").is_some());
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("lecture"));
    }
}
