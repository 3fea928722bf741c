//! Shared helpers for command integration tests.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rota_api::SchedulerContext;
use rota_domain::{
    CalendarConfig, EventDraft, EventStatus, EventTemplate, EventType, RecurrenceRule, WeekdaySet,
};

/// Context over an empty in-memory store with the default configuration.
pub fn create_test_context() -> Arc<SchedulerContext> {
    Arc::new(SchedulerContext::new(CalendarConfig::default()).expect("default config is valid"))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Helper to create an event draft on a given day and hour range.
pub fn create_test_draft(day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> EventDraft {
    EventDraft {
        title: "Music Theory Fundamentals".to_string(),
        description: "Introduction to music notation".to_string(),
        location: "Virtual Classroom 1".to_string(),
        date: day,
        start_time: day.and_hms_opt(start.0, start.1, 0).expect("valid start time"),
        end_time: day.and_hms_opt(end.0, end.1, 0).expect("valid end time"),
        event_type: EventType::Lecture,
        recurring: false,
        teacher_id: Some("teacher1".to_string()),
        teacher: Some("Sarah Johnson".to_string()),
        course_id: Some(1),
        status: EventStatus::Scheduled,
        attendees: vec![],
    }
}

/// Helper to create a Tuesday/Thursday weekly rule over the scenario range.
pub fn create_test_rule() -> RecurrenceRule {
    RecurrenceRule {
        template: EventTemplate {
            title: "Weekly Lesson".to_string(),
            description: String::new(),
            location: "Room 2".to_string(),
            event_type: EventType::Lesson,
            teacher_id: Some("teacher1".to_string()),
            teacher: Some("Sarah Johnson".to_string()),
            course_id: Some(1),
            start_clock: NaiveTime::from_hms_opt(10, 0, 0).expect("valid clock"),
            end_clock: NaiveTime::from_hms_opt(11, 0, 0).expect("valid clock"),
        },
        start_date: date(2023, 9, 5),
        end_date: date(2023, 9, 14),
        days_of_week: WeekdaySet::from_numbers(&[2, 4]).expect("valid weekday numbers"),
    }
}
