//! Roll-call sheets - post-sitting attendance records and rate statistics.
//!
//! A sheet records who actually showed up to one event sitting, separate
//! from the forward-looking RSVP list. All operations are pure transforms
//! over a sheet collection.

use chrono::NaiveDate;
use rota_domain::{AttendanceMark, AttendanceSheet, AttendanceStatus, EventId};

/// Upsert a sheet keyed by `(event_id, date)`.
///
/// An existing sheet has its records replaced; otherwise a new sheet is
/// appended under the next free id.
pub fn record_sheet(
    sheets: &[AttendanceSheet],
    event_id: EventId,
    course_id: Option<i64>,
    date: NaiveDate,
    records: Vec<AttendanceMark>,
) -> Vec<AttendanceSheet> {
    let mut updated = sheets.to_vec();

    match updated.iter_mut().find(|s| s.event_id == event_id && s.date == date) {
        Some(sheet) => {
            sheet.records = records;
        }
        None => {
            let next_id = updated.iter().map(|s| s.id).max().unwrap_or(0) + 1;
            updated.push(AttendanceSheet { id: next_id, event_id, course_id, date, records });
        }
    }

    updated
}

/// Upsert one student's mark within a sheet.
///
/// An existing record keeps its note unless a new one is supplied; a new
/// record starts with the supplied note or empty.
pub fn mark(
    sheet: &AttendanceSheet,
    student_id: &str,
    student_name: &str,
    status: AttendanceStatus,
    note: Option<&str>,
) -> AttendanceSheet {
    let mut updated = sheet.clone();

    match updated.records.iter_mut().find(|r| r.student_id == student_id) {
        Some(record) => {
            record.status = status;
            if let Some(note) = note {
                record.note = note.to_string();
            }
        }
        None => {
            updated.records.push(AttendanceMark {
                student_id: student_id.to_string(),
                student_name: student_name.to_string(),
                status,
                note: note.unwrap_or_default().to_string(),
            });
        }
    }

    updated
}

/// Remove a sheet by id.
pub fn delete_sheet(sheets: &[AttendanceSheet], id: i64) -> Vec<AttendanceSheet> {
    sheets.iter().filter(|s| s.id != id).cloned().collect()
}

/// Percentage of records marked present. Empty input rates zero.
pub fn attendance_rate(records: &[AttendanceMark]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let present = records.iter().filter(|r| r.status == AttendanceStatus::Present).count();
    present as f64 / records.len() as f64 * 100.0
}

/// Attendance rate across a course's sheets, optionally narrowed to one
/// student.
pub fn course_rate(
    sheets: &[AttendanceSheet],
    course_id: i64,
    student_id: Option<&str>,
) -> f64 {
    let course_sheets = sheets.iter().filter(|s| s.course_id == Some(course_id));
    match student_id {
        Some(student) => {
            let records: Vec<AttendanceMark> = course_sheets
                .filter_map(|s| s.records.iter().find(|r| r.student_id == student).cloned())
                .collect();
            attendance_rate(&records)
        }
        None => {
            let records: Vec<AttendanceMark> =
                course_sheets.flat_map(|s| s.records.iter().cloned()).collect();
            attendance_rate(&records)
        }
    }
}

/// Overall attendance rate, optionally narrowed to one student.
pub fn overall_rate(sheets: &[AttendanceSheet], student_id: Option<&str>) -> f64 {
    match student_id {
        Some(student) => {
            let records: Vec<AttendanceMark> = sheets
                .iter()
                .filter_map(|s| s.records.iter().find(|r| r.student_id == student).cloned())
                .collect();
            attendance_rate(&records)
        }
        None => {
            let records: Vec<AttendanceMark> =
                sheets.iter().flat_map(|s| s.records.iter().cloned()).collect();
            attendance_rate(&records)
        }
    }
}
