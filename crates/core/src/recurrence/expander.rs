//! Expander - materializes a recurrence rule into dated occurrences.

use chrono::Datelike;
use rota_domain::{Event, EventId, RecurrenceRule, Result};
use tracing::debug;

/// Expand a recurrence rule into concrete occurrences.
///
/// Walks each calendar day from `start_date` to `end_date` inclusive and
/// materializes the template on every day whose weekday is in the rule's
/// set. Ids are assigned `existing_max_id + 1, + 2, ...` in date order so
/// every id produced by one call is distinct and strictly greater than
/// `existing_max_id`. Each occurrence carries `recurring = true` and an
/// empty attendee list; the template itself is never mutated.
///
/// A range with no matching weekday is a valid empty result. Occurrences
/// are NOT deduplicated against events already in the store; re-running a
/// rule over an overlapping range is the caller's policy decision.
///
/// # Errors
/// `RotaError::Range` when `start_date > end_date` or the template's end
/// clock precedes its start clock.
pub fn expand(rule: &RecurrenceRule, existing_max_id: EventId) -> Result<Vec<Event>> {
    rule.validate()?;

    let mut occurrences = Vec::new();
    let mut next_id = existing_max_id;

    let mut current = rule.start_date;
    while current <= rule.end_date {
        if rule.days_of_week.contains(current.weekday()) {
            next_id += 1;
            occurrences.push(rule.template.materialize(next_id, current));
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        title = %rule.template.title,
        start = %rule.start_date,
        end = %rule.end_date,
        count = occurrences.len(),
        "expanded recurrence rule"
    );

    Ok(occurrences)
}
