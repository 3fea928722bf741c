//! Layout builder - turns a day's events into positioned layout blocks.

use std::ops::Range;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rota_domain::{CalendarConfig, Event, LayoutBlock, Result};

use crate::timegrid;

/// Effective interval for one event at the layout stage.
///
/// Zero-duration events borrow the configured minimum height so they occupy
/// visual space; the stored event times are never altered.
struct Interval<'a> {
    event: &'a Event,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Layout builder - computes per-day column layout for a set of events.
pub struct LayoutBuilder {
    config: CalendarConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder over a validated configuration.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compute layout blocks for the events occurring on `date`.
    ///
    /// # Algorithm
    /// 1. Filter to events on the target day and sort by `start_time`
    ///    ascending, tie-break by `id` ascending for determinism
    /// 2. Build overlap clusters by scanning chronologically, merging an
    ///    event into the current cluster while its start is strictly before
    ///    the cluster's running maximum end. This yields connected components
    ///    of the overlap graph, so three mutually overlapping events each get
    ///    a third of the width instead of inconsistent pairwise slots
    /// 3. Within a cluster, assign columns greedily: lowest-numbered column
    ///    whose previous occupant has ended; the cluster's `column_count` is
    ///    the number of columns used (its maximum concurrency)
    /// 4. Identical degenerate/duplicate intervals each receive their own
    ///    column
    ///
    /// Offsets are relative to the window start and are NOT clamped; events
    /// outside the window come back with negative or overflowing offsets for
    /// the caller to clip, scroll, or reject.
    ///
    /// # Errors
    /// `RotaError::Range`/`Validation` when an input event violates its time
    /// invariants. An empty day is an empty result, not an error.
    pub fn layout_for_day(&self, date: NaiveDate, events: &[Event]) -> Result<Vec<LayoutBlock>> {
        let mut day_events: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();
        if day_events.is_empty() {
            return Ok(Vec::new());
        }

        for event in &day_events {
            event.validate()?;
        }

        // Sort by start time, tie-break by id for deterministic output
        day_events.sort_by_key(|e| (e.start_time, e.id));

        let intervals: Vec<Interval<'_>> =
            day_events.into_iter().map(|event| self.effective_interval(event)).collect();

        let mut blocks = Vec::with_capacity(intervals.len());
        for cluster in cluster_ranges(&intervals) {
            self.assign_columns(&intervals[cluster], &mut blocks);
        }

        Ok(blocks)
    }

    /// Scale helper exposed for presentation callers.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn effective_interval<'a>(&self, event: &'a Event) -> Interval<'a> {
        let end = if event.start_time == event.end_time {
            // Layout-stage clamp only; stored duration stays zero
            event.start_time + Duration::minutes(self.config.min_block_minutes)
        } else {
            event.end_time
        };
        Interval { event, start: event.start_time, end }
    }

    /// Greedy interval-graph coloring over one cluster.
    fn assign_columns(&self, cluster: &[Interval<'_>], blocks: &mut Vec<LayoutBlock>) {
        let mut column_ends: Vec<NaiveDateTime> = Vec::new();
        let mut assigned: Vec<usize> = Vec::with_capacity(cluster.len());

        for interval in cluster {
            // Lowest-numbered column whose occupant has ended
            let column = column_ends.iter().position(|&end| end <= interval.start);
            let column = match column {
                Some(index) => {
                    column_ends[index] = interval.end;
                    index
                }
                None => {
                    column_ends.push(interval.end);
                    column_ends.len() - 1
                }
            };
            assigned.push(column);
        }

        let column_count = column_ends.len();
        for (interval, column_index) in cluster.iter().zip(assigned) {
            blocks.push(LayoutBlock {
                event_id: interval.event.id,
                start_offset_minutes: timegrid::offset_minutes(
                    interval.start,
                    self.config.window_start_hour,
                ),
                duration_minutes: (interval.end - interval.start).num_minutes(),
                column_index,
                column_count,
            });
        }
    }
}

/// Split sorted intervals into maximal overlap clusters.
fn cluster_ranges(intervals: &[Interval<'_>]) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    let mut begin = 0;
    let mut max_end = intervals[0].end;

    for (i, interval) in intervals.iter().enumerate().skip(1) {
        if interval.start < max_end {
            max_end = max_end.max(interval.end);
        } else {
            clusters.push(begin..i);
            begin = i;
            max_end = interval.end;
        }
    }
    clusters.push(begin..intervals.len());

    clusters
}
