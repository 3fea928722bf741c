//! Calendar view commands

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use rota_core::{timegrid, ScheduleView};
use rota_domain::{DateSpan, LayoutBlock, Result, ViewMode, ViewState};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::SchedulerContext;

/// Compute the positioned schedule for a navigation state: one day schedule
/// per visible date.
pub async fn schedule_view(
    ctx: &Arc<SchedulerContext>,
    anchor: NaiveDate,
    mode: ViewMode,
) -> Result<ScheduleView> {
    let command_name = "calendar::schedule_view";
    let start = Instant::now();

    info!(command = command_name, %anchor, ?mode, "Computing schedule view");
    let result = ctx.schedule.view(ViewState { anchor, mode }).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Layout blocks for one day's events.
pub async fn layout_for_day(
    ctx: &Arc<SchedulerContext>,
    date: NaiveDate,
) -> Result<Vec<LayoutBlock>> {
    let command_name = "calendar::layout_for_day";
    let start = Instant::now();

    let result = ctx.schedule.layout_for_day(date).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// The inclusive date span a view mode displays around an anchor date.
pub fn visible_range(ctx: &SchedulerContext, anchor: NaiveDate, mode: ViewMode) -> DateSpan {
    ctx.schedule.navigator(ViewState { anchor, mode }).visible_range()
}

/// Month range widened to complete week rows for a grid display.
pub fn month_grid_range(ctx: &SchedulerContext, anchor: NaiveDate) -> DateSpan {
    ctx.schedule.navigator(ViewState { anchor, mode: ViewMode::Month }).month_grid_span()
}

/// Offset of the "current time" marker within the daily window, or `None`
/// outside the configured hours. Driven by the frontend's periodic tick.
pub fn time_marker(ctx: &SchedulerContext, now: NaiveDateTime) -> Option<i64> {
    timegrid::marker_offset(now, &ctx.config)
}

/// Gutter labels for the configured daily window, one per hour row
/// (`"8 AM"` through `"8 PM"` with the defaults).
pub fn hour_labels(ctx: &SchedulerContext) -> Vec<String> {
    (ctx.config.window_start_hour..=ctx.config.window_end_hour)
        .map(rota_domain::format_hour_label)
        .collect()
}
