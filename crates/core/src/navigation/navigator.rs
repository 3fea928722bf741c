//! Navigator - anchor date and view mode state machine.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rota_domain::{DateSpan, NavDirection, ViewMode, ViewState};

/// Navigation state machine for the calendar views.
///
/// Week spans are aligned to one canonical week-start weekday for the whole
/// system (the configuration default is Monday). `go_to_today` takes the
/// current date as input so the machine stays a pure function of its
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewNavigator {
    state: ViewState,
    week_start: Weekday,
}

impl ViewNavigator {
    /// Create a navigator anchored on `anchor` in the given mode.
    pub fn new(anchor: NaiveDate, mode: ViewMode, week_start: Weekday) -> Self {
        Self { state: ViewState { anchor, mode }, week_start }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn anchor(&self) -> NaiveDate {
        self.state.anchor
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    /// Switch view mode, keeping the anchor date.
    pub fn set_view(&mut self, mode: ViewMode) {
        self.state.mode = mode;
    }

    /// Step the anchor one unit in the given direction: a day in day mode,
    /// seven days in week mode, one calendar month in month mode (the
    /// day-of-month clamps to the target month's length).
    pub fn navigate(&mut self, direction: NavDirection) {
        let delta = direction.delta();
        self.state.anchor = match self.state.mode {
            ViewMode::Day => self.state.anchor + Duration::days(delta),
            ViewMode::Week => self.state.anchor + Duration::days(7 * delta),
            ViewMode::Month => shift_months(self.state.anchor, delta),
        };
    }

    /// Reset the anchor to the supplied current date, keeping the mode.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.state.anchor = today;
    }

    /// The inclusive date span the current mode displays.
    pub fn visible_range(&self) -> DateSpan {
        match self.state.mode {
            ViewMode::Day => DateSpan::single(self.state.anchor),
            ViewMode::Week => week_span(self.state.anchor, self.week_start),
            ViewMode::Month => month_span(self.state.anchor),
        }
    }

    /// Month range widened with the leading/trailing days needed to complete
    /// full week rows for a grid display.
    pub fn month_grid_span(&self) -> DateSpan {
        let month = month_span(self.state.anchor);
        let start = week_span(month.start, self.week_start).start;
        let end = week_span(month.end, self.week_start).end;
        DateSpan { start, end }
    }
}

/// The 7-day span containing `anchor`, starting on `week_start`.
fn week_span(anchor: NaiveDate, week_start: Weekday) -> DateSpan {
    let offset =
        (7 + anchor.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let start = anchor - Duration::days(i64::from(offset));
    DateSpan { start, end: start + Duration::days(6) }
}

/// The full calendar month containing `anchor`.
fn month_span(anchor: NaiveDate) -> DateSpan {
    let start = anchor - Duration::days(i64::from(anchor.day()) - 1);
    let end_day = days_in_month(anchor.year(), anchor.month());
    let end = start + Duration::days(i64::from(end_day) - 1);
    DateSpan { start, end }
}

/// Shift a date by whole calendar months, clamping the day-of-month to the
/// target month's length (Jan 31 + 1 month = Feb 28/29).
fn shift_months(date: NaiveDate, delta: i64) -> NaiveDate {
    let zero_based = i64::from(date.year()) * 12 + i64::from(date.month0());
    let target = zero_based + delta;
    let year = i32::try_from(target.div_euclid(12)).unwrap_or(date.year());
    let month = u32::try_from(target.rem_euclid(12)).unwrap_or(0) + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month_start.and_then(|d| d.pred_opt()).map_or(31, |d| d.day())
}
