//! Per-day candidate availability window selection
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::core::config::{Context, HourRange, Policy};
use crate::engine::interval::Interval;

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn range_window(date: NaiveDate, hours: HourRange) -> Option<Interval> {
    if !hours.is_valid() {
        return None;
    }
    let start = date.and_hms_opt(hours.start_hour, 0, 0)?;
    let end = date.and_hms_opt(hours.end_hour, 0, 0)?;
    Some(Interval::new(start, end))
}

/// The candidate window for one calendar day under the policy's context, or
/// `None` when the day is out of scope (weekend in work context) or the
/// configured hour range is invalid.
pub fn day_window(date: NaiveDate, policy: &Policy) -> Option<Interval> {
    match policy.context {
        Context::Work => {
            if is_weekend(date) {
                return None;
            }
            range_window(date, policy.work_hours)
        }
        Context::Personal => {
            let hours = if is_weekend(date) {
                policy.personal_hours.weekends
            } else {
                policy.personal_hours.weekdays
            };
            range_window(date, hours)
        }
    }
}

/// For today, advance the window start to the next full hour at or after
/// `now`; the start never retreats. Returns `None` when no time is left.
pub fn trim_for_today(
    window: Interval,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Option<Interval> {
    if date != now.date() {
        return Some(window);
    }
    let mut next_hour = now
        .date()
        .and_hms_opt(now.hour(), 0, 0)
        .unwrap_or(window.start);
    if now.minute() > 0 || now.second() > 0 {
        next_hour += chrono::Duration::hours(1);
    }
    let start = window.start.max(next_hour);
    if start >= window.end {
        return None;
    }
    Some(Interval::new(start, window.end))
}
