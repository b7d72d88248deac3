//! Maps raw calendar events onto merged busy intervals for one day
use chrono::{NaiveDate, NaiveTime};

use crate::calendar::Event;
use crate::core::config::Policy;
use crate::engine::interval::{Interval, clip, merge_overlapping};

/// Minutes of travel padding applied to offline events when no explicit
/// time buffer is configured.
const LEGACY_TRAVEL_BUFFER_MINS: i64 = 60;

/// Heuristic online/offline detection over the free-text location field.
/// A conferencing link always wins; an empty location is assumed online.
pub fn is_online_location(location: Option<&str>, conference_link: Option<&str>) -> bool {
    if conference_link.is_some_and(|link| !link.is_empty()) {
        return true;
    }
    let Some(location) = location else {
        return true;
    };
    if location.trim().is_empty() {
        return true;
    }
    let loc = location.to_lowercase();
    ["zoom", "meet.google.com", "teams.microsoft.com", "online", "virtual"]
        .iter()
        .any(|needle| loc.contains(needle))
}

/// True when the event's occurrence overlaps the given calendar day: either
/// it starts within the day, or it started earlier and is still running at
/// the day's start (multi-day events).
fn occurs_on(start: chrono::NaiveDateTime, end: chrono::NaiveDateTime, date: NaiveDate) -> bool {
    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = day_start + chrono::Duration::days(1);
    (start >= day_start && start < day_end) || (start < day_start && end > day_start)
}

/// Build the merged busy intervals for one day window. All-day events count
/// as busy for the whole window only when their calendar is opted in via
/// `full_day_busy_calendars`. Timed events are padded (configured buffer, or
/// the legacy 60-minute travel rule for offline events), clipped to the
/// window, and merged. A malformed event boundary drops that event only.
pub fn build_busy_intervals(
    events: &[Event],
    date: NaiveDate,
    window: Interval,
    policy: &Policy,
) -> Vec<Interval> {
    let mut busy = Vec::new();
    for event in events {
        let (Some(start), Some(end)) = (event.parsed_start(), event.parsed_end()) else {
            tracing::warn!("Skipping event with missing or malformed boundary: {}", event.id);
            continue;
        };
        let (s, e) = (start.as_start(), end.as_end());
        if !occurs_on(s, e, date) {
            continue;
        }

        if start.is_all_day() && end.is_all_day() {
            let opted_in = event
                .busy_calendar_key()
                .is_some_and(|key| policy.full_day_busy_calendars.contains(key));
            if opted_in {
                busy.push(window);
            }
            continue;
        }

        let pad = if policy.time_buffer_mins > 0 {
            chrono::Duration::minutes(i64::from(policy.time_buffer_mins))
        } else if !is_online_location(event.location.as_deref(), event.hangout_link.as_deref()) {
            chrono::Duration::minutes(LEGACY_TRAVEL_BUFFER_MINS)
        } else {
            chrono::Duration::zero()
        };
        let padded = Interval::new(s - pad, e + pad);
        if let Some(clipped) = clip(padded, window) {
            busy.push(clipped);
        }
    }
    merge_overlapping(busy)
}
