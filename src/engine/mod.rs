//! The availability engine: turns calendar events plus a policy into a
//! human-readable statement of free time.
//!
//! The per-day pipeline is window -> busy -> subtract -> snap -> render.
//! `generate_availability` is pure given its inputs ("now" included); the
//! async [`run`] wrapper fetches the holiday set once and injects the clock.
pub mod busy;
pub mod interval;
pub mod phrase;
pub mod render;
pub mod slots;
pub mod window;

use std::collections::HashSet;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::calendar::Event;
use crate::core::config::{Context, Mode, Policy};
use crate::holidays;
use busy::build_busy_intervals;
use interval::subtract;
use phrase::{select_personal_phrase, select_work_phrase};
use render::{render_busy_day, render_day};
use slots::{DaySlots, distribute_slots, is_adjacent, snap_to_slot_duration, split_into_slots};

/// Generate the availability text for an inclusive local date range. One
/// line per in-scope day in approachable mode (including "Unavailable"
/// days); busy mode pools adjacent slots across the whole range first and
/// emits at most three day lines. Out-of-scope days (weekends in work
/// context, holidays, today once it's over) produce nothing.
pub fn generate_availability(
    events: &[Event],
    start_date: NaiveDate,
    end_date: NaiveDate,
    policy: &Policy,
    bank_holidays: &HashSet<NaiveDate>,
    now: NaiveDateTime,
) -> String {
    let slot_mins = policy.slot_duration();
    let mut lines: Vec<String> = Vec::new();
    let mut slot_pool: Vec<DaySlots> = Vec::new();

    let mut date = start_date;
    while date <= end_date {
        if let Some(day_window) = window::day_window(date, policy)
            && !(policy.context == Context::Work && bank_holidays.contains(&date))
            && let Some(day_window) = window::trim_for_today(day_window, date, now)
        {
            let busy_intervals = build_busy_intervals(events, date, day_window, policy);
            let mut free = subtract(day_window, &busy_intervals);
            free.sort_by_key(|iv| iv.start);
            let free = snap_to_slot_duration(free, slot_mins);

            match policy.mode {
                Mode::Approachable => {
                    let day_phrase = match policy.context {
                        Context::Work => select_work_phrase(&free, day_window),
                        Context::Personal => {
                            select_personal_phrase(&free, date, &policy.personal_hours)
                        }
                    };
                    lines.push(render_day(date, &day_phrase));
                }
                Mode::Busy => {
                    let adjacent: Vec<_> = split_into_slots(&free, slot_mins)
                        .into_iter()
                        .filter(|slot| is_adjacent(slot, &busy_intervals))
                        .collect();
                    if !adjacent.is_empty() {
                        slot_pool.push(DaySlots {
                            date,
                            slots: adjacent,
                        });
                    }
                }
            }
        }

        let Some(next) = date.succ_opt() else { break };
        date = next;
    }

    if policy.mode == Mode::Busy {
        for day in distribute_slots(slot_pool, policy.max_slots) {
            lines.push(render_busy_day(day.date, &day.slots));
        }
    }

    lines.join("\n")
}

/// Fetch the holiday set once, then run the pure engine against the local
/// clock. This is the entry point callers outside of tests should use.
pub async fn run(
    events: &[Event],
    start_date: NaiveDate,
    end_date: NaiveDate,
    policy: &Policy,
    holiday_url: &str,
) -> String {
    let bank_holidays = if policy.context == Context::Work {
        holidays::fetch_holidays(holiday_url).await
    } else {
        HashSet::new()
    };
    let now = Local::now().naive_local();
    generate_availability(events, start_date, end_date, policy, &bank_holidays, now)
}
