//! Pure phrase selection for the approachable renderer. Picks a tagged
//! variant from a day's free intervals; turning the variant into text is the
//! renderer's job, which keeps the heuristic branching testable on its own.
use chrono::{NaiveDate, NaiveTime};

use crate::core::config::PersonalHours;
use crate::engine::interval::{Interval, subtract};

/// Minimum total free time for the "Most of the day" phrasing, in minutes.
const MOST_OF_DAY_MINS: i64 = 5 * 60;
/// Minimum single-interval span for the "Anytime" phrasing, in minutes.
const ANYTIME_MINS: i64 = 8 * 60;

/// Fixed reference periods for personal phrasing. Morning and afternoon are
/// product constants; evening bounds come from the weekday personal hours,
/// even on weekends.
const MORNING: (u32, u32) = (10, 13);
const AFTERNOON: (u32, u32) = (13, 17);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayPhrase {
    Unavailable,
    Anytime,
    MostOfDay { exceptions: Vec<Interval> },
    Ranges(Vec<Interval>),
    Personal(PersonalPhrase),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalPhrase {
    /// The whole personal day, morning through evening, is free
    Anytime,
    /// Free from inside the afternoon through the start of the evening;
    /// `after` is set when free time begins past the afternoon boundary
    AfternoonOrEvening { after: Option<NaiveTime> },
    /// The evening alone; `after` is set when free time begins past the
    /// configured evening start
    Evening { after: Option<NaiveTime> },
    /// Fully-covered reference periods, in day order
    Periods(Vec<Period>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub fn name(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }
}

/// Work-context selection, in priority order: a single interval of eight or
/// more hours reads as "Anytime"; five or more total hours reads as "Most of
/// the day" with the window's busy gaps as exceptions; anything else lists
/// the raw ranges. Exceptions are computed against the day's effective
/// window, so they track the configured work hours.
pub fn select_work_phrase(free: &[Interval], window: Interval) -> DayPhrase {
    if free.is_empty() {
        return DayPhrase::Unavailable;
    }
    let total_mins: i64 = free.iter().map(Interval::duration_mins).sum();
    if free.len() == 1 && total_mins >= ANYTIME_MINS {
        return DayPhrase::Anytime;
    }
    if total_mins >= MOST_OF_DAY_MINS {
        return DayPhrase::MostOfDay {
            exceptions: subtract(window, free),
        };
    }
    DayPhrase::Ranges(free.to_vec())
}

fn period_interval(date: NaiveDate, start_hour: u32, end_hour: u32) -> Option<Interval> {
    Some(Interval::new(
        date.and_hms_opt(start_hour, 0, 0)?,
        date.and_hms_opt(end_hour, 0, 0)?,
    ))
}

fn covered(free: &[Interval], period: &Interval) -> bool {
    free.iter().any(|iv| iv.covers(period))
}

/// Personal-context selection. Three reference periods (morning 10-13,
/// afternoon 13-17, evening from the weekday personal hours) are each tested
/// for full coverage by a single free interval; the first matching rule
/// wins. Falls back to the literal range listing when nothing fits.
pub fn select_personal_phrase(
    free: &[Interval],
    date: NaiveDate,
    personal_hours: &PersonalHours,
) -> DayPhrase {
    if free.is_empty() {
        return DayPhrase::Unavailable;
    }
    let weekday_hours = personal_hours.weekdays;
    if !weekday_hours.is_valid() {
        return DayPhrase::Ranges(free.to_vec());
    }
    let (Some(morning), Some(afternoon), Some(evening)) = (
        period_interval(date, MORNING.0, MORNING.1),
        period_interval(date, AFTERNOON.0, AFTERNOON.1),
        period_interval(date, weekday_hours.start_hour, weekday_hours.end_hour),
    ) else {
        return DayPhrase::Ranges(free.to_vec());
    };

    // Whole personal day free, morning start through evening end
    let full_day = Interval::new(morning.start, evening.end);
    if covered(free, &full_day) {
        return DayPhrase::Personal(PersonalPhrase::Anytime);
    }

    // Free time opening inside the afternoon and reaching the evening
    if let Some(iv) = free.iter().find(|iv| {
        iv.start >= afternoon.start && iv.start < afternoon.end && iv.end >= evening.start
    }) {
        let after = (iv.start > afternoon.start).then(|| iv.start.time());
        return DayPhrase::Personal(PersonalPhrase::AfternoonOrEvening { after });
    }

    let morning_full = covered(free, &morning);
    let afternoon_full = covered(free, &afternoon);
    let evening_full = covered(free, &evening);

    if !morning_full && !afternoon_full {
        if evening_full {
            return DayPhrase::Personal(PersonalPhrase::Evening { after: None });
        }
        // A late start that still runs to the end of the evening
        if let Some(iv) = free.iter().find(|iv| {
            iv.start > evening.start && iv.start < evening.end && iv.end >= evening.end
        }) {
            return DayPhrase::Personal(PersonalPhrase::Evening {
                after: Some(iv.start.time()),
            });
        }
    }

    let mut periods = Vec::new();
    if morning_full {
        periods.push(Period::Morning);
    }
    if afternoon_full {
        periods.push(Period::Afternoon);
    }
    if evening_full {
        periods.push(Period::Evening);
    }
    if !periods.is_empty() {
        return DayPhrase::Personal(PersonalPhrase::Periods(periods));
    }

    DayPhrase::Ranges(free.to_vec())
}
