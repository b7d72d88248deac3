//! Availability policy: the single source of behavioral knobs for a run
use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Selects which hour-window policy and rendering vocabulary apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Work,
    Personal,
}

/// Selects the renderer strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Narrative free-time summary, one line per in-scope day
    Approachable,
    /// Short list of free slots adjacent to existing commitments
    Busy,
}

/// A daily hour range, `start_hour:00` to `end_hour:00` local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl HourRange {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Hours must be within a single day and the range must not be inverted
    /// or empty. Invalid ranges are treated as "no window", never an error.
    pub fn is_valid(&self) -> bool {
        self.start_hour < self.end_hour && self.end_hour <= 23
    }
}

/// Personal-context hour ranges, split by weekday vs. weekend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalHours {
    pub weekdays: HourRange,
    pub weekends: HourRange,
}

/// All behavioral knobs for one availability run. Constructed fresh per
/// invocation from user preferences; the engine holds no state across calls.
#[derive(Clone, Debug)]
pub struct Policy {
    pub context: Context,
    pub mode: Mode,
    /// Cap on emitted slots in busy mode
    pub max_slots: u32,
    /// Work-context window, weekdays only
    pub work_hours: HourRange,
    pub personal_hours: PersonalHours,
    /// Minutes of symmetric padding added to every busy interval. Zero keeps
    /// the legacy rule: 60 minutes of travel padding for offline events only.
    pub time_buffer_mins: u32,
    /// Snapping and slot-decomposition granularity in minutes
    pub slot_duration_mins: u32,
    /// Presentation-layer concern, consumed by the CLI shell
    pub show_timezone: bool,
    /// Calendars whose all-day events consume the entire day window
    pub full_day_busy_calendars: HashSet<String>,
}

impl Policy {
    /// Slot duration with the invariant enforced: always at least one minute.
    pub fn slot_duration(&self) -> i64 {
        i64::from(self.slot_duration_mins.max(1))
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            context: Context::Work,
            mode: Mode::Approachable,
            max_slots: 3,
            work_hours: HourRange::new(9, 17),
            personal_hours: PersonalHours {
                weekdays: HourRange::new(18, 22),
                weekends: HourRange::new(10, 22),
            },
            time_buffer_mins: 0,
            slot_duration_mins: 60,
            show_timezone: false,
            full_day_busy_calendars: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_inverted_hour_ranges() {
        assert!(!HourRange::new(17, 9).is_valid());
        assert!(!HourRange::new(9, 9).is_valid());
    }

    #[test]
    fn it_rejects_out_of_bounds_hours() {
        assert!(!HourRange::new(9, 24).is_valid());
        assert!(!HourRange::new(22, 30).is_valid());
    }

    #[test]
    fn it_clamps_zero_slot_duration_to_one_minute() {
        let policy = Policy {
            slot_duration_mins: 0,
            ..Policy::default()
        };
        assert_eq!(policy.slot_duration(), 1);
    }
}
