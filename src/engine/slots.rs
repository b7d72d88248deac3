//! Slot quantization and busy-adjacent slot selection
use chrono::{NaiveDate, Timelike};

use crate::engine::interval::Interval;

/// How close a free slot's edge must be to a busy edge to count as adjacent.
const ADJACENCY_MINS: i64 = 60;

/// Floor both ends of each free interval to a multiple of `slot_mins` past
/// midnight, then drop anything shorter than one slot. Flooring only ever
/// shrinks the usable span; degenerate results are filtered here.
pub fn snap_to_slot_duration(free: Vec<Interval>, slot_mins: i64) -> Vec<Interval> {
    free.into_iter()
        .map(|iv| {
            Interval::new(floor_to_slot(iv.start, slot_mins), floor_to_slot(iv.end, slot_mins))
        })
        .filter(|iv| iv.duration_mins() >= slot_mins)
        .collect()
}

fn floor_to_slot(t: chrono::NaiveDateTime, slot_mins: i64) -> chrono::NaiveDateTime {
    let mins_since_midnight = i64::from(t.hour()) * 60 + i64::from(t.minute());
    let floored = mins_since_midnight - mins_since_midnight % slot_mins;
    t.date().and_time(chrono::NaiveTime::MIN) + chrono::Duration::minutes(floored)
}

/// Decompose free intervals into contiguous fixed-size slots, chronological,
/// starting at each interval's (already snapped) start. Partial trailing
/// slots are dropped.
pub fn split_into_slots(free: &[Interval], slot_mins: i64) -> Vec<Interval> {
    let step = chrono::Duration::minutes(slot_mins);
    let mut slots = Vec::new();
    for iv in free {
        let mut t = iv.start;
        while t + step <= iv.end {
            slots.push(Interval::new(t, t + step));
            t += step;
        }
    }
    slots
}

/// A slot is adjacent when it overlaps a busy interval (snapping can floor a
/// free start back into busy time) or either edge lies within an hour of a
/// busy interval's start or end. Every busy interval is checked.
pub fn is_adjacent(slot: &Interval, busy: &[Interval]) -> bool {
    busy.iter().any(|b| {
        if slot.overlaps(b) {
            return true;
        }
        [b.start, b.end].into_iter().any(|edge| {
            (slot.start - edge).num_minutes().abs() <= ADJACENCY_MINS
                || (slot.end - edge).num_minutes().abs() <= ADJACENCY_MINS
        })
    })
}

/// One day's contribution to the busy-mode slot pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<Interval>,
}

/// Distribute up to `max_slots` slots across at most 3 distinct days,
/// earliest first. Each day targets `ceil(max_slots / days_used)` slots; the
/// final day absorbs whatever quota remains. Days that end up with zero
/// slots are dropped.
pub fn distribute_slots(days: Vec<DaySlots>, max_slots: u32) -> Vec<DaySlots> {
    let days_used = days.len().min(3);
    if days_used == 0 || max_slots == 0 {
        return Vec::new();
    }
    let target = (max_slots as usize).div_ceil(days_used);
    let mut remaining = max_slots as usize;
    let mut out = Vec::with_capacity(days_used);
    for (i, mut day) in days.into_iter().take(days_used).enumerate() {
        let quota = if i == days_used - 1 { remaining } else { target.min(remaining) };
        let take = quota.min(day.slots.len());
        if take == 0 {
            continue;
        }
        day.slots.truncate(take);
        remaining -= take;
        out.push(day);
    }
    out
}
