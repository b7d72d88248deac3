//! Half-open time interval arithmetic
use chrono::NaiveDateTime;

/// A half-open interval `[start, end)` of local wall-clock time. Value
/// object: freely copied, never shared mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration_mins(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// True when `other` is fully inside this interval.
    pub fn covers(&self, other: &Interval) -> bool {
        self.start <= other.start && self.end >= other.end
    }
}

/// Sort by start and fold overlapping intervals into one. Touching intervals
/// merge: `next.start <= last.end` counts as overlap, so the output is
/// sorted and pairwise disjoint with gaps strictly between entries.
pub fn merge_overlapping(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }
    intervals.sort_by_key(|iv| iv.start);
    let mut out: Vec<Interval> = Vec::with_capacity(intervals.len());
    for cur in intervals {
        match out.last_mut() {
            Some(last) if cur.start <= last.end => {
                last.end = last.end.max(cur.end);
            }
            _ => out.push(cur),
        }
    }
    out
}

/// Remove every busy interval from the window, returning the free remainder.
/// Each busy interval splits an overlapped free piece into zero, one, or two
/// remainders; busy intervals that miss a piece leave it untouched. Relative
/// order of surviving pieces is preserved.
pub fn subtract(window: Interval, busy: &[Interval]) -> Vec<Interval> {
    let mut free = vec![window];
    for b in busy {
        let mut next = Vec::with_capacity(free.len() + 1);
        for slot in free {
            if !b.overlaps(&slot) {
                next.push(slot);
                continue;
            }
            if b.start > slot.start {
                next.push(Interval::new(slot.start, b.start));
            }
            if b.end < slot.end {
                next.push(Interval::new(b.end, slot.end));
            }
        }
        free = next;
    }
    free
}

/// Intersect an interval with a window; `None` when disjoint.
pub fn clip(interval: Interval, window: Interval) -> Option<Interval> {
    let clipped = Interval::new(
        interval.start.max(window.start),
        interval.end.min(window.end),
    );
    if clipped.is_empty() { None } else { Some(clipped) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn iv(sh: u32, sm: u32, eh: u32, em: u32) -> Interval {
        Interval::new(at(sh, sm), at(eh, em))
    }

    #[test]
    fn it_merges_overlapping_intervals() {
        let merged = merge_overlapping(vec![iv(9, 0, 11, 0), iv(10, 0, 12, 0)]);
        assert_eq!(merged, vec![iv(9, 0, 12, 0)]);
    }

    #[test]
    fn it_merges_touching_intervals() {
        let merged = merge_overlapping(vec![iv(9, 0, 10, 0), iv(10, 0, 11, 0)]);
        assert_eq!(merged, vec![iv(9, 0, 11, 0)]);
    }

    #[test]
    fn it_sorts_disjoint_intervals() {
        let merged = merge_overlapping(vec![iv(14, 0, 15, 0), iv(9, 0, 10, 0)]);
        assert_eq!(merged, vec![iv(9, 0, 10, 0), iv(14, 0, 15, 0)]);
    }

    #[test]
    fn it_keeps_the_longest_end_when_merging_contained_intervals() {
        let merged = merge_overlapping(vec![iv(9, 0, 17, 0), iv(10, 0, 11, 0)]);
        assert_eq!(merged, vec![iv(9, 0, 17, 0)]);
    }

    #[test]
    fn it_is_idempotent() {
        let once = merge_overlapping(vec![
            iv(9, 0, 10, 30),
            iv(10, 0, 12, 0),
            iv(14, 0, 15, 0),
        ]);
        let twice = merge_overlapping(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn it_splits_free_time_around_a_busy_interval() {
        let free = subtract(iv(9, 0, 17, 0), &[iv(12, 0, 13, 0)]);
        assert_eq!(free, vec![iv(9, 0, 12, 0), iv(13, 0, 17, 0)]);
    }

    #[test]
    fn it_trims_busy_intervals_at_window_edges() {
        let free = subtract(iv(9, 0, 17, 0), &[iv(8, 0, 10, 0), iv(16, 0, 18, 0)]);
        assert_eq!(free, vec![iv(10, 0, 16, 0)]);
    }

    #[test]
    fn it_returns_nothing_when_busy_covers_the_window() {
        let free = subtract(iv(9, 0, 17, 0), &[iv(8, 0, 18, 0)]);
        assert!(free.is_empty());
    }

    #[test]
    fn it_never_yields_free_time_outside_the_window() {
        let window = iv(9, 0, 17, 0);
        let busy = vec![iv(10, 0, 11, 0), iv(13, 30, 14, 45)];
        for slot in subtract(window, &busy) {
            assert!(window.covers(&slot));
            for b in &busy {
                assert!(!b.overlaps(&slot));
            }
        }
    }

    #[test]
    fn it_reunites_free_and_busy_into_the_window() {
        let window = iv(9, 0, 17, 0);
        let busy = vec![iv(10, 0, 11, 0), iv(12, 30, 14, 0), iv(16, 0, 18, 0)];
        let mut pieces = subtract(window, &busy);
        pieces.extend(busy.iter().filter_map(|b| clip(*b, window)));
        assert_eq!(merge_overlapping(pieces), vec![window]);
    }

    #[test]
    fn it_clips_to_the_window() {
        assert_eq!(clip(iv(8, 0, 10, 0), iv(9, 0, 17, 0)), Some(iv(9, 0, 10, 0)));
        assert_eq!(clip(iv(17, 0, 18, 0), iv(9, 0, 17, 0)), None);
        assert_eq!(clip(iv(6, 0, 7, 0), iv(9, 0, 17, 0)), None);
    }
}
