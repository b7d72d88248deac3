//! Turns selected phrases into the final per-day text lines
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use itertools::Itertools;

use crate::engine::interval::Interval;
use crate::engine::phrase::{DayPhrase, PersonalPhrase};

fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

fn month_day(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}

fn fmt_hm(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// Compact 12-hour time: "2pm", "7:30pm".
fn fmt_12h(t: NaiveTime) -> String {
    let (hour12, meridiem) = match t.hour() {
        0 => (12, "am"),
        h @ 1..=11 => (h, "am"),
        12 => (12, "pm"),
        h => (h - 12, "pm"),
    };
    if t.minute() == 0 {
        format!("{}{}", hour12, meridiem)
    } else {
        format!("{}:{:02}{}", hour12, t.minute(), meridiem)
    }
}

fn ranges_text(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(|iv| format!("{}-{}", fmt_hm(iv.start), fmt_hm(iv.end)))
        .join(" and ")
}

/// Render one approachable-mode line for a day. Work-context lines carry a
/// `"<Weekday>, <Month DD> - "` header; personal phrases use the shorter
/// `"<Month DD>, "` header, except the range fallback which keeps the work
/// style.
pub fn render_day(date: NaiveDate, phrase: &DayPhrase) -> String {
    let header = format!("{}, {}", weekday_name(date), month_day(date));
    match phrase {
        DayPhrase::Unavailable => format!("{} - Unavailable", header),
        DayPhrase::Anytime => format!("{} - Anytime", header),
        DayPhrase::MostOfDay { exceptions } => {
            if exceptions.is_empty() {
                format!("{} - Most of the day", header)
            } else {
                let gaps = exceptions
                    .iter()
                    .map(|gap| format!("{} to {}", fmt_hm(gap.start), fmt_hm(gap.end)))
                    .join(", ");
                format!("{} - Most of the day, except {}", header, gaps)
            }
        }
        DayPhrase::Ranges(intervals) => format!("{} - {}", header, ranges_text(intervals)),
        DayPhrase::Personal(personal) => render_personal(date, personal),
    }
}

fn render_personal(date: NaiveDate, phrase: &PersonalPhrase) -> String {
    let header = month_day(date);
    match phrase {
        PersonalPhrase::Anytime => format!("{}, anytime", header),
        PersonalPhrase::AfternoonOrEvening { after: Some(t) } => {
            format!("{}, afternoon after {} or evening", header, fmt_12h(*t))
        }
        PersonalPhrase::AfternoonOrEvening { after: None } => {
            format!("{}, afternoon or evening", header)
        }
        PersonalPhrase::Evening { after: Some(t) } => {
            format!("{}, evening after {}", header, fmt_12h(*t))
        }
        PersonalPhrase::Evening { after: None } => format!("{}, evening", header),
        PersonalPhrase::Periods(periods) => {
            let names = periods.iter().map(|p| p.name()).collect::<Vec<_>>();
            let joined = match names.as_slice() {
                [] => String::new(),
                [one] => (*one).to_string(),
                [a, b] => format!("{} or {}", a, b),
                [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
            };
            format!("{}, {}", header, joined)
        }
    }
}

/// Render one busy-mode line: the day's picked adjacent slots as ranges.
pub fn render_busy_day(date: NaiveDate, slots: &[Interval]) -> String {
    format!(
        "{}, {} - {}",
        weekday_name(date),
        month_day(date),
        ranges_text(slots)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::phrase::Period;

    fn date() -> NaiveDate {
        // A Monday
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn iv(sh: u32, eh: u32) -> Interval {
        Interval::new(
            date().and_hms_opt(sh, 0, 0).unwrap(),
            date().and_hms_opt(eh, 0, 0).unwrap(),
        )
    }

    #[test]
    fn it_renders_the_anytime_line() {
        assert_eq!(
            render_day(date(), &DayPhrase::Anytime),
            "Monday, March 02 - Anytime"
        );
    }

    #[test]
    fn it_renders_most_of_the_day_with_exceptions() {
        let phrase = DayPhrase::MostOfDay {
            exceptions: vec![iv(12, 13)],
        };
        assert_eq!(
            render_day(date(), &phrase),
            "Monday, March 02 - Most of the day, except 12:00 to 13:00"
        );
    }

    #[test]
    fn it_renders_plain_most_of_the_day_without_gaps() {
        let phrase = DayPhrase::MostOfDay { exceptions: vec![] };
        assert_eq!(render_day(date(), &phrase), "Monday, March 02 - Most of the day");
    }

    #[test]
    fn it_renders_range_listings() {
        let phrase = DayPhrase::Ranges(vec![iv(9, 10), iv(14, 16)]);
        assert_eq!(
            render_day(date(), &phrase),
            "Monday, March 02 - 09:00-10:00 and 14:00-16:00"
        );
    }

    #[test]
    fn it_renders_the_unavailable_line() {
        assert_eq!(
            render_day(date(), &DayPhrase::Unavailable),
            "Monday, March 02 - Unavailable"
        );
    }

    #[test]
    fn it_renders_personal_phrases_with_the_short_header() {
        assert_eq!(
            render_day(date(), &DayPhrase::Personal(PersonalPhrase::Anytime)),
            "March 02, anytime"
        );
        assert_eq!(
            render_day(
                date(),
                &DayPhrase::Personal(PersonalPhrase::Evening { after: None })
            ),
            "March 02, evening"
        );
    }

    #[test]
    fn it_renders_twelve_hour_times_in_personal_phrases() {
        let two_pm = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        assert_eq!(
            render_day(
                date(),
                &DayPhrase::Personal(PersonalPhrase::AfternoonOrEvening { after: Some(two_pm) })
            ),
            "March 02, afternoon after 2pm or evening"
        );
        let half_past = NaiveTime::from_hms_opt(19, 30, 0).unwrap();
        assert_eq!(
            render_day(
                date(),
                &DayPhrase::Personal(PersonalPhrase::Evening { after: Some(half_past) })
            ),
            "March 02, evening after 7:30pm"
        );
    }

    #[test]
    fn it_joins_period_names() {
        assert_eq!(
            render_day(
                date(),
                &DayPhrase::Personal(PersonalPhrase::Periods(vec![
                    Period::Morning,
                    Period::Afternoon
                ]))
            ),
            "March 02, morning or afternoon"
        );
        assert_eq!(
            render_day(
                date(),
                &DayPhrase::Personal(PersonalPhrase::Periods(vec![Period::Afternoon]))
            ),
            "March 02, afternoon"
        );
        assert_eq!(
            render_day(
                date(),
                &DayPhrase::Personal(PersonalPhrase::Periods(vec![
                    Period::Morning,
                    Period::Afternoon,
                    Period::Evening
                ]))
            ),
            "March 02, morning, afternoon or evening"
        );
    }

    #[test]
    fn it_renders_busy_slot_lines() {
        assert_eq!(
            render_busy_day(date(), &[iv(11, 12), iv(13, 14)]),
            "Monday, March 02 - 11:00-12:00 and 13:00-14:00"
        );
    }
}
