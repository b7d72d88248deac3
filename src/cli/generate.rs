use anyhow::{Context as _, Result, bail};
use chrono::{Local, NaiveDate};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::calendar::Event;
use crate::core::config::{Context, HourRange, Mode, PersonalHours, Policy};
use crate::engine;

pub struct GenerateOpts {
    pub events: Option<PathBuf>,
    pub context: Context,
    pub mode: Mode,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub days: u32,
    pub max_slots: u32,
    pub time_buffer: u32,
    pub slot_duration: u32,
    pub work_hours: String,
    pub personal_weekday_hours: String,
    pub personal_weekend_hours: String,
    pub busy_calendars: Vec<String>,
    pub show_timezone: bool,
    pub utc_offset: String,
    pub holiday_url: String,
}

pub async fn run(opts: GenerateOpts) -> Result<()> {
    let events = load_events(opts.events.as_deref())?;

    let policy = Policy {
        context: opts.context,
        mode: opts.mode,
        max_slots: opts.max_slots,
        work_hours: parse_hour_range(&opts.work_hours)?,
        personal_hours: PersonalHours {
            weekdays: parse_hour_range(&opts.personal_weekday_hours)?,
            weekends: parse_hour_range(&opts.personal_weekend_hours)?,
        },
        time_buffer_mins: opts.time_buffer,
        slot_duration_mins: opts.slot_duration,
        show_timezone: opts.show_timezone,
        full_day_busy_calendars: opts.busy_calendars.into_iter().collect(),
    };

    let from = opts.from.unwrap_or_else(|| Local::now().date_naive());
    let to = match opts.to {
        Some(to) => to,
        None => from + chrono::Duration::days(i64::from(opts.days.max(1)) - 1),
    };
    if to < from {
        bail!("End date {} is before start date {}", to, from);
    }

    let text = engine::run(&events, from, to, &policy, &opts.holiday_url).await;
    let output = finalize_output(text, policy.show_timezone, &opts.utc_offset)?;
    println!("{}", output);
    Ok(())
}

/// Read the event list from a file, or stdin when no path is given.
pub fn load_events(path: Option<&Path>) -> Result<Vec<Event>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read events file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read events from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Events input is not a JSON array of events")
}

/// Parse an "H-H" hour range like "9-17".
pub fn parse_hour_range(raw: &str) -> Result<HourRange> {
    let Some((start, end)) = raw.split_once('-') else {
        bail!("Hour range must look like \"9-17\", got {:?}", raw);
    };
    let start_hour = start.trim().parse::<u32>().context("Invalid start hour")?;
    let end_hour = end.trim().parse::<u32>().context("Invalid end hour")?;
    Ok(HourRange::new(start_hour, end_hour))
}

/// Prefix the engine output with a timezone label. The engine itself knows
/// nothing about timezones; this is purely a presentation concern.
pub fn finalize_output(text: String, show_timezone: bool, utc_offset: &str) -> Result<String> {
    if !show_timezone || text.is_empty() {
        return Ok(text);
    }
    validate_utc_offset(utc_offset)?;
    Ok(format!("All times UTC{}\n{}", utc_offset, text))
}

fn validate_utc_offset(raw: &str) -> Result<()> {
    // Byte-wise so multi-byte input can never slice off a char boundary
    let valid = matches!(
        raw.as_bytes(),
        [b'+' | b'-', h1, h2, b':', m1, m2]
            if [h1, h2, m1, m2].into_iter().all(u8::is_ascii_digit)
    );
    if !valid {
        bail!("UTC offset must look like \"+01:00\", got {:?}", raw);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn it_parses_hour_ranges() {
        assert_eq!(parse_hour_range("9-17").unwrap(), HourRange::new(9, 17));
        assert_eq!(parse_hour_range(" 10 - 22 ").unwrap(), HourRange::new(10, 22));
        assert!(parse_hour_range("nine to five").is_err());
        assert!(parse_hour_range("9").is_err());
    }

    #[test]
    fn it_loads_events_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "summary": "Standup", "start": "2026-03-02T09:00:00", "end": "2026-03-02T09:15:00", "hangoutLink": "https://meet.google.com/abc"}}]"#
        )
        .unwrap();

        let events = load_events(Some(file.path())).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");
        assert_eq!(events[0].hangout_link.as_deref(), Some("https://meet.google.com/abc"));
    }

    #[test]
    fn it_rejects_malformed_event_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not json").unwrap();
        assert!(load_events(Some(file.path())).is_err());
    }

    #[test]
    fn it_prefixes_the_timezone_label_when_asked() {
        let out = finalize_output("Monday, March 02 - Anytime".to_string(), true, "+01:00").unwrap();
        assert_eq!(out, "All times UTC+01:00\nMonday, March 02 - Anytime");
    }

    #[test]
    fn it_leaves_output_alone_by_default() {
        let out = finalize_output("Monday, March 02 - Anytime".to_string(), false, "+01:00").unwrap();
        assert_eq!(out, "Monday, March 02 - Anytime");
    }

    #[test]
    fn it_rejects_malformed_utc_offsets() {
        assert!(finalize_output("x".to_string(), true, "UTC+1").is_err());
        assert!(finalize_output("x".to_string(), true, "+1:00").is_err());
    }

    #[test]
    fn it_rejects_multibyte_utc_offsets_without_panicking() {
        // Six bytes but not six ASCII chars; must error, not slice mid-char
        assert!(finalize_output("x".to_string(), true, "+\u{1D7D8}:").is_err());
        assert!(finalize_output("x".to_string(), true, "\u{00B1}01:00").is_err());
    }
}
