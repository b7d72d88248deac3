//! Calendar event model as supplied by the calendar-fetch collaborator
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single calendar event, already normalized by the event source. Start and
/// end are either date-time strings (timed events) or `YYYY-MM-DD` strings
/// (all-day events). Events may come from multiple accounts in one list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub summary: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "hangoutLink")]
    pub hangout_link: Option<String>,
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    #[serde(rename = "calendarId")]
    pub calendar_id: Option<String>,
}

/// A parsed event boundary. All-day events carry no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    Timed(NaiveDateTime),
    AllDay(NaiveDate),
}

impl EventTime {
    /// The instant this boundary represents when used as an interval start.
    pub fn as_start(&self) -> NaiveDateTime {
        match self {
            EventTime::Timed(dt) => *dt,
            EventTime::AllDay(d) => d.and_time(NaiveTime::MIN),
        }
    }

    /// The instant this boundary represents when used as an interval end.
    /// All-day end dates are exclusive, so midnight of the end date is the
    /// correct half-open boundary.
    pub fn as_end(&self) -> NaiveDateTime {
        self.as_start()
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::AllDay(_))
    }
}

impl Event {
    /// Parse the start boundary; `None` when missing or malformed.
    pub fn parsed_start(&self) -> Option<EventTime> {
        self.start.as_deref().and_then(parse_event_time)
    }

    /// Parse the end boundary; `None` when missing or malformed.
    pub fn parsed_end(&self) -> Option<EventTime> {
        self.end.as_deref().and_then(parse_event_time)
    }

    /// Stable key used for the all-day busy calendar check. Falls back to
    /// the account id for providers that don't expose per-calendar ids.
    pub fn busy_calendar_key(&self) -> Option<&str> {
        self.calendar_id
            .as_deref()
            .or(self.account_id.as_deref())
    }
}

/// Parse an event boundary string. RFC 3339 timestamps keep their own
/// numeric offset's wall-clock time (the engine works in fixed-offset local
/// time, not IANA zones); bare date-times are taken as-is; a plain date
/// means an all-day event.
pub fn parse_event_time(raw: &str) -> Option<EventTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(EventTime::Timed(dt.naive_local()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(EventTime::Timed(dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(EventTime::AllDay(d));
    }
    None
}
