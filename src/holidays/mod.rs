//! UK bank holiday feed client. Fetched once per run; any failure degrades
//! to an empty set so availability generation never aborts on network
//! trouble.
use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;

pub const DEFAULT_HOLIDAY_URL: &str = "https://www.gov.uk/bank-holidays.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct BankHolidayFeed {
    #[serde(rename = "england-and-wales")]
    england_and_wales: Option<Division>,
}

#[derive(Debug, Deserialize)]
struct Division {
    #[serde(default)]
    events: Vec<BankHolidayEvent>,
}

#[derive(Debug, Deserialize)]
struct BankHolidayEvent {
    date: NaiveDate,
}

/// Fetch the England-and-Wales bank holiday dates. Non-2xx responses,
/// timeouts, and malformed payloads all degrade to an empty set.
pub async fn fetch_holidays(url: &str) -> HashSet<NaiveDate> {
    match try_fetch_holidays(url).await {
        Ok(dates) => dates,
        Err(e) => {
            tracing::warn!("Failed to fetch bank holidays, continuing without: {}", e);
            HashSet::new()
        }
    }
}

async fn try_fetch_holidays(url: &str) -> Result<HashSet<NaiveDate>> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let feed: BankHolidayFeed = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(feed
        .england_and_wales
        .map(|division| division.events)
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.date)
        .collect())
}
