use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod generate;

use crate::core::config::{Context, Mode};
use crate::holidays::DEFAULT_HOLIDAY_URL;

#[derive(Subcommand)]
enum Command {
    /// Generate availability text from a JSON list of calendar events
    Generate {
        /// Path to the events JSON file; reads stdin when omitted
        #[arg(long)]
        events: Option<PathBuf>,

        /// Availability context
        #[arg(long, value_enum, default_value = "work")]
        context: Context,

        /// Output mode
        #[arg(long, value_enum, default_value = "approachable")]
        mode: Mode,

        /// First day of the range (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Range length in days when --to is omitted
        #[arg(long, default_value = "14")]
        days: u32,

        /// Cap on emitted slots in busy mode
        #[arg(long, default_value = "3")]
        max_slots: u32,

        /// Minutes of padding around every busy event (0 keeps the legacy
        /// travel-buffer rule for offline events)
        #[arg(long, default_value = "0")]
        time_buffer: u32,

        /// Slot granularity in minutes
        #[arg(long, default_value = "60")]
        slot_duration: u32,

        /// Work-context hours, e.g. "9-17"
        #[arg(long, default_value = "9-17")]
        work_hours: String,

        /// Personal weekday hours, e.g. "18-22"
        #[arg(long, default_value = "18-22")]
        personal_weekday_hours: String,

        /// Personal weekend hours, e.g. "10-22"
        #[arg(long, default_value = "10-22")]
        personal_weekend_hours: String,

        /// Calendar (or account) id whose all-day events count as busy;
        /// repeatable
        #[arg(long = "busy-calendar")]
        busy_calendars: Vec<String>,

        /// Prefix the output with a timezone label
        #[arg(long, action, default_value = "false")]
        show_timezone: bool,

        /// Numeric UTC offset used for the timezone label, e.g. "+01:00"
        #[arg(long, default_value = "+00:00")]
        utc_offset: String,

        /// Override the bank holiday feed URL
        #[arg(long, default_value = DEFAULT_HOLIDAY_URL)]
        holiday_url: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Command::Generate {
            events,
            context,
            mode,
            from,
            to,
            days,
            max_slots,
            time_buffer,
            slot_duration,
            work_hours,
            personal_weekday_hours,
            personal_weekend_hours,
            busy_calendars,
            show_timezone,
            utc_offset,
            holiday_url,
        }) => {
            generate::run(generate::GenerateOpts {
                events,
                context,
                mode,
                from,
                to,
                days,
                max_slots,
                time_buffer,
                slot_duration,
                work_hours,
                personal_weekday_hours,
                personal_weekend_hours,
                busy_calendars,
                show_timezone,
                utc_offset,
                holiday_url,
            })
            .await?;
        }
        None => {}
    }

    Ok(())
}
