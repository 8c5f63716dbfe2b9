//! timespan CLI
//!
//! Evaluates a schedule collection against the local time (or a given
//! weekday and minute) and prints a JSON report.
//!
//! # Usage
//!
//! ```bash
//! # Business hours, evaluated now
//! cargo run --bin timespan -- "62:540-1080|"
//!
//! # Evaluated on Monday (day 2, Sunday-first) at 07:00
//! cargo run --bin timespan -- "62:540-1080|" 2 420
//! ```
//!
//! # Environment Variables
//!
//! - `TIMESPAN_CONFIG`: path to a display configuration TOML file
//! - `TIMESPAN_WEEK_START`: first day shown, 0 = Sunday
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use timespan::clock::{Clock, SystemClock, WallClock};
use timespan::config::DisplayConfig;
use timespan::models::{DayOfWeek, ScheduleGroup};
use timespan::parsing;
use timespan::services::availability;

#[derive(Debug, Serialize)]
struct Report {
    canonical: String,
    summary: String,
    groups: Vec<ScheduleGroup>,
    weekday: u8,
    minute: i32,
    active: bool,
    minutes_until_active: Option<u32>,
    remaining_minutes: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let text = args.first().cloned().unwrap_or_default();

    let config = DisplayConfig::load().context("Failed to load display configuration")?;
    let groups = parsing::parse_collection(&text)
        .with_context(|| format!("Invalid schedule '{}'", text))?;

    if let Some(group) = groups.iter().find(|g| g.day_mask().is_empty()) {
        bail!("Schedule group '{}' has no days selected", group);
    }

    let at = match (args.get(1), args.get(2)) {
        (Some(day), Some(minute)) => {
            let day: i64 = day.parse().context("Weekday must be a number in 1..=7")?;
            let minute: i32 = minute
                .parse()
                .context("Minute must be a number in 0..=1440")?;
            WallClock::new(DayOfWeek::new(day)?, minute)?
        }
        (None, None) => SystemClock.now(),
        _ => bail!("Pass both a weekday and a minute-of-day, or neither"),
    };

    info!(
        "Evaluating {} group(s) on day {} at minute {}",
        groups.len(),
        at.weekday(),
        at.minute()
    );

    let report = Report {
        canonical: parsing::to_canonical_text(&groups),
        summary: parsing::to_readable_text(&groups, &config.labels),
        weekday: at.weekday().number(),
        minute: at.minute(),
        active: availability::is_any_active(&groups, at),
        minutes_until_active: availability::minutes_until_any_active(&groups, at),
        remaining_minutes: availability::remaining_minutes_of_current_active_window(&groups, at),
        groups,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
