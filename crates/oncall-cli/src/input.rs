//! Loading and parsing of the schedule and override files.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use oncall_engine::{Override, Schedule};
use serde::Deserialize;
use std::io::ErrorKind;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Deserialize)]
struct ScheduleFile {
    users: Vec<String>,
    handover_start_at: String,
    handover_interval_days: f64,
}

#[derive(Debug, Deserialize)]
struct OverrideRecord {
    user: String,
    start_at: String,
    end_at: String,
}

/// Parse an RFC 3339 timestamp and normalize it to UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("'{}' is not an ISO 8601 timestamp with offset", raw))
}

fn read_json(path: &str) -> Result<serde_json::Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            bail!("Could not find file: {}", path)
        }
        Err(err) => return Err(err).with_context(|| format!("Failed to read file: {}", path)),
    };
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path))
}

fn interval_from_days(days: f64) -> Result<Duration> {
    let millis = (days * MILLIS_PER_DAY).round();
    if !millis.is_finite() {
        bail!("handover_interval_days is out of range: {}", days);
    }
    Duration::try_milliseconds(millis as i64)
        .with_context(|| format!("handover_interval_days is out of range: {}", days))
}

pub fn load_schedule(path: &str) -> Result<Schedule> {
    let value = read_json(path)?;
    let file: ScheduleFile = serde_json::from_value(value)
        .with_context(|| format!("Missing or invalid field in schedule {}", path))?;

    if file.users.is_empty() {
        bail!("Schedule must contain at least one user");
    }
    let rotation_start = parse_timestamp(&file.handover_start_at)
        .context("Invalid handover_start_at in schedule")?;
    let interval = interval_from_days(file.handover_interval_days)?;

    Ok(Schedule::new(file.users, rotation_start, interval))
}

pub fn load_overrides(path: &str) -> Result<Vec<Override>> {
    let value = read_json(path)?;
    if !value.is_array() {
        bail!("Overrides must be an array");
    }
    let records: Vec<OverrideRecord> = serde_json::from_value(value)
        .with_context(|| format!("Missing or invalid field in overrides {}", path))?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let start = parse_timestamp(&r.start_at)
                .with_context(|| format!("Invalid start_at in override #{}", i))?;
            let end = parse_timestamp(&r.end_at)
                .with_context(|| format!("Invalid end_at in override #{}", i))?;
            Ok(Override::new(r.user, start, end))
        })
        .collect()
}
