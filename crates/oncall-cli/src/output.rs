//! JSON rendering of the final segments.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use oncall_engine::Segment;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SegmentRecord<'a> {
    user: &'a str,
    start_at: String,
    end_at: String,
}

fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn to_json(segments: &[Segment]) -> Result<String> {
    let records: Vec<SegmentRecord<'_>> = segments
        .iter()
        .map(|s| SegmentRecord {
            user: &s.user,
            start_at: format_timestamp(s.start),
            end_at: format_timestamp(s.end),
        })
        .collect();
    serde_json::to_string_pretty(&records).context("Failed to serialize segments")
}

pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
