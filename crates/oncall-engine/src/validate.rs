//! Input checks run before any event is generated.
//!
//! Rendering is all-or-nothing: the first violation aborts the call.

use crate::error::{Result, ScheduleDefect, ScheduleError};
use crate::events::{rank_overrides, Ranked};
use crate::model::{Override, Schedule, Window};

pub fn validate_window(window: &Window) -> Result<()> {
    if window.is_empty() {
        return Err(ScheduleError::InvalidWindow {
            from: window.from,
            until: window.until,
        });
    }
    Ok(())
}

pub fn validate_schedule(schedule: &Schedule) -> Result<()> {
    if schedule.users.is_empty() {
        return Err(ScheduleError::InvalidSchedule(ScheduleDefect::NoUsers));
    }
    if schedule.interval <= chrono::Duration::zero() {
        return Err(ScheduleError::InvalidSchedule(
            ScheduleDefect::NonPositiveInterval,
        ));
    }
    Ok(())
}

/// Every override must satisfy `start < end`.
pub fn validate_overrides(overrides: &[Override]) -> Result<()> {
    match overrides.iter().position(|o| o.start >= o.end) {
        Some(index) => Err(ScheduleError::InvalidOverride {
            index,
            start: overrides[index].start,
            end: overrides[index].end,
        }),
        None => Ok(()),
    }
}

/// Reject any two ranked overrides that partially overlap.
///
/// Walks the overrides in precedence order keeping a stack of the ones still
/// open. Open overrides are nested, so the top has the earliest end; a new
/// override that starts before that end but finishes after it crosses it.
pub fn validate_layout(ranked: &[Ranked<'_>]) -> Result<()> {
    let mut open: Vec<&Ranked<'_>> = Vec::with_capacity(ranked.len());

    for r in ranked {
        while open.last().is_some_and(|top| top.entry.end <= r.entry.start) {
            open.pop();
        }
        if let Some(top) = open.last() {
            if r.entry.end > top.entry.end {
                return Err(ScheduleError::UnsupportedOverrideLayout {
                    outer: top.index,
                    inner: r.index,
                });
            }
        }
        open.push(r);
    }

    Ok(())
}

/// Run every check in order: window, schedule, overrides, layout.
pub fn validate(schedule: &Schedule, overrides: &[Override], window: &Window) -> Result<()> {
    validate_window(window)?;
    validate_schedule(schedule)?;
    validate_overrides(overrides)?;
    validate_layout(&rank_overrides(overrides, window))
}
