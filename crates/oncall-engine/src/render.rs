//! Render entry points.

use crate::error::Result;
use crate::events::{generate_events, rank_overrides};
use crate::merge::merge_segments;
use crate::model::{Override, Schedule, Segment, Window};
use crate::rotation::Rotation;
use crate::sweep::{sweep, NoopObserver, SweepObserver};
use crate::validate::{validate_layout, validate_overrides, validate_window};

/// Compute the effective on-call timeline for `window`.
///
/// The result is the minimal sequence of contiguous segments exactly
/// covering `[window.from, window.until)`. Overrides take precedence over the
/// base rotation; among nested overrides the most recently started wins.
///
/// # Errors
/// - `ScheduleError::InvalidWindow` if `from >= until`.
/// - `ScheduleError::InvalidSchedule` if there are no users or the interval
///   is not positive.
/// - `ScheduleError::InvalidOverride` if any override has `start >= end`.
/// - `ScheduleError::UnsupportedOverrideLayout` if two overrides intersecting
///   the window partially overlap.
pub fn render(schedule: &Schedule, overrides: &[Override], window: Window) -> Result<Vec<Segment>> {
    render_observed(schedule, overrides, window, &mut NoopObserver)
}

/// Same as [`render`], reporting every event and raw segment to `observer`.
pub fn render_observed(
    schedule: &Schedule,
    overrides: &[Override],
    window: Window,
    observer: &mut dyn SweepObserver,
) -> Result<Vec<Segment>> {
    validate_window(&window)?;
    let rotation = Rotation::new(schedule)?;
    validate_overrides(overrides)?;

    let ranked = rank_overrides(overrides, &window);
    validate_layout(&ranked)?;

    let events = generate_events(&rotation, &ranked, &window);
    let raw = sweep(&rotation, &ranked, &events, &window, observer);
    let raw_count = raw.len();
    let segments = merge_segments(raw);

    tracing::debug!(
        from = %window.from,
        until = %window.until,
        overrides = ranked.len(),
        events = events.len(),
        raw_segments = raw_count,
        segments = segments.len(),
        "rendered schedule"
    );

    Ok(segments)
}
