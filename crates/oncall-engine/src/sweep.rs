//! Single-pass sweep over sorted boundary events.
//!
//! The sweep walks from `window.from` to `window.until`, emitting a raw
//! segment for every non-empty gap between consecutive events. The owner of
//! each gap is the innermost active override, or the base-rotation owner when
//! no override is active. Raw segments may repeat a user back to back;
//! [`merge_segments`](crate::merge_segments) removes that redundancy.

use chrono::{DateTime, Utc};

use crate::events::{Event, EventKind, Ranked};
use crate::model::{Segment, Window};
use crate::rotation::Rotation;
use crate::stack::OverrideStack;

/// Receives progress callbacks from a sweep.
///
/// Passed explicitly into [`render_observed`](crate::render_observed).
pub trait SweepObserver {
    /// Called for every event before it is applied.
    fn on_event(&mut self, _event: &Event<'_>) {}

    /// Called for every raw (pre-merge) segment.
    fn on_segment(&mut self, _segment: &Segment) {}
}

/// Ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

/// Forwards callbacks to `tracing` at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SweepObserver for TracingObserver {
    fn on_event(&mut self, event: &Event<'_>) {
        match event.kind {
            EventKind::OverrideStart(r) | EventKind::OverrideEnd(r) => tracing::trace!(
                at = %event.at,
                kind = event.kind.label(),
                index = r.index,
                user = %r.entry.user,
                "sweep event"
            ),
            EventKind::Handover => {
                tracing::trace!(at = %event.at, kind = event.kind.label(), "sweep event")
            }
        }
    }

    fn on_segment(&mut self, segment: &Segment) {
        tracing::trace!(
            user = %segment.user,
            start = %segment.start,
            end = %segment.end,
            "raw segment"
        );
    }
}

fn effective_owner<'x>(
    stack: &OverrideStack<'x>,
    rotation: &Rotation<'x>,
    at: DateTime<Utc>,
) -> &'x str {
    stack.current().unwrap_or_else(|| rotation.owner_at(at))
}

fn emit(
    segments: &mut Vec<Segment>,
    observer: &mut dyn SweepObserver,
    user: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) {
    let segment = Segment::new(user, start, end);
    observer.on_segment(&segment);
    segments.push(segment);
}

/// Run the sweep and return raw segments covering exactly `[from, until)`.
///
/// `ranked` must be the precedence-ordered overrides intersecting `window`
/// and `events` the sorted events generated from them.
pub fn sweep<'o>(
    rotation: &Rotation<'_>,
    ranked: &[Ranked<'o>],
    events: &[Event<'o>],
    window: &Window,
    observer: &mut dyn SweepObserver,
) -> Vec<Segment> {
    let mut stack = OverrideStack::seeded(ranked.iter().map(|r| r.entry), window.from);
    let mut segments = Vec::with_capacity(events.len() + 1);
    let mut current_time = window.from;
    let mut owner = effective_owner(&stack, rotation, current_time);

    for event in events {
        observer.on_event(event);

        // Zero-length gaps come from coincident events.
        if event.at > current_time {
            emit(&mut segments, observer, owner, current_time, event.at);
        }

        match event.kind {
            EventKind::OverrideStart(r) => stack.push(r.entry),
            EventKind::OverrideEnd(r) => {
                let popped = stack.pop();
                debug_assert!(
                    popped.is_some_and(|o| std::ptr::eq(o, r.entry)),
                    "override #{} ended while not on top of the stack",
                    r.index
                );
            }
            EventKind::Handover => {}
        }

        current_time = event.at;
        owner = effective_owner(&stack, rotation, current_time);
    }

    if current_time < window.until {
        emit(&mut segments, observer, owner, current_time, window.until);
    }

    segments
}
