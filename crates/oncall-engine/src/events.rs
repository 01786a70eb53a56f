//! Boundary events relevant to a query window.
//!
//! Three kinds of instants can change the effective owner: base-rotation
//! handovers, override starts, and override ends. Only those inside the
//! window are generated, so the event count depends on the window's contents
//! and never on how far the window sits from `rotation_start`.
//!
//! ## Ordering
//!
//! Events sort by timestamp. At equal timestamps:
//!
//! 1. override ends, innermost first;
//! 2. override starts, outermost first;
//! 3. the handover, last.
//!
//! Ends before starts means an override ending exactly when another begins
//! never leaves both (or neither) on the stack.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::{Override, Window};
use crate::rotation::Rotation;

/// An override intersecting the window, tagged with its position in the
/// caller's input and its precedence ordinal.
///
/// Ordinals come from sorting by `(start asc, end desc, index asc)`: an
/// enclosing override always ranks below the ones nested inside it, and of
/// two overrides with identical bounds the later-listed one ranks higher.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'o> {
    pub index: usize,
    pub ordinal: usize,
    pub entry: &'o Override,
}

#[derive(Debug, Clone, Copy)]
pub enum EventKind<'o> {
    OverrideEnd(Ranked<'o>),
    OverrideStart(Ranked<'o>),
    Handover,
}

impl EventKind<'_> {
    fn rank(&self) -> u8 {
        match self {
            EventKind::OverrideEnd(_) => 0,
            EventKind::OverrideStart(_) => 1,
            EventKind::Handover => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::OverrideEnd(_) => "override_end",
            EventKind::OverrideStart(_) => "override_start",
            EventKind::Handover => "handover",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Event<'o> {
    pub at: DateTime<Utc>,
    pub kind: EventKind<'o>,
}

impl Event<'_> {
    /// Total processing order used by [`generate_events`].
    pub fn processing_order(&self, other: &Self) -> Ordering {
        self.at
            .cmp(&other.at)
            .then_with(|| self.kind.rank().cmp(&other.kind.rank()))
            .then_with(|| match (&self.kind, &other.kind) {
                (EventKind::OverrideEnd(a), EventKind::OverrideEnd(b)) => b.ordinal.cmp(&a.ordinal),
                (EventKind::OverrideStart(a), EventKind::OverrideStart(b)) => {
                    a.ordinal.cmp(&b.ordinal)
                }
                _ => Ordering::Equal,
            })
    }
}

/// Select the overrides intersecting `window` and sort them into precedence
/// order, assigning each its ordinal.
pub fn rank_overrides<'o>(overrides: &'o [Override], window: &Window) -> Vec<Ranked<'o>> {
    let mut hits: Vec<(usize, &'o Override)> = overrides
        .iter()
        .enumerate()
        .filter(|(_, o)| o.intersects(window))
        .collect();

    hits.sort_by(|(ia, a), (ib, b)| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.end.cmp(&a.end))
            .then_with(|| ia.cmp(ib))
    });

    hits.into_iter()
        .enumerate()
        .map(|(ordinal, (index, entry))| Ranked {
            index,
            ordinal,
            entry,
        })
        .collect()
}

/// Generate the sorted boundary events for already-ranked overrides.
///
/// An override that is already active at `window.from` contributes no start
/// event; the sweep seeds it onto the stack instead. End events are clamped
/// to `window.until`.
pub fn generate_events<'o>(
    rotation: &Rotation<'_>,
    ranked: &[Ranked<'o>],
    window: &Window,
) -> Vec<Event<'o>> {
    let mut events: Vec<Event<'o>> = Vec::with_capacity(ranked.len() * 2);

    for r in ranked {
        if r.entry.start >= window.from {
            events.push(Event {
                at: r.entry.start,
                kind: EventKind::OverrideStart(*r),
            });
        }
        events.push(Event {
            at: r.entry.end.min(window.until),
            kind: EventKind::OverrideEnd(*r),
        });
    }

    events.extend(rotation.boundaries_in(window).map(|at| Event {
        at,
        kind: EventKind::Handover,
    }));

    events.sort_by(Event::processing_order);
    events
}

/// Rank `overrides` against `window` and generate its sorted events.
pub fn generate<'o>(
    rotation: &Rotation<'_>,
    overrides: &'o [Override],
    window: &Window,
) -> Vec<Event<'o>> {
    generate_events(rotation, &rank_overrides(overrides, window), window)
}
