//! Tests for event generation, ordering, and the override stack.

use chrono::{DateTime, Duration, Utc};
use oncall_engine::events::{generate, generate_events, rank_overrides, Event, EventKind};
use oncall_engine::stack::OverrideStack;
use oncall_engine::{Override, Rotation, Schedule, Window};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn daily() -> Schedule {
    Schedule::new(["alice", "bob"], ts("2026-03-01T00:00:00Z"), Duration::days(1))
}

fn ovr(user: &str, start: &str, end: &str) -> Override {
    Override::new(user, ts(start), ts(end))
}

/// Flatten events to `(timestamp, label, user)` for readable assertions.
fn describe(events: &[Event<'_>]) -> Vec<(DateTime<Utc>, &'static str, String)> {
    events
        .iter()
        .map(|e| {
            let user = match e.kind {
                EventKind::OverrideStart(r) | EventKind::OverrideEnd(r) => r.entry.user.clone(),
                EventKind::Handover => String::new(),
            };
            (e.at, e.kind.label(), user)
        })
        .collect()
}

// ── Ranking ─────────────────────────────────────────────────────────────────

#[test]
fn ranking_orders_outer_before_inner() {
    let overrides = vec![
        ovr("inner", "2026-03-02T06:00:00Z", "2026-03-02T12:00:00Z"),
        ovr("outer", "2026-03-02T06:00:00Z", "2026-03-02T18:00:00Z"),
        ovr("early", "2026-03-01T06:00:00Z", "2026-03-01T12:00:00Z"),
    ];
    let window = Window::new(ts("2026-03-01T00:00:00Z"), ts("2026-03-03T00:00:00Z"));
    let ranked = rank_overrides(&overrides, &window);

    let order: Vec<(usize, usize)> = ranked.iter().map(|r| (r.ordinal, r.index)).collect();
    assert_eq!(order, vec![(0, 2), (1, 1), (2, 0)]);
}

#[test]
fn ranking_drops_overrides_outside_window() {
    let overrides = vec![
        ovr("before", "2026-02-01T00:00:00Z", "2026-03-01T00:00:00Z"),
        ovr("inside", "2026-03-01T06:00:00Z", "2026-03-01T12:00:00Z"),
        ovr("after", "2026-03-02T00:00:00Z", "2026-03-05T00:00:00Z"),
    ];
    let window = Window::new(ts("2026-03-01T00:00:00Z"), ts("2026-03-02T00:00:00Z"));
    let ranked = rank_overrides(&overrides, &window);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].index, 1);
}

// ── Generation ──────────────────────────────────────────────────────────────

#[test]
fn end_precedes_start_precedes_handover() {
    let schedule = daily();
    let rotation = Rotation::new(&schedule).unwrap();
    let overrides = vec![
        ovr("carol", "2026-03-02T00:00:00Z", "2026-03-03T00:00:00Z"),
        ovr("dave", "2026-03-01T12:00:00Z", "2026-03-02T00:00:00Z"),
    ];
    let window = Window::new(ts("2026-03-01T06:00:00Z"), ts("2026-03-02T06:00:00Z"));
    let events = generate(&rotation, &overrides, &window);

    assert_eq!(
        describe(&events),
        vec![
            (ts("2026-03-01T12:00:00Z"), "override_start", "dave".to_string()),
            (ts("2026-03-02T00:00:00Z"), "override_end", "dave".to_string()),
            (ts("2026-03-02T00:00:00Z"), "override_start", "carol".to_string()),
            (ts("2026-03-02T00:00:00Z"), "handover", String::new()),
            (ts("2026-03-02T06:00:00Z"), "override_end", "carol".to_string()),
        ]
    );
}

#[test]
fn coincident_ends_pop_innermost_first() {
    let schedule = daily();
    let rotation = Rotation::new(&schedule).unwrap();
    let overrides = vec![
        ovr("outer", "2026-03-01T02:00:00Z", "2026-03-01T10:00:00Z"),
        ovr("inner", "2026-03-01T04:00:00Z", "2026-03-01T10:00:00Z"),
    ];
    let window = Window::new(ts("2026-03-01T01:00:00Z"), ts("2026-03-01T11:00:00Z"));
    let events = generate(&rotation, &overrides, &window);
    let labels: Vec<_> = describe(&events)
        .into_iter()
        .map(|(_, label, user)| format!("{label}:{user}"))
        .collect();

    assert_eq!(
        labels,
        [
            "override_start:outer",
            "override_start:inner",
            "override_end:inner",
            "override_end:outer",
        ]
    );
}

#[test]
fn coincident_starts_push_outermost_first() {
    let schedule = daily();
    let rotation = Rotation::new(&schedule).unwrap();
    let overrides = vec![
        ovr("inner", "2026-03-01T04:00:00Z", "2026-03-01T06:00:00Z"),
        ovr("outer", "2026-03-01T04:00:00Z", "2026-03-01T10:00:00Z"),
    ];
    let window = Window::new(ts("2026-03-01T01:00:00Z"), ts("2026-03-01T11:00:00Z"));
    let events = generate(&rotation, &overrides, &window);

    let first_two: Vec<_> = describe(&events)
        .into_iter()
        .take(2)
        .map(|(_, _, user)| user)
        .collect();
    assert_eq!(first_two, ["outer", "inner"]);
}

#[test]
fn override_active_at_from_has_no_start_event() {
    let schedule = daily();
    let rotation = Rotation::new(&schedule).unwrap();
    let overrides = vec![ovr("carol", "2026-02-27T00:00:00Z", "2026-03-01T08:00:00Z")];
    let window = Window::new(ts("2026-03-01T04:00:00Z"), ts("2026-03-01T12:00:00Z"));
    let events = generate(&rotation, &overrides, &window);

    assert_eq!(
        describe(&events),
        vec![(ts("2026-03-01T08:00:00Z"), "override_end", "carol".to_string())]
    );
}

#[test]
fn override_past_until_ends_at_until() {
    let schedule = daily();
    let rotation = Rotation::new(&schedule).unwrap();
    let overrides = vec![ovr("carol", "2026-03-01T08:00:00Z", "2026-03-09T00:00:00Z")];
    let window = Window::new(ts("2026-03-01T04:00:00Z"), ts("2026-03-01T12:00:00Z"));
    let ranked = rank_overrides(&overrides, &window);
    let events = generate_events(&rotation, &ranked, &window);

    assert_eq!(events.len(), 2);
    assert_eq!(events[1].at, window.until);
    assert!(matches!(events[1].kind, EventKind::OverrideEnd(_)));
}

#[test]
fn event_count_independent_of_distance_from_rotation_start() {
    let schedule = daily();
    let rotation = Rotation::new(&schedule).unwrap();

    let near_from = schedule.rotation_start + Duration::hours(6);
    let far_from = near_from + Duration::days(365 * 5_000);
    let near = Window::new(near_from, near_from + Duration::days(10));
    let far = Window::new(far_from, far_from + Duration::days(10));

    let near_events = generate(&rotation, &[], &near);
    let far_events = generate(&rotation, &[], &far);
    assert_eq!(near_events.len(), 10);
    assert_eq!(far_events.len(), near_events.len());
}

// ── Override stack ──────────────────────────────────────────────────────────

#[test]
fn stack_seeds_only_overrides_straddling_from() {
    let overrides = vec![
        ovr("outer", "2026-03-01T00:00:00Z", "2026-03-05T00:00:00Z"),
        ovr("inner", "2026-03-02T00:00:00Z", "2026-03-04T00:00:00Z"),
        ovr("exact", "2026-03-03T00:00:00Z", "2026-03-03T12:00:00Z"),
        ovr("done", "2026-03-01T00:00:00Z", "2026-03-03T00:00:00Z"),
    ];
    let stack = OverrideStack::seeded(&overrides, ts("2026-03-03T00:00:00Z"));

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.current(), Some("inner"));
}

#[test]
fn stack_is_lifo() {
    let a = ovr("a", "2026-03-01T00:00:00Z", "2026-03-05T00:00:00Z");
    let b = ovr("b", "2026-03-02T00:00:00Z", "2026-03-04T00:00:00Z");
    let mut stack = OverrideStack::new();

    assert_eq!(stack.current(), None);
    stack.push(&a);
    stack.push(&b);
    assert_eq!(stack.current(), Some("b"));
    assert_eq!(stack.pop().map(|o| o.user.as_str()), Some("b"));
    assert_eq!(stack.current(), Some("a"));
    stack.pop();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
}
