//! Input and output types for schedule rendering.
//!
//! All timestamps are UTC instants. Inputs are never mutated by the engine.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A periodic base rotation.
///
/// `users[0]` owns `[rotation_start, rotation_start + interval)`, `users[1]`
/// owns the next interval, and so on, wrapping around. The rotation extends
/// indefinitely in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Rotation order. Must be non-empty.
    pub users: Vec<String>,
    /// The instant at which `users[0]` takes the first shift.
    pub rotation_start: DateTime<Utc>,
    /// Shift length. Must be strictly positive.
    pub interval: Duration,
}

impl Schedule {
    pub fn new<I, S>(users: I, rotation_start: DateTime<Utc>, interval: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
            rotation_start,
            interval,
        }
    }

    /// Length of one full cycle through every user.
    pub fn period(&self) -> Duration {
        self.interval * self.users.len() as i32
    }
}

/// An explicit reassignment of `[start, end)` to `user`.
///
/// Overrides may nest inside each other but must not partially overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub user: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Override {
    pub fn new(user: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            start,
            end,
        }
    }

    /// True when `[start, end)` shares at least one instant with `[from, until)`.
    pub fn intersects(&self, window: &Window) -> bool {
        self.start < window.until && self.end > window.from
    }

    /// True when `[start, end)` lies entirely within `other`.
    pub fn nests_within(&self, other: &Override) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

/// The half-open query range `[from, until)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl Window {
    pub fn new(from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self { from, until }
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.from <= t && t < self.until
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.until
    }
}

/// One output interval `[start, end)` with a single effective owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub user: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Segment {
    pub fn new(user: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
