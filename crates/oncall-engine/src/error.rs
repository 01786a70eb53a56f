//! Error types for schedule rendering.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Which part of a [`Schedule`](crate::Schedule) failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDefect {
    /// The rotation has no users.
    NoUsers,
    /// The handover interval is zero or negative.
    NonPositiveInterval,
}

impl std::fmt::Display for ScheduleDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleDefect::NoUsers => f.write_str("Schedule must contain at least one user"),
            ScheduleDefect::NonPositiveInterval => {
                f.write_str("Schedule handover interval must be positive")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("'from' time must be before 'until' time (from {from}, until {until})")]
    InvalidWindow {
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    },

    #[error("{0}")]
    InvalidSchedule(ScheduleDefect),

    #[error("Override #{index} must start before it ends (start {start}, end {end})")]
    InvalidOverride {
        index: usize,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Two overrides partially overlap instead of nesting.
    #[error("Overrides #{outer} and #{inner} cross without nesting")]
    UnsupportedOverrideLayout { outer: usize, inner: usize },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
