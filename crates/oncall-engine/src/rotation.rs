//! Closed-form lookup of the base rotation.
//!
//! The owner at any instant is computed directly from the elapsed time since
//! `rotation_start`, so lookups cost the same one interval or ten thousand
//! years away. Elapsed time is measured in whole nanoseconds as `i128`, which
//! covers the full `DateTime<Utc>` range without overflow or rounding.
//!
//! Instants before `rotation_start` project the rotation backwards: one
//! interval before the start belongs to the last user in rotation order.

use std::iter::FusedIterator;

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::model::{Schedule, Window};
use crate::validate::validate_schedule;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Floor division: rounds toward negative infinity, unlike `/`.
///
/// `floor_div(-1, 7) == -1` where `-1 / 7 == 0`.
pub fn floor_div(dividend: i128, divisor: i128) -> i128 {
    let quotient = dividend / divisor;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Modulo whose result is always in `[0, divisor)` for a positive divisor.
pub fn floor_mod(dividend: i128, divisor: i128) -> i128 {
    dividend - divisor * floor_div(dividend, divisor)
}

/// Exact length of `delta` in nanoseconds.
pub fn total_nanos(delta: Duration) -> i128 {
    // num_seconds truncates toward zero and subsec_nanos carries the sign.
    delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128
}

fn duration_from_nanos(nanos: i128) -> Option<Duration> {
    let secs = i64::try_from(floor_div(nanos, NANOS_PER_SEC)).ok()?;
    let subsec = floor_mod(nanos, NANOS_PER_SEC) as u32;
    Duration::new(secs, subsec)
}

/// Base-rotation resolver bound to one schedule.
#[derive(Debug, Clone, Copy)]
pub struct Rotation<'a> {
    schedule: &'a Schedule,
    interval_nanos: i128,
}

impl<'a> Rotation<'a> {
    /// Bind a resolver to `schedule`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidSchedule` if the schedule has no users or
    /// a non-positive interval.
    pub fn new(schedule: &'a Schedule) -> Result<Self> {
        validate_schedule(schedule)?;
        Ok(Self {
            schedule,
            interval_nanos: total_nanos(schedule.interval),
        })
    }

    /// Number of whole intervals between `rotation_start` and the shift
    /// containing `t`. Negative before `rotation_start`.
    pub fn shift_index(&self, t: DateTime<Utc>) -> i128 {
        let elapsed = total_nanos(t - self.schedule.rotation_start);
        floor_div(elapsed, self.interval_nanos)
    }

    /// The base-rotation owner at instant `t`.
    pub fn owner_at(&self, t: DateTime<Utc>) -> &'a str {
        let len = self.schedule.users.len() as i128;
        let index = floor_mod(self.shift_index(t), len) as usize;
        &self.schedule.users[index]
    }

    /// Start of the shift containing `t`, or `None` past the representable range.
    pub fn shift_start(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.handover(self.shift_index(t))
    }

    /// The `n`th handover instant, `rotation_start + n * interval`.
    pub fn handover(&self, n: i128) -> Option<DateTime<Utc>> {
        let offset = duration_from_nanos(n.checked_mul(self.interval_nanos)?)?;
        self.schedule.rotation_start.checked_add_signed(offset)
    }

    /// Lazily yield every handover instant in the closed range `[from, until]`.
    ///
    /// The first index is computed in closed form from `from`, so the number of
    /// steps depends only on how many handovers the window holds.
    pub fn boundaries_in(&self, window: &Window) -> Handovers<'a> {
        let elapsed = total_nanos(window.from - self.schedule.rotation_start);
        let mut next = floor_div(elapsed, self.interval_nanos);
        if floor_mod(elapsed, self.interval_nanos) != 0 {
            next += 1;
        }
        Handovers {
            rotation: *self,
            next,
            until: window.until,
            done: false,
        }
    }
}

/// Iterator over handover instants, returned by [`Rotation::boundaries_in`].
#[derive(Debug, Clone)]
pub struct Handovers<'a> {
    rotation: Rotation<'a>,
    next: i128,
    until: DateTime<Utc>,
    done: bool,
}

impl Iterator for Handovers<'_> {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.rotation.handover(self.next) {
            Some(at) if at <= self.until => {
                self.next += 1;
                Some(at)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for Handovers<'_> {}
