//! # oncall-engine
//!
//! Renders the effective on-call timeline for a bounded window by merging a
//! periodic base rotation with nested, time-bounded overrides.
//!
//! The engine never materializes rotation history. It generates only the
//! boundary events that fall inside the query window, sweeps them once while
//! tracking active overrides on a LIFO stack, and coalesces the result into
//! the minimal sequence of ownership segments.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use oncall_engine::{render, Override, Schedule, Window};
//!
//! let start = Utc.with_ymd_and_hms(2025, 11, 7, 17, 0, 0).unwrap();
//! let schedule = Schedule::new(["alice", "bob"], start, Duration::days(7));
//! let overrides = vec![Override::new(
//!     "carol",
//!     start + Duration::days(1),
//!     start + Duration::days(2),
//! )];
//! let window = Window::new(start, start + Duration::days(7));
//!
//! let segments = render(&schedule, &overrides, window).unwrap();
//! let owners: Vec<&str> = segments.iter().map(|s| s.user.as_str()).collect();
//! assert_eq!(owners, ["alice", "carol", "alice"]);
//! ```
//!
//! ## Modules
//!
//! - [`model`] — `Schedule`, `Override`, `Window`, `Segment`
//! - [`rotation`] — closed-form base rotation lookup and handover boundaries
//! - [`stack`] — LIFO stack of active overrides
//! - [`events`] — sorted boundary events relevant to a window
//! - [`sweep`] — single-pass sweep producing raw segments
//! - [`merge`] — coalescing of adjacent same-owner segments
//! - [`validate`] — input checks run before any sweeping
//! - [`render`] — the public entry point tying the above together
//! - [`error`] — Error types

pub mod error;
pub mod events;
pub mod merge;
pub mod model;
pub mod render;
pub mod rotation;
pub mod stack;
pub mod sweep;
pub mod validate;

pub use error::ScheduleError;
pub use merge::merge_segments;
pub use model::{Override, Schedule, Segment, Window};
pub use render::{render, render_observed};
pub use rotation::Rotation;
pub use sweep::{NoopObserver, SweepObserver, TracingObserver};
