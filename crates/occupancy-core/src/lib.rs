//! # occupancy-core
//!
//! Booking overlap filtering and parking utilization metrics for rental fleets.
//!
//! The library implements the date math a rental dashboard leans on: which
//! bookings fall inside an operator-entered date range, how many billable days
//! a rental spans, and how heavily a parking spot is used. All three operations
//! are pure functions over in-memory snapshots — fetching the records is the
//! caller's business.
//!
//! The error posture is deliberately fail-open: malformed input degrades to a
//! safe default (unfiltered list, zero days, zero rate) instead of an error,
//! because the dashboards that consume these results always expect a value.
//! Strict parsing is available as an opt-in via [`parse_timestamp_strict`].
//!
//! ## Quick start
//!
//! ```rust
//! use occupancy_core::{filter_by_overlap, Span};
//!
//! let bookings = vec![
//!     Span { start: "2024-01-01".into(), end: "2024-01-05".into() },
//!     Span { start: "2024-02-01".into(), end: "2024-02-05".into() },
//! ];
//!
//! // January query: only the first booking overlaps.
//! let hits = filter_by_overlap(bookings.clone(), "2024-01-03", "2024-01-10");
//! assert_eq!(hits.len(), 1);
//!
//! // An invalid bound fails open — everything is shown.
//! let all = filter_by_overlap(bookings, "not-a-date", "2024-01-10");
//! assert_eq!(all.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`filter`] — date-range overlap filtering over record lists
//! - [`duration`] — whole-day duration between two timestamps
//! - [`utilization`] — occupancy-vs-capacity rates and display levels
//! - [`interval`] — the [`Interval`] type and the [`TimeSpan`] record seam
//! - [`timestamp`] — lenient and strict timestamp parsing
//! - [`error`] — error types

pub mod duration;
pub mod error;
pub mod filter;
pub mod interval;
pub mod timestamp;
pub mod utilization;

pub use duration::duration_days;
pub use error::SpanError;
pub use filter::filter_by_overlap;
pub use interval::{Interval, Span, TimeSpan};
pub use timestamp::{parse_timestamp, parse_timestamp_strict};
pub use utilization::{occupied_at, utilization_rate, UtilizationLevel};
