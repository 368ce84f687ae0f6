//! Occupied time spans and the inclusive overlap rule.
//!
//! Records fetched from the booking backend carry their span as raw strings;
//! the [`TimeSpan`] trait is the seam through which any such record yields a
//! parsed [`Interval`] — or `None` when the backend handed back something
//! unparseable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timestamp::{parse_timestamp, parse_timestamp_strict};

/// A booked or occupied span of time, normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Strict constructor: both bounds must parse, or the offending input is
    /// reported. End-before-start pairs are accepted as-is — upstream does not
    /// enforce ordering, so neither does this.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_timestamp_strict(start)?,
            end: parse_timestamp_strict(end)?,
        })
    }

    /// Inclusive overlap test: `self.start <= other.end && self.end >= other.start`.
    ///
    /// Two spans overlap when they share at least one instant, boundary touches
    /// included — a booking ending at 10:00 does overlap one starting at 10:00.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// True when the span contains the given instant, inclusive at both ends.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && self.end >= at
    }
}

/// A record carrying its occupied span as raw backend strings.
pub trait TimeSpan {
    /// Raw start timestamp, exactly as the backend stored it.
    fn span_start(&self) -> &str;

    /// Raw end timestamp, exactly as the backend stored it.
    fn span_end(&self) -> &str;

    /// Parse both bounds leniently. `None` when either is unparseable — the
    /// record is then treated as non-matching, never as a fatal error.
    fn interval(&self) -> Option<Interval> {
        Some(Interval {
            start: parse_timestamp(self.span_start())?,
            end: parse_timestamp(self.span_end())?,
        })
    }
}

/// Minimal owned span — start and end exactly as the backend sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: String,
    pub end: String,
}

impl TimeSpan for Span {
    fn span_start(&self) -> &str {
        &self.start
    }

    fn span_end(&self) -> &str {
        &self.end
    }
}
