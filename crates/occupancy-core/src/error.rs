//! Error types for occupancy-core operations.
//!
//! The core operations never return these — malformed input is absorbed into a
//! documented default. The strict parsing layer ([`crate::timestamp::parse_timestamp_strict`],
//! [`crate::interval::Interval::parse`]) surfaces them for callers that want
//! rejection instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpanError {
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, SpanError>;
