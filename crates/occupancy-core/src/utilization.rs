//! Parking-spot utilization rates.
//!
//! Utilization is never persisted — it is recomputed from a spot's capacity
//! and the trips occupying it at read time.

use serde::{Deserialize, Serialize};

use crate::interval::TimeSpan;
use crate::timestamp::parse_timestamp;

/// Occupancy as a percentage of capacity.
///
/// A capacity of zero reports 0.0 rather than dividing by zero. The result is
/// NOT clamped: an over-booked spot reads above 100%, and surfacing that is
/// the point. Classifying the rate for display is a separate concern — see
/// [`UtilizationLevel`].
pub fn utilization_rate(occupied: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    f64::from(occupied) / f64::from(capacity) * 100.0
}

/// Display severity for a utilization rate.
///
/// The dashboards color spots at 80% and above as critical; 50–80% draws
/// attention. The thresholds live here so every screen classifies the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationLevel {
    Normal,
    High,
    Critical,
}

impl UtilizationLevel {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 80.0 {
            Self::Critical
        } else if rate >= 50.0 {
            Self::High
        } else {
            Self::Normal
        }
    }
}

/// Count the records whose span contains the given instant, inclusive.
///
/// This is how a spot's occupancy is derived: each trip active at `at`
/// occupies one unit. An unparseable `at` counts nothing; records with
/// unparseable spans are skipped.
pub fn occupied_at<T: TimeSpan>(records: &[T], at: &str) -> usize {
    let Some(at) = parse_timestamp(at) else {
        return 0;
    };

    records
        .iter()
        .filter(|record| record.interval().is_some_and(|span| span.contains(at)))
        .count()
}
