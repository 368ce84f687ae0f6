//! Whole-day duration between two timestamps.

use crate::timestamp::parse_timestamp;

const SECONDS_PER_DAY: i64 = 86_400;

/// Elapsed whole days between two timestamps, ceiling-rounded.
///
/// Partial days bill as full days: a 30-hour rental is 2 days. The absolute
/// difference is taken, so the result is symmetric in its arguments. Either
/// bound failing to parse yields 0, never an error.
pub fn duration_days(start: &str, end: &str) -> u64 {
    let (Some(start), Some(end)) = (parse_timestamp(start), parse_timestamp(end)) else {
        return 0;
    };

    let elapsed = (end - start).abs().num_seconds() as u64;
    elapsed.div_ceil(SECONDS_PER_DAY as u64)
}
