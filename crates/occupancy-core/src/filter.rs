//! Date-range overlap filtering for booking lists.
//!
//! The dashboards filter bookings and car trips by an operator-entered date
//! range. An invalid range must not blank the table — it silently shows
//! everything.

use crate::interval::{Interval, TimeSpan};
use crate::timestamp::parse_timestamp;

/// Keep the records whose span overlaps the query range, preserving input order.
///
/// Fail-open: if either query bound fails to parse, the list comes back
/// unfiltered. A record whose own span is unparseable is dropped from the
/// result; one bad record never aborts filtering of the rest.
///
/// Boundary touches count as overlap (see [`Interval::overlaps`]).
pub fn filter_by_overlap<T: TimeSpan>(
    records: Vec<T>,
    query_start: &str,
    query_end: &str,
) -> Vec<T> {
    let (Some(start), Some(end)) = (parse_timestamp(query_start), parse_timestamp(query_end))
    else {
        return records;
    };
    let query = Interval { start, end };

    records
        .into_iter()
        .filter(|record| record.interval().is_some_and(|span| span.overlaps(&query)))
        .collect()
}
