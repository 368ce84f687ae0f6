//! Tests for utilization rates, display levels, and derived occupancy.

use occupancy_core::{occupied_at, utilization_rate, Span, UtilizationLevel};

fn span(start: &str, end: &str) -> Span {
    Span {
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[test]
fn zero_capacity_reports_zero() {
    assert_eq!(utilization_rate(0, 0), 0.0);
    assert_eq!(utilization_rate(7, 0), 0.0, "no division by zero");
}

#[test]
fn empty_spot_is_zero_percent() {
    assert_eq!(utilization_rate(0, 50), 0.0);
}

#[test]
fn full_spot_is_one_hundred_percent() {
    assert_eq!(utilization_rate(50, 50), 100.0);
}

#[test]
fn over_capacity_is_unclamped() {
    assert_eq!(utilization_rate(55, 50), 110.0);
    assert_eq!(utilization_rate(100, 50), 200.0);
}

#[test]
fn fractional_rates_are_not_rounded() {
    let rate = utilization_rate(1, 3);
    assert!(
        (rate - 33.333_333).abs() < 1e-3,
        "expected ~33.3%, got {rate}"
    );
}

#[test]
fn level_thresholds() {
    assert_eq!(UtilizationLevel::from_rate(0.0), UtilizationLevel::Normal);
    assert_eq!(UtilizationLevel::from_rate(49.9), UtilizationLevel::Normal);
    assert_eq!(UtilizationLevel::from_rate(50.0), UtilizationLevel::High);
    assert_eq!(UtilizationLevel::from_rate(79.9), UtilizationLevel::High);
    assert_eq!(UtilizationLevel::from_rate(80.0), UtilizationLevel::Critical);
    assert_eq!(UtilizationLevel::from_rate(110.0), UtilizationLevel::Critical);
}

#[test]
fn occupancy_counts_trips_active_at_instant() {
    let trips = vec![
        span("2024-01-01", "2024-01-10"), // active
        span("2024-01-04", "2024-01-06"), // active
        span("2024-02-01", "2024-02-05"), // not active
    ];

    assert_eq!(occupied_at(&trips, "2024-01-05"), 2);
}

#[test]
fn occupancy_is_inclusive_at_span_boundaries() {
    let trips = vec![span("2024-01-01", "2024-01-05")];

    assert_eq!(occupied_at(&trips, "2024-01-01"), 1, "start instant counts");
    assert_eq!(occupied_at(&trips, "2024-01-05"), 1, "end instant counts");
}

#[test]
fn occupancy_skips_unparseable_trips() {
    let trips = vec![
        span("garbage", "2024-01-10"),
        span("2024-01-01", "2024-01-10"),
    ];

    assert_eq!(occupied_at(&trips, "2024-01-05"), 1);
}

#[test]
fn occupancy_with_invalid_instant_is_zero() {
    let trips = vec![span("2024-01-01", "2024-01-10")];

    assert_eq!(occupied_at(&trips, "not-a-date"), 0);
}
