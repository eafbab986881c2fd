//! Tests for lux bucketing
//!
//! Property: the quality label ordinal is non-decreasing as lux increases,
//! with fixed breakpoints {500, 1500, 3000, 6000}.

use sathi::logic::light::{bucket_lux, BREAKPOINTS};
use sathi::model::types::LightQuality;

#[test]
fn test_breakpoints_are_fixed() {
    assert_eq!(BREAKPOINTS, [500.0, 1500.0, 3000.0, 6000.0]);
}

#[test]
fn test_five_labels_in_order() {
    assert_eq!(bucket_lux(100.0), LightQuality::VeryLow);
    assert_eq!(bucket_lux(1000.0), LightQuality::Low);
    assert_eq!(bucket_lux(2000.0), LightQuality::Moderate);
    assert_eq!(bucket_lux(4000.0), LightQuality::Bright);
    assert_eq!(bucket_lux(8000.0), LightQuality::VeryBright);
}

#[test]
fn test_each_breakpoint_starts_the_next_bucket() {
    let mut previous = bucket_lux(0.0);
    for &bp in &BREAKPOINTS {
        let below = bucket_lux(bp - 0.001);
        let at = bucket_lux(bp);
        assert_eq!(below, previous, "bucket changed before breakpoint {}", bp);
        assert_eq!(
            at.ordinal(),
            previous.ordinal() + 1,
            "breakpoint {} did not advance exactly one bucket",
            bp
        );
        previous = at;
    }
}

#[test]
fn test_monotonic_over_sweep() {
    let mut last_ordinal = 0;
    let mut lux = 0.0;
    while lux < 12_000.0 {
        let ordinal = bucket_lux(lux).ordinal();
        assert!(ordinal >= last_ordinal, "ordinal decreased at {} lx", lux);
        last_ordinal = ordinal;
        lux += 13.7;
    }
}
