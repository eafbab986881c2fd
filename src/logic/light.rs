//! Lux reading classification
//!
//! Fixed threshold ladder mapping an illuminance reading to one of five
//! quality labels.

use crate::model::types::LightQuality;

/// Bucket breakpoints in lux, lowest first
pub const BREAKPOINTS: [f64; 4] = [500.0, 1500.0, 3000.0, 6000.0];

/// Classify a lux reading into a quality bucket
///
/// Readings below 500 lx are VeryLow, below 1500 Low, below 3000 Moderate,
/// below 6000 Bright, everything else VeryBright.
pub fn bucket_lux(lux: f64) -> LightQuality {
    if lux < BREAKPOINTS[0] {
        LightQuality::VeryLow
    } else if lux < BREAKPOINTS[1] {
        LightQuality::Low
    } else if lux < BREAKPOINTS[2] {
        LightQuality::Moderate
    } else if lux < BREAKPOINTS[3] {
        LightQuality::Bright
    } else {
        LightQuality::VeryBright
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_lux(0.0), LightQuality::VeryLow);
        assert_eq!(bucket_lux(499.9), LightQuality::VeryLow);
        assert_eq!(bucket_lux(500.0), LightQuality::Low);
        assert_eq!(bucket_lux(1499.9), LightQuality::Low);
        assert_eq!(bucket_lux(1500.0), LightQuality::Moderate);
        assert_eq!(bucket_lux(2999.9), LightQuality::Moderate);
        assert_eq!(bucket_lux(3000.0), LightQuality::Bright);
        assert_eq!(bucket_lux(5999.9), LightQuality::Bright);
        assert_eq!(bucket_lux(6000.0), LightQuality::VeryBright);
        assert_eq!(bucket_lux(50_000.0), LightQuality::VeryBright);
    }

    #[test]
    fn test_bucketing_is_monotonic() {
        let mut last = bucket_lux(0.0).ordinal();
        let mut lux = 0.0;
        while lux <= 10_000.0 {
            let ord = bucket_lux(lux).ordinal();
            assert!(ord >= last, "ordinal decreased at {} lx", lux);
            last = ord;
            lux += 7.3;
        }
    }
}
