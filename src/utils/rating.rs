//! Average rating arithmetic.
//!
//! The mean is taken in `f64`, lifted into `rust_decimal` with its binary
//! value intact, rounded half-up to two places, then converted back to `f64`
//! for serialization.

use rust_decimal::prelude::*;

/// Places kept on every published average.
pub const RATING_DECIMAL_PLACES: u32 = 2;

/// Round half-up (ties away from zero): 0.125 -> 0.13, -0.125 -> -0.13.
#[inline]
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATING_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Mean of `ratings` rounded half-up to two places. An empty slice yields 0.0.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    // from_f64 would shorten to the nearest decimal and turn 2.00499.. into 2.005
    Decimal::from_f64_retain(mean)
        .map(round_half_up)
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(round_half_up(Decimal::new(125, 3)), Decimal::new(13, 2));
        assert_eq!(round_half_up(Decimal::new(124, 3)), Decimal::new(12, 2));
        assert_eq!(round_half_up(Decimal::new(-125, 3)), Decimal::new(-13, 2));
        assert_eq!(round_half_up(Decimal::new(5, 3)), Decimal::new(1, 2));
    }

    #[test]
    fn single_rating_is_exact() {
        assert_eq!(average_rating(&[4]), 4.0);
    }

    #[test]
    fn half_mean_keeps_two_places() {
        assert_eq!(average_rating(&[4, 5]), 4.5);
    }

    #[test]
    fn repeating_mean_is_rounded() {
        assert_eq!(average_rating(&[5, 4, 4]), 4.33);
        assert_eq!(average_rating(&[5, 5, 4]), 4.67);
        assert_eq!(average_rating(&[1, 2, 2]), 1.67);
    }

    #[test]
    fn binary_midpoint_rounds_up() {
        // 1/8 = 0.125 is exact in f64
        let ratings = [1, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(average_rating(&ratings), 0.13);
    }

    #[test]
    fn mean_below_midpoint_in_f64_rounds_down() {
        // 401/200 is stored as 2.00499999999999989..
        let mut ratings = vec![2; 199];
        ratings.push(3);
        assert_eq!(average_rating(&ratings), 2.0);
    }

    #[test]
    fn mean_above_midpoint_in_f64_rounds_up() {
        // 161/40 is stored just above 4.025
        let mut ratings = vec![4; 39];
        ratings.push(5);
        assert_eq!(average_rating(&ratings), 4.03);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }
}
