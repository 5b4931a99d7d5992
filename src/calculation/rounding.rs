//! Display rounding for money and hours.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to exactly two decimal places, with midpoints rounded away from zero.
///
/// The result always carries a scale of two, so `37.5` displays as `37.50`.
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("123.455").unwrap()).to_string(), "123.46");
/// assert_eq!(round_half_up(Decimal::from_str("7.5").unwrap()).to_string(), "7.50");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec("123.454")), dec("123.45"));
    }

    #[test]
    fn test_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec("123.455")), dec("123.46"));
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_half_up(dec("-123.455")), dec("-123.46"));
    }

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(round_half_up(dec("500")).to_string(), "500.00");
        assert_eq!(round_half_up(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_repeating_fraction() {
        // 25 minutes is 0.41666... hours
        let hours = Decimal::from(25) / Decimal::from(60);
        assert_eq!(round_half_up(hours).to_string(), "0.42");
    }
}
