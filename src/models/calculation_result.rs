//! Pay breakdown model.
//!
//! This module contains the [`PayBreakdown`] produced by the period
//! aggregation, and the labelled [`ChartSegment`]s used to draw the income
//! breakdown chart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_half_up;

/// The engine's output for one pay period.
///
/// Amounts are kept at full precision so that a breakdown recomputed from
/// stored inputs compares equal to the stored one. Use [`PayBreakdown::rounded`]
/// for display.
///
/// # Example
///
/// ```
/// use take_home_pay::models::PayBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PayBreakdown {
///     total_hours: Decimal::from_str("25").unwrap(),
///     regular_income: Decimal::from_str("500").unwrap(),
///     penalty_income: Decimal::ZERO,
///     gross_income: Decimal::from_str("500").unwrap(),
///     period_tax: Decimal::from_str("28.5").unwrap(),
///     superannuation: Decimal::from_str("55").unwrap(),
///     net_income: Decimal::from_str("471.5").unwrap(),
///     income_minus_tax_and_super: Decimal::from_str("416.5").unwrap(),
/// };
/// assert_eq!(breakdown.rounded().net_income.to_string(), "471.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours worked across the period, after break deductions.
    pub total_hours: Decimal,
    /// Income from hours before the penalty cutoff.
    pub regular_income: Decimal,
    /// Income from hours after the penalty cutoff, at the penalty multiplier.
    pub penalty_income: Decimal,
    /// Regular plus penalty income.
    pub gross_income: Decimal,
    /// Income tax attributed to this period.
    pub period_tax: Decimal,
    /// Superannuation contribution (gross × super rate).
    pub superannuation: Decimal,
    /// Gross income less tax.
    pub net_income: Decimal,
    /// Gross income less tax and superannuation.
    pub income_minus_tax_and_super: Decimal,
}

impl PayBreakdown {
    /// A breakdown with every field zero.
    pub fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            regular_income: Decimal::ZERO,
            penalty_income: Decimal::ZERO,
            gross_income: Decimal::ZERO,
            period_tax: Decimal::ZERO,
            superannuation: Decimal::ZERO,
            net_income: Decimal::ZERO,
            income_minus_tax_and_super: Decimal::ZERO,
        }
    }

    /// Returns a copy with every field rounded half-up to two decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            total_hours: round_half_up(self.total_hours),
            regular_income: round_half_up(self.regular_income),
            penalty_income: round_half_up(self.penalty_income),
            gross_income: round_half_up(self.gross_income),
            period_tax: round_half_up(self.period_tax),
            superannuation: round_half_up(self.superannuation),
            net_income: round_half_up(self.net_income),
            income_minus_tax_and_super: round_half_up(self.income_minus_tax_and_super),
        }
    }

    /// The three slices of the income breakdown chart.
    pub fn chart_segments(&self) -> Vec<ChartSegment> {
        vec![
            ChartSegment {
                label: "Net Income".to_string(),
                value: round_half_up(self.net_income),
            },
            ChartSegment {
                label: "Taxes Owed".to_string(),
                value: round_half_up(self.period_tax),
            },
            ChartSegment {
                label: "Superannuation".to_string(),
                value: round_half_up(self.superannuation),
            },
        ]
    }
}

/// One labelled slice of the income breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSegment {
    /// The label shown next to the slice.
    pub label: String,
    /// The value of the slice in dollars.
    pub value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> PayBreakdown {
        PayBreakdown {
            total_hours: dec("37.5"),
            regular_income: dec("700.125"),
            penalty_income: dec("90"),
            gross_income: dec("790.125"),
            period_tax: dec("95.4567"),
            superannuation: dec("86.91375"),
            net_income: dec("694.6683"),
            income_minus_tax_and_super: dec("607.75455"),
        }
    }

    #[test]
    fn test_rounded_uses_half_up() {
        let rounded = sample().rounded();
        assert_eq!(rounded.regular_income, dec("700.13"));
        assert_eq!(rounded.gross_income, dec("790.13"));
        assert_eq!(rounded.period_tax, dec("95.46"));
        assert_eq!(rounded.superannuation, dec("86.91"));
        assert_eq!(rounded.net_income, dec("694.67"));
        assert_eq!(rounded.income_minus_tax_and_super, dec("607.75"));
    }

    #[test]
    fn test_rounded_displays_two_decimals() {
        let rounded = sample().rounded();
        assert_eq!(rounded.total_hours.to_string(), "37.50");
        assert_eq!(rounded.penalty_income.to_string(), "90.00");
    }

    #[test]
    fn test_zero_breakdown() {
        let zero = PayBreakdown::zero();
        assert_eq!(zero.gross_income, Decimal::ZERO);
        assert_eq!(zero.rounded(), zero);
    }

    #[test]
    fn test_chart_segments_order_and_values() {
        let segments = sample().chart_segments();
        let labels: Vec<_> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Net Income", "Taxes Owed", "Superannuation"]);
        assert_eq!(segments[1].value, dec("95.46"));
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let json = serde_json::to_value(sample().rounded()).unwrap();
        assert_eq!(json["gross_income"], "790.13");
        assert_eq!(json["total_hours"], "37.50");
    }
}
