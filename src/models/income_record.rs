//! Stored income records.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayBreakdown, PayForm};

/// A stored calculation: the form it came from and the breakdown it produced.
///
/// # Example
///
/// ```
/// use take_home_pay::models::{IncomeRecord, PayBreakdown, PayForm};
/// use chrono::NaiveDate;
///
/// let record = IncomeRecord::new(
///     PayForm::default(),
///     PayBreakdown::zero(),
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
/// );
/// assert_eq!(record.week, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// ISO week number of the day the record was created.
    pub week: u32,
    /// The selections the breakdown was computed from.
    pub form: PayForm,
    /// The computed breakdown.
    pub breakdown: PayBreakdown,
}

impl IncomeRecord {
    /// Creates a record stamped with the ISO week of `created_on`.
    pub fn new(form: PayForm, breakdown: PayBreakdown, created_on: NaiveDate) -> Self {
        Self {
            week: created_on.iso_week().week(),
            form,
            breakdown,
        }
    }

    /// Returns a record with new contents but the original week.
    pub fn revise(&self, form: PayForm, breakdown: PayBreakdown) -> Self {
        Self {
            week: self.week,
            form,
            breakdown,
        }
    }

    /// The one-line summary listed in the sidebar.
    pub fn summary(&self, index: usize) -> RecordSummary {
        RecordSummary {
            index,
            week: self.week,
            gross_income: crate::calculation::round_half_up(self.breakdown.gross_income),
        }
    }
}

/// A sidebar entry for a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Position of the record in the session.
    pub index: usize,
    /// ISO week the record was created in.
    pub week: u32,
    /// Gross income, rounded for display.
    pub gross_income: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn breakdown_with_gross(gross: &str) -> PayBreakdown {
        PayBreakdown {
            gross_income: Decimal::from_str(gross).unwrap(),
            ..PayBreakdown::zero()
        }
    }

    #[test]
    fn test_week_is_iso_week_of_creation() {
        let record = IncomeRecord::new(PayForm::default(), PayBreakdown::zero(), date(2026, 10, 16));
        assert_eq!(record.week, 42);
    }

    #[test]
    fn test_week_at_year_boundary_uses_iso_rules() {
        // 2027-01-01 is a Friday and belongs to ISO week 53 of 2026.
        let record = IncomeRecord::new(PayForm::default(), PayBreakdown::zero(), date(2027, 1, 1));
        assert_eq!(record.week, 53);
    }

    #[test]
    fn test_revise_keeps_week() {
        let original = IncomeRecord::new(PayForm::default(), PayBreakdown::zero(), date(2026, 3, 2));
        let revised = original.revise(PayForm::default(), breakdown_with_gross("120"));
        assert_eq!(revised.week, original.week);
        assert_eq!(revised.breakdown.gross_income, Decimal::from(120));
    }

    #[test]
    fn test_summary_rounds_gross() {
        let record = IncomeRecord::new(
            PayForm::default(),
            breakdown_with_gross("812.345"),
            date(2026, 3, 2),
        );
        let summary = record.summary(4);
        assert_eq!(summary.index, 4);
        assert_eq!(summary.gross_income.to_string(), "812.35");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = IncomeRecord::new(
            PayForm::default(),
            breakdown_with_gross("500"),
            date(2026, 3, 2),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: IncomeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
