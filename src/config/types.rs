//! Configuration types for pay and tax calculation.
//!
//! This module contains the strongly-typed configuration used by every
//! calculation, and the raw structures deserialized from YAML files.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One bracket of a progressive tax schedule.
///
/// Income above `min_income` and up to and including `max_income` is taxed
/// at `base_tax + (income - min_income) * rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (exclusive, except for the first bracket).
    pub min_income: Decimal,
    /// Upper bound of the bracket (inclusive); `None` for the top bracket.
    pub max_income: Option<Decimal>,
    /// Tax owed on all income up to `min_income`.
    pub base_tax: Decimal,
    /// Marginal rate applied above `min_income`.
    pub rate: Decimal,
}

impl TaxBracket {
    fn new(min_income: i64, max_income: Option<i64>, base_tax: i64, rate: Decimal) -> Self {
        Self {
            min_income: Decimal::from(min_income),
            max_income: max_income.map(Decimal::from),
            base_tax: Decimal::from(base_tax),
            rate,
        }
    }

    /// Returns true if `income` falls in this bracket's upper bound.
    pub fn covers(&self, income: Decimal) -> bool {
        self.max_income.is_none_or(|max| income <= max)
    }
}

/// A validated progressive tax schedule.
///
/// Brackets start at zero, are contiguous, and only the last one is
/// unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Validates and wraps a list of brackets.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let Some(first) = brackets.first() else {
            return Err(invalid_table("at least one bracket is required"));
        };
        if first.min_income != Decimal::ZERO {
            return Err(invalid_table("the first bracket must start at zero"));
        }

        for (i, pair) in brackets.windows(2).enumerate() {
            let (lower, upper) = (&pair[0], &pair[1]);
            match lower.max_income {
                None => {
                    return Err(invalid_table(&format!(
                        "bracket {} is unbounded but is not the last bracket",
                        i + 1
                    )));
                }
                Some(max) if max != upper.min_income => {
                    return Err(invalid_table(&format!(
                        "bracket {} ends at {} but bracket {} starts at {}",
                        i + 1,
                        max,
                        i + 2,
                        upper.min_income
                    )));
                }
                Some(_) => {}
            }
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.max_income.is_some_and(|max| max <= bracket.min_income) {
                return Err(invalid_table(&format!("bracket {} is empty", i + 1)));
            }
            if bracket.rate < Decimal::ZERO || bracket.base_tax < Decimal::ZERO {
                return Err(invalid_table(&format!(
                    "bracket {} has a negative rate or base tax",
                    i + 1
                )));
            }
        }

        if brackets.last().is_some_and(|b| b.max_income.is_some()) {
            return Err(invalid_table("the last bracket must be unbounded"));
        }

        Ok(Self { brackets })
    }

    /// Returns the brackets, lowest first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the bracket an income falls in.
    pub fn bracket_for(&self, income: Decimal) -> &TaxBracket {
        self.brackets
            .iter()
            .find(|b| b.covers(income))
            .unwrap_or(&self.brackets[self.brackets.len() - 1])
    }
}

impl Default for TaxTable {
    /// Resident rates for the 2023-24 financial year.
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(0, Some(18_200), 0, Decimal::ZERO),
                TaxBracket::new(18_200, Some(45_000), 0, Decimal::new(19, 2)),
                TaxBracket::new(45_000, Some(120_000), 5_092, Decimal::new(325, 3)),
                TaxBracket::new(120_000, Some(180_000), 29_467, Decimal::new(37, 2)),
                TaxBracket::new(180_000, None, 51_667, Decimal::new(45, 2)),
            ],
        }
    }
}

fn invalid_table(message: &str) -> EngineError {
    EngineError::InvalidTaxTable {
        message: message.to_string(),
    }
}

/// Unpaid break deducted from long shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicy {
    /// Shifts strictly longer than this many hours have a break deducted.
    pub threshold_hours: Decimal,
    /// Hours deducted.
    pub deduction_hours: Decimal,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            threshold_hours: Decimal::from(6),
            deduction_hours: Decimal::new(5, 1),
        }
    }
}

/// The constants shared by every calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayConfig {
    /// Annual income tax schedule.
    pub tax_table: TaxTable,
    /// Superannuation contribution as a fraction of gross income.
    pub super_rate: Decimal,
    /// Multiplier applied to hours worked after the penalty cutoff.
    pub penalty_multiplier: Decimal,
    /// Time of day after which penalty rates apply.
    pub penalty_cutoff: NaiveTime,
    /// Unpaid break rule for long shifts.
    pub break_policy: BreakPolicy,
}

impl Default for PayConfig {
    fn default() -> Self {
        Self {
            tax_table: TaxTable::default(),
            super_rate: Decimal::new(11, 2),
            penalty_multiplier: Decimal::new(15, 1),
            penalty_cutoff: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            break_policy: BreakPolicy::default(),
        }
    }
}

/// Structure of `tax.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableFile {
    /// The financial year the schedule applies to, e.g. `"2023-24"`.
    pub financial_year: String,
    /// The brackets, lowest first.
    pub brackets: Vec<TaxBracket>,
}

/// Structure of `pay.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayRatesFile {
    /// Superannuation contribution rate.
    pub super_rate: Decimal,
    /// Penalty rate multiplier.
    pub penalty_multiplier: Decimal,
    /// Penalty cutoff in the 12-hour clock format, e.g. `"08:00 PM"`.
    pub penalty_cutoff: String,
    /// Unpaid break rule.
    pub unpaid_break: BreakPolicy,
}
