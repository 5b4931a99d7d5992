//! The income form: every selection a user makes before calculating.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{DayOfWeek, PayPeriod, PositionType, ShiftInput, ShiftType};

/// Highest hourly rate a form may carry.
///
/// Keeps a yearly breakdown for every day of the week well inside
/// `Decimal` range.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// All user selections needed to compute and store a pay breakdown.
///
/// The same start time, end time and rate apply to every selected day.
///
/// # Example
///
/// ```
/// use take_home_pay::models::{DayOfWeek, PayForm, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let form = PayForm {
///     start_time: "09:00 AM".to_string(),
///     end_time: "05:00 PM".to_string(),
///     hourly_rate: Decimal::new(30, 0),
///     days_worked: [DayOfWeek::Monday, DayOfWeek::Tuesday].into_iter().collect(),
///     period: PayPeriod::Weekly,
///     ..Default::default()
/// };
/// assert!(form.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayForm {
    /// The employment arrangement.
    #[serde(default)]
    pub position: PositionType,
    /// The rostered part of the day.
    #[serde(default)]
    pub shift_type: ShiftType,
    /// Shift start, e.g. `"09:00 AM"`.
    pub start_time: String,
    /// Shift end, e.g. `"05:00 PM"`.
    pub end_time: String,
    /// Hourly rate in dollars.
    pub hourly_rate: Decimal,
    /// The days the shift is worked each week.
    pub days_worked: BTreeSet<DayOfWeek>,
    /// The period to report pay for.
    #[serde(default)]
    pub period: PayPeriod,
}

impl PayForm {
    /// Checks that every field required for a calculation is filled in.
    ///
    /// The times must be non-blank, the rate positive and no more than
    /// [`MAX_HOURLY_RATE`], and at least one day selected. Whether the times
    /// parse is not checked here: a malformed time yields a zero-hour
    /// breakdown, never an error.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_time.trim().is_empty() {
            return Err(invalid("start_time", "is required"));
        }
        if self.end_time.trim().is_empty() {
            return Err(invalid("end_time", "is required"));
        }
        if self.hourly_rate <= Decimal::ZERO {
            return Err(invalid("hourly_rate", "must be greater than zero"));
        }
        if self.hourly_rate > MAX_HOURLY_RATE {
            return Err(invalid("hourly_rate", "must not exceed 1000000"));
        }
        if self.days_worked.is_empty() {
            return Err(invalid("days_worked", "select at least one day"));
        }
        Ok(())
    }

    /// The shift worked on each selected day.
    pub fn shift_input(&self) -> ShiftInput {
        ShiftInput::new(
            self.start_time.clone(),
            self.end_time.clone(),
            self.hourly_rate,
        )
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}
