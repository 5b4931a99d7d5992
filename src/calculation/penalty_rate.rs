//! Penalty rate split.
//!
//! Hours worked after the evening cutoff are paid at the penalty multiplier.
//! Only the end time's clock position is compared with the cutoff: a shift
//! that finishes after midnight ends "before" 8:00 PM and earns no penalty
//! hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayConfig;
use crate::models::{ClockTime, ShiftInput};

use super::shift_duration::{ShiftHours, calculate_hours};

/// One day's hours and income, split at the penalty cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySplit {
    /// Paid hours for the day, or the unparseable marker.
    pub shift_hours: ShiftHours,
    /// Hours after the cutoff, never more than the paid hours.
    pub penalty_hours: Decimal,
    /// Pay for hours before the cutoff at the base rate.
    pub regular_income: Decimal,
    /// Pay for hours after the cutoff at the penalty multiplier.
    pub penalty_income: Decimal,
}

impl PenaltySplit {
    /// Paid hours, with unparseable input counting as zero.
    pub fn base_hours(&self) -> Decimal {
        self.shift_hours.hours()
    }

    /// Paid hours before the cutoff.
    pub fn regular_hours(&self) -> Decimal {
        self.base_hours() - self.penalty_hours
    }
}

/// Hours between the cutoff and the end of the shift on the same clock face.
fn hours_after_cutoff(end: ClockTime, cutoff: ClockTime) -> Decimal {
    let past = end.seconds_from_midnight() - cutoff.seconds_from_midnight();
    if past > 0 {
        Decimal::from(past) / Decimal::from(3600)
    } else {
        Decimal::ZERO
    }
}

/// Splits one day's shift into regular and penalty hours and pays each.
///
/// # Arguments
///
/// * `shift` - The shift times and hourly rate
/// * `config` - Supplies the cutoff, the penalty multiplier and the break rule
///
/// # Returns
///
/// A [`PenaltySplit`]. Malformed times give zero hours and zero income.
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::apply_penalty_rates;
/// use take_home_pay::config::PayConfig;
/// use take_home_pay::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new("06:00 PM", "10:00 PM", Decimal::from(20));
/// let split = apply_penalty_rates(&shift, &PayConfig::default());
///
/// assert_eq!(split.base_hours(), Decimal::from(4));
/// assert_eq!(split.penalty_hours, Decimal::from(2));
/// assert_eq!(split.regular_income, Decimal::from(40));
/// assert_eq!(split.penalty_income, Decimal::from(60));
/// ```
pub fn apply_penalty_rates(shift: &ShiftInput, config: &PayConfig) -> PenaltySplit {
    let shift_hours = calculate_hours(&shift.start_time, &shift.end_time, &config.break_policy);
    let base_hours = shift_hours.hours();

    let penalty_hours = match shift.clock_times() {
        Some((_, end)) if base_hours > Decimal::ZERO => {
            let cutoff = ClockTime::new(config.penalty_cutoff);
            hours_after_cutoff(end, cutoff).min(base_hours)
        }
        _ => Decimal::ZERO,
    };

    PenaltySplit {
        shift_hours,
        penalty_hours,
        regular_income: (base_hours - penalty_hours) * shift.hourly_rate,
        penalty_income: penalty_hours * shift.hourly_rate * config.penalty_multiplier,
    }
}
