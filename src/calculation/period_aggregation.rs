//! Period aggregation: from one shift pattern to a full pay breakdown.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayConfig;
use crate::models::{DayOfWeek, PayBreakdown, PayForm, PayPeriod, ShiftInput};

use super::penalty_rate::apply_penalty_rates;
use super::tax_bracket::calculate_tax;

/// Calculates the pay breakdown for a repeating weekly shift pattern.
///
/// The same shift is worked on every selected day, so a single penalty
/// split is scaled by the number of days and then by the period's week
/// count. Tax is worked out on the annualised gross and apportioned back to
/// the period.
///
/// Callers gate the call: days must be selected, the times present and the
/// rate positive (see [`PayForm::validate`]). An empty day set simply gives
/// a zero breakdown.
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::calculate_pay_breakdown;
/// use take_home_pay::config::PayConfig;
/// use take_home_pay::models::{DayOfWeek, PayPeriod, ShiftInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shift = ShiftInput::new("09:00 AM", "02:00 PM", Decimal::from(20));
/// let days = [
///     DayOfWeek::Monday,
///     DayOfWeek::Tuesday,
///     DayOfWeek::Wednesday,
///     DayOfWeek::Thursday,
///     DayOfWeek::Friday,
/// ]
/// .into_iter()
/// .collect();
///
/// let breakdown = calculate_pay_breakdown(&shift, &days, PayPeriod::Weekly, &PayConfig::default());
/// assert_eq!(breakdown.gross_income, Decimal::from(500));
/// assert_eq!(breakdown.period_tax, Decimal::from_str("28.5").unwrap());
/// assert_eq!(breakdown.superannuation, Decimal::from(55));
/// ```
pub fn calculate_pay_breakdown(
    shift: &ShiftInput,
    days_worked: &BTreeSet<DayOfWeek>,
    period: PayPeriod,
    config: &PayConfig,
) -> PayBreakdown {
    let split = apply_penalty_rates(shift, config);
    if split.shift_hours.is_unparseable() {
        debug!(
            start_time = %shift.start_time,
            end_time = %shift.end_time,
            "Shift times could not be parsed, paying zero hours"
        );
    }

    let scale = Decimal::from(days_worked.len()) * Decimal::from(period.multiplier());
    let total_hours = split.base_hours() * scale;
    let regular_income = split.regular_income * scale;
    let penalty_income = split.penalty_income * scale;

    let gross_income = regular_income + penalty_income;
    let periods_per_year = period.periods_per_year();
    let yearly_income = gross_income * periods_per_year;
    let yearly_tax = calculate_tax(yearly_income, &config.tax_table);
    let period_tax = yearly_tax / periods_per_year;
    let superannuation = gross_income * config.super_rate;
    let net_income = gross_income - period_tax;

    PayBreakdown {
        total_hours,
        regular_income,
        penalty_income,
        gross_income,
        period_tax,
        superannuation,
        net_income,
        income_minus_tax_and_super: net_income - superannuation,
    }
}

/// Calculates the pay breakdown for a completed form.
pub fn calculate_form(form: &PayForm, config: &PayConfig) -> PayBreakdown {
    calculate_pay_breakdown(&form.shift_input(), &form.days_worked, form.period, config)
}
