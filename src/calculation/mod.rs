//! Calculation logic for the take-home pay engine.
//!
//! This module contains the pure functions that turn a shift pattern into a
//! pay breakdown: annual tax lookup, shift duration with midnight wrap and
//! unpaid break, the split of a shift's pay at the evening penalty cutoff,
//! and aggregation of a week's shifts over a pay period.

mod penalty_rate;
mod period_aggregation;
mod rounding;
mod shift_duration;
mod tax_bracket;

pub use penalty_rate::{PenaltySplit, apply_penalty_rates};
pub use period_aggregation::{calculate_form, calculate_pay_breakdown};
pub use rounding::round_half_up;
pub use shift_duration::{ShiftHours, calculate_hours, shift_span_seconds};
pub use tax_bracket::calculate_tax;
