//! Core data models for the take-home pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod income_record;
mod pay_form;
mod pay_period;
mod shift;

pub use calculation_result::{ChartSegment, PayBreakdown};
pub use employee::{PositionType, ShiftType};
pub use income_record::{IncomeRecord, RecordSummary};
pub use pay_form::{MAX_HOURLY_RATE, PayForm};
pub use pay_period::{DayOfWeek, PayPeriod, WEEKS_PER_YEAR};
pub use shift::{
    CLOCK_FORMAT, ClockTime, ClockTimeError, Meridiem, ShiftInput, combine_time_input,
};
