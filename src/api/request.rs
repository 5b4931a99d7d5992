//! Request types for the take-home pay API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and session endpoints.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    DayOfWeek, Meridiem, PayForm, PayPeriod, PositionType, ShiftType, combine_time_input,
};
use crate::session::Section;

/// A shift time as sent by a client.
///
/// Either the finished clock string (`"09:00 AM"`) or the raw text box and
/// AM/PM selector, which are joined the same way the form joins them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeField {
    /// A complete `HH:MM AM|PM` string.
    Text(String),
    /// The text box and selector, not yet combined.
    Split {
        /// The `HH:MM` text box.
        text: String,
        /// The AM/PM selector.
        meridiem: Meridiem,
    },
}

impl TimeField {
    /// The clock string the engine parses.
    pub fn into_clock_text(self) -> String {
        match self {
            TimeField::Text(text) => text,
            TimeField::Split { text, meridiem } => combine_time_input(&text, meridiem),
        }
    }
}

/// Request body for `/calculate`, storing and updating records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayFormRequest {
    /// The employment arrangement.
    #[serde(default)]
    pub position: PositionType,
    /// The rostered part of the day.
    #[serde(default)]
    pub shift_type: ShiftType,
    /// Shift start.
    pub start_time: TimeField,
    /// Shift end.
    pub end_time: TimeField,
    /// Hourly rate in dollars, as a number or a decimal string.
    pub hourly_rate: Decimal,
    /// The days the shift is worked each week.
    #[serde(default)]
    pub days_worked: BTreeSet<DayOfWeek>,
    /// The period to report pay for.
    #[serde(default)]
    pub period: PayPeriod,
}

impl From<PayFormRequest> for PayForm {
    fn from(req: PayFormRequest) -> Self {
        PayForm {
            position: req.position,
            shift_type: req.shift_type,
            start_time: req.start_time.into_clock_text(),
            end_time: req.end_time.into_clock_text(),
            hourly_rate: req.hourly_rate,
            days_worked: req.days_worked,
            period: req.period,
        }
    }
}

/// Request body for `/sessions/:id/navigate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    /// The section to show.
    pub section: Section,
}
