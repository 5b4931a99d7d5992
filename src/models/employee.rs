//! Position and shift-type selections.
//!
//! Neither value changes the pay arithmetic. The position type selects which
//! entitlements are shown; the shift type is recorded with the result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    /// Full-time employment.
    #[default]
    FullTime,
    /// Part-time employment with a regular pattern.
    PartTime,
    /// Casual employment with no guaranteed hours.
    Casual,
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionType::FullTime => write!(f, "Full-time"),
            PositionType::PartTime => write!(f, "Part-time"),
            PositionType::Casual => write!(f, "Casual"),
        }
    }
}

/// The part of the day a shift is rostered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Day shift.
    #[default]
    Day,
    /// Afternoon shift.
    Afternoon,
    /// Night shift.
    Night,
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Day => write!(f, "Day"),
            ShiftType::Afternoon => write!(f, "Afternoon"),
            ShiftType::Night => write!(f, "Night"),
        }
    }
}
