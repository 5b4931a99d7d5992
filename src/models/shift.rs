//! Shift input model and clock-time parsing.
//!
//! Shift times are entered as wall-clock strings on a 12-hour clock with a
//! meridiem, e.g. `"09:00 AM"`. They carry no date.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The textual format every shift time is parsed with.
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// AM or PM, as chosen next to the time text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Joins the `HH:MM` text box and the AM/PM selector into the engine format.
///
/// A bare two-character entry such as `"09"` gets a trailing colon, exactly
/// like the form always did. The result (`"09: AM"`) still fails to parse,
/// which the duration functions treat as an unparseable shift.
///
/// # Examples
///
/// ```
/// use take_home_pay::models::{combine_time_input, Meridiem};
///
/// assert_eq!(combine_time_input("09:30", Meridiem::Am), "09:30 AM");
/// assert_eq!(combine_time_input("10", Meridiem::Pm), "10: PM");
/// ```
pub fn combine_time_input(text: &str, meridiem: Meridiem) -> String {
    if text.len() == 2 && !text.contains(':') {
        format!("{}: {}", text, meridiem)
    } else {
        format!("{} {}", text, meridiem)
    }
}

/// A time of day parsed from the 12-hour clock format.
///
/// The text must match `%I:%M %p` exactly. Surrounding whitespace is not
/// stripped, so `" 09:00 AM"` does not parse.
///
/// # Examples
///
/// ```
/// use take_home_pay::models::ClockTime;
///
/// let time: ClockTime = "08:00 PM".parse().unwrap();
/// assert_eq!(time.seconds_from_midnight(), 20 * 3600);
/// assert_eq!(time.to_string(), "08:00 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Wraps a time of day.
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Whole seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight())
    }
}

/// Why a string is not a [`ClockTime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    /// Leading or trailing whitespace around the time.
    #[error("unexpected whitespace around '{0}'")]
    Padded(String),

    /// The text does not match the 12-hour clock format.
    #[error(transparent)]
    Format(#[from] chrono::ParseError),
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono skips whitespace before numeric fields
        if s.trim() != s {
            return Err(ClockTimeError::Padded(s.to_string()));
        }
        Ok(Self(NaiveTime::parse_from_str(s, CLOCK_FORMAT)?))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_FORMAT))
    }
}

/// One day's work: a time window and the rate paid for it.
///
/// The times are kept as entered so that a malformed entry can still be
/// stored, displayed and reloaded into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// Start of the shift, e.g. `"09:00 AM"`.
    pub start_time: String,
    /// End of the shift, e.g. `"05:00 PM"`.
    pub end_time: String,
    /// Hourly rate in dollars.
    pub hourly_rate: Decimal,
}

impl ShiftInput {
    /// Creates a shift input from its parts.
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            hourly_rate,
        }
    }

    /// Parses both ends of the shift, or `None` if either is malformed.
    pub fn clock_times(&self) -> Option<(ClockTime, ClockTime)> {
        let start = self.start_time.parse().ok()?;
        let end = self.end_time.parse().ok()?;
        Some((start, end))
    }
}
