//! Shift duration calculation.
//!
//! Turns a pair of clock times into paid hours. Shifts whose end is not
//! after their start run past midnight. Long shifts lose an unpaid break.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BreakPolicy;
use crate::models::ClockTime;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: i64 = 60 * 60;

/// The paid hours of a shift, or a marker that its times could not be read.
///
/// An unparseable shift is paid as zero hours; it is never an error.
///
/// # Example
///
/// ```
/// use take_home_pay::calculation::{calculate_hours, ShiftHours};
/// use take_home_pay::config::BreakPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = BreakPolicy::default();
/// assert_eq!(calculate_hours("abc", "05:00 PM", &policy), ShiftHours::Unparseable);
/// assert_eq!(calculate_hours("abc", "05:00 PM", &policy).hours(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "hours", rename_all = "snake_case")]
pub enum ShiftHours {
    /// Paid hours after any break deduction.
    Worked(Decimal),
    /// One of the times did not match the `HH:MM AM|PM` format.
    Unparseable,
}

impl ShiftHours {
    /// Paid hours, with unparseable input counting as zero.
    pub fn hours(&self) -> Decimal {
        match self {
            ShiftHours::Worked(hours) => *hours,
            ShiftHours::Unparseable => Decimal::ZERO,
        }
    }

    /// Returns true if the shift times could not be parsed.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, ShiftHours::Unparseable)
    }
}

/// Whole seconds from `start` to `end`, wrapping past midnight when `end`
/// is not strictly after `start`.
///
/// Equal times therefore describe a full 24-hour shift.
pub fn shift_span_seconds(start: ClockTime, end: ClockTime) -> i64 {
    let start = start.seconds_from_midnight();
    let mut end = end.seconds_from_midnight();
    if end <= start {
        end += SECONDS_PER_DAY;
    }
    end - start
}

/// Calculates the paid hours between two 12-hour clock times.
///
/// # Arguments
///
/// * `start` - Shift start, e.g. `"09:00 AM"`
/// * `end` - Shift end, e.g. `"05:00 PM"`
/// * `policy` - The unpaid break rule applied to long shifts
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::calculate_hours;
/// use take_home_pay::config::BreakPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = BreakPolicy::default();
///
/// // 8 hours less a 30 minute break
/// let day = calculate_hours("09:00 AM", "05:00 PM", &policy);
/// assert_eq!(day.hours(), Decimal::from_str("7.5").unwrap());
///
/// // Crosses midnight
/// let night = calculate_hours("10:00 PM", "02:00 AM", &policy);
/// assert_eq!(night.hours(), Decimal::from(4));
/// ```
pub fn calculate_hours(start: &str, end: &str, policy: &BreakPolicy) -> ShiftHours {
    let (Ok(start), Ok(end)) = (start.parse::<ClockTime>(), end.parse::<ClockTime>()) else {
        return ShiftHours::Unparseable;
    };

    let hours = Decimal::from(shift_span_seconds(start, end)) / Decimal::from(SECONDS_PER_HOUR);

    if hours > policy.threshold_hours {
        ShiftHours::Worked(hours - policy.deduction_hours)
    } else {
        ShiftHours::Worked(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hours(start: &str, end: &str) -> ShiftHours {
        calculate_hours(start, end, &BreakPolicy::default())
    }

    fn no_break() -> BreakPolicy {
        BreakPolicy {
            threshold_hours: dec("24"),
            deduction_hours: Decimal::ZERO,
        }
    }

    #[test]
    fn test_nine_to_five_without_break_is_eight_hours() {
        let result = calculate_hours("09:00 AM", "05:00 PM", &no_break());
        assert_eq!(result, ShiftHours::Worked(dec("8")));
    }

    #[test]
    fn test_nine_to_five_with_break_is_seven_and_a_half() {
        assert_eq!(hours("09:00 AM", "05:00 PM"), ShiftHours::Worked(dec("7.5")));
    }

    #[test]
    fn test_overnight_shift_is_eight_hours_before_break() {
        let result = calculate_hours("10:00 PM", "06:00 AM", &no_break());
        assert_eq!(result.hours(), dec("8"));
        assert_eq!(hours("10:00 PM", "06:00 AM").hours(), dec("7.5"));
    }

    #[test]
    fn test_exactly_six_hours_keeps_break() {
        // The break only applies strictly above the threshold.
        assert_eq!(hours("09:00 AM", "03:00 PM").hours(), dec("6"));
    }

    #[test]
    fn test_just_over_six_hours_loses_break() {
        // 6h15m - 0.5h
        assert_eq!(hours("09:00 AM", "03:15 PM").hours(), dec("5.75"));
    }

    #[test]
    fn test_equal_times_are_a_full_day() {
        assert_eq!(
            calculate_hours("09:00 AM", "09:00 AM", &no_break()).hours(),
            dec("24")
        );
    }

    #[test]
    fn test_minute_precision() {
        // 1h40m
        let result = hours("11:20 AM", "01:00 PM").hours();
        assert_eq!(result, Decimal::from(100) / Decimal::from(60));
    }

    #[test]
    fn test_malformed_start_is_unparseable() {
        let result = hours("abc", "05:00 PM");
        assert!(result.is_unparseable());
        assert_eq!(result.hours(), Decimal::ZERO);
    }

    #[test]
    fn test_malformed_end_is_unparseable() {
        assert!(hours("09:00 AM", "5pm").is_unparseable());
    }

    #[test]
    fn test_bare_hour_with_colon_is_unparseable() {
        assert!(hours("09: AM", "05:00 PM").is_unparseable());
    }

    #[test]
    fn test_padded_time_is_unparseable() {
        let result = hours(" 09:00 AM", "05:00 PM");
        assert!(result.is_unparseable());
        assert_eq!(result.hours(), Decimal::ZERO);
        assert!(hours("09:00 AM", "05:00 PM ").is_unparseable());
    }

    #[test]
    fn test_span_seconds_wraps_midnight() {
        let start = ClockTime::from_str("11:00 PM").unwrap();
        let end = ClockTime::from_str("01:30 AM").unwrap();
        assert_eq!(shift_span_seconds(start, end), 2 * 3600 + 30 * 60);
    }

    #[test]
    fn test_shift_hours_serialization() {
        let worked = serde_json::to_value(ShiftHours::Worked(dec("7.5"))).unwrap();
        assert_eq!(worked["status"], "worked");
        assert_eq!(worked["hours"], "7.5");

        let bad = serde_json::to_value(ShiftHours::Unparseable).unwrap();
        assert_eq!(bad["status"], "unparseable");
    }
}
