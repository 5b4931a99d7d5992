//! Pay period and weekday models.
//!
//! This module contains the [`PayPeriod`] selector that scales a week's pay
//! into the reporting period, and the [`DayOfWeek`] values a shift can be
//! worked on.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of weeks in a year used to annualise income.
pub const WEEKS_PER_YEAR: u32 = 52;

/// The period a pay breakdown is reported for.
///
/// Each period is a whole number of weeks; a month counts as four.
///
/// # Example
///
/// ```
/// use take_home_pay::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// assert_eq!(PayPeriod::Fortnightly.multiplier(), 2);
/// assert_eq!(PayPeriod::Monthly.periods_per_year(), Decimal::from(13));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// One week.
    #[default]
    Weekly,
    /// Two weeks.
    Fortnightly,
    /// Four weeks.
    Monthly,
    /// Fifty-two weeks.
    Yearly,
}

impl PayPeriod {
    /// All periods, in the order the form lists them.
    pub const ALL: [PayPeriod; 4] = [
        PayPeriod::Weekly,
        PayPeriod::Fortnightly,
        PayPeriod::Monthly,
        PayPeriod::Yearly,
    ];

    /// Number of weeks in the period.
    pub fn multiplier(self) -> u32 {
        match self {
            PayPeriod::Weekly => 1,
            PayPeriod::Fortnightly => 2,
            PayPeriod::Monthly => 4,
            PayPeriod::Yearly => WEEKS_PER_YEAR,
        }
    }

    /// How many of these periods make up a year (`52 / multiplier`).
    pub fn periods_per_year(self) -> Decimal {
        Decimal::from(WEEKS_PER_YEAR) / Decimal::from(self.multiplier())
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayPeriod::Weekly => write!(f, "Weekly"),
            PayPeriod::Fortnightly => write!(f, "Fortnightly"),
            PayPeriod::Monthly => write!(f, "Monthly"),
            PayPeriod::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A day of the week a shift can be worked on.
///
/// Ordered Monday first so that sets of days keep calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}
