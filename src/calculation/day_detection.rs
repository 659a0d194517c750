//! Day detection logic.
//!
//! Determines whether a shift date falls on a weekday, a Saturday or a
//! Sunday. Saturday and Sunday share one weekend hour bucket but attract
//! different penalty multipliers.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for penalty rate calculation.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-08-16 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()), DayType::Saturday);
/// // 2025-08-17 is a Sunday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 8, 17).unwrap()), DayType::Sunday);
/// // 2025-08-13 is a Wednesday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 8, 13).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}
