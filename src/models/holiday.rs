//! Public holiday and holiday calendar models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayCalendar`] types.
//! A calendar travels with each rate table so that holiday treatment follows
//! the award year being applied rather than a compiled-in date list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single public holiday.
///
/// Holidays are tracked per region to support state-specific holidays in
/// Australia.
///
/// # Example
///
/// ```
/// use schads_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 1, 27).unwrap(),
///     name: "Australia Day (observed)".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Anzac Day").
    pub name: String,
    /// The region where this holiday applies (e.g., "national", "VIC", "NSW").
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "national".to_string()
}

/// A set of public holidays consulted when classifying shift hours.
///
/// Serialises as a plain list of [`PublicHoliday`] entries.
///
/// # Example
///
/// ```
/// use schads_engine::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     region: "national".to_string(),
/// }]);
///
/// assert!(calendar.is_public_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
/// assert!(!calendar.is_public_holiday(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self { holidays }
    }

    /// Creates a calendar from bare dates, naming each entry generically.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            holidays: dates
                .into_iter()
                .map(|date| PublicHoliday {
                    date,
                    name: "Public holiday".to_string(),
                    region: default_region(),
                })
                .collect(),
        }
    }

    /// Checks if a given date is a public holiday in this calendar.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Returns all holidays in the calendar.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Returns the number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
