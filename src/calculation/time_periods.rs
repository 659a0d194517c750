//! Time-period splitting.
//!
//! Partitions a shift's worked hours into the five mutually exclusive pay
//! categories: regular, evening, night, weekend and public holiday.
//!
//! The split is a whole-shift classification, not an interval overlap:
//!
//! 1. A public holiday puts every worked hour in the public-holiday bucket.
//! 2. Otherwise a Saturday or Sunday puts every worked hour in the weekend bucket.
//! 3. Otherwise the shift's start and end hour select a single weekday band.
//!    A shift that fits no single band is split 70/30 between regular and
//!    evening regardless of where its hours actually fall. This approximation
//!    changes pay for any shift spanning a band boundary (e.g. 17:00-19:00).
//!
//! For a shift that wraps past midnight the end hour is compared as
//! `end + 24`, not as an hour of day. A 20:00-02:00 shift is therefore mixed
//! (70/30 regular/evening), not night as an "ends at or before 06:00" test on
//! the end's clock hour would make it. Every late-evening overnight shift is
//! paid under this reading.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{HolidayCalendar, ShiftRecord};

use super::{DayType, get_day_type};

/// Hour of day from which weekday work counts as regular.
pub const REGULAR_START_HOUR: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Hour of day at which weekday regular time ends and evening begins.
pub const EVENING_START_HOUR: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// Hour of day at which weekday evening ends and night begins.
pub const NIGHT_START_HOUR: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Share of a multi-band weekday shift paid as regular time (0.7).
pub const MIXED_REGULAR_SHARE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The rule that classified a shift's hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// All hours on a public holiday.
    PublicHoliday,
    /// All hours on a Saturday or Sunday.
    Weekend,
    /// Weekday shift within 06:00-18:00.
    Regular,
    /// Weekday shift within 18:00-22:00.
    Evening,
    /// Weekday shift starting at or after 22:00 or ending by 06:00.
    Night,
    /// Weekday shift spanning bands, split 70/30 regular/evening.
    Mixed,
}

impl std::fmt::Display for TimeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TimeBand::PublicHoliday => "public holiday",
            TimeBand::Weekend => "weekend",
            TimeBand::Regular => "regular",
            TimeBand::Evening => "evening",
            TimeBand::Night => "night",
            TimeBand::Mixed => "mixed",
        };
        f.write_str(label)
    }
}

/// Worked hours partitioned by pay category.
///
/// The five hour values are non-negative and sum to the gross worked hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriodHours {
    /// The rule that produced this split.
    pub band: TimeBand,
    /// Hours at the base rate.
    pub regular: Decimal,
    /// Weekday evening hours.
    pub evening: Decimal,
    /// Weekday night hours.
    pub night: Decimal,
    /// Saturday or Sunday hours.
    pub weekend: Decimal,
    /// Public-holiday hours.
    pub public_holiday: Decimal,
}

impl TimePeriodHours {
    fn all_in(band: TimeBand, hours: Decimal) -> Self {
        let mut split = Self {
            band,
            regular: Decimal::ZERO,
            evening: Decimal::ZERO,
            night: Decimal::ZERO,
            weekend: Decimal::ZERO,
            public_holiday: Decimal::ZERO,
        };
        match band {
            TimeBand::PublicHoliday => split.public_holiday = hours,
            TimeBand::Weekend => split.weekend = hours,
            TimeBand::Regular => split.regular = hours,
            TimeBand::Evening => split.evening = hours,
            TimeBand::Night => split.night = hours,
            TimeBand::Mixed => {
                split.regular = hours * MIXED_REGULAR_SHARE;
                split.evening = hours - split.regular;
            }
        }
        split
    }

    /// Returns the sum of all five categories.
    pub fn total(&self) -> Decimal {
        self.regular + self.evening + self.night + self.weekend + self.public_holiday
    }
}

/// Returns the fractional hour of day for a clock time (17:30 is 17.5).
pub fn hour_of_day(time: NaiveTime) -> Decimal {
    Decimal::from(time.num_seconds_from_midnight()) / Decimal::from(3600)
}

/// Returns the clock duration between two times of day in hours.
///
/// An end earlier than the start wraps past midnight.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::clock_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
/// assert_eq!(clock_hours(start, end), Decimal::new(65, 1));
/// ```
pub fn clock_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let start_hour = hour_of_day(start);
    let mut end_hour = hour_of_day(end);
    if end_hour < start_hour {
        end_hour += HOURS_PER_DAY;
    }
    end_hour - start_hour
}

/// Classifies a weekday shift into a single band by its start and end hour.
///
/// The end hour is shifted by 24 for shifts that wrap past midnight, so only
/// a shift starting at or after 22:00 or ending by 06:00 on its own day is
/// night.
pub fn classify_weekday_band(start: NaiveTime, end: NaiveTime) -> TimeBand {
    let start_hour = hour_of_day(start);
    let mut end_hour = hour_of_day(end);
    if end_hour < start_hour {
        end_hour += HOURS_PER_DAY;
    }

    if start_hour >= REGULAR_START_HOUR && end_hour <= EVENING_START_HOUR {
        TimeBand::Regular
    } else if start_hour >= EVENING_START_HOUR && end_hour <= NIGHT_START_HOUR {
        TimeBand::Evening
    } else if start_hour >= NIGHT_START_HOUR || end_hour <= REGULAR_START_HOUR {
        TimeBand::Night
    } else {
        TimeBand::Mixed
    }
}

/// Splits a shift's worked hours into pay categories.
///
/// # Arguments
///
/// * `date` - The shift date (day of week)
/// * `start` - Clock start time
/// * `end` - Clock end time; earlier than `start` for overnight shifts
/// * `break_unpaid_hours` - Unpaid break subtracted from the clock duration
/// * `is_public_holiday` - Whether the shift is paid as a public holiday
///
/// Inputs are assumed validated: the break is shorter than the shift.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::{split_time_periods, TimeBand};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // Wednesday 10:00-14:00 with a half-hour break
/// let split = split_time_periods(
///     NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///     Decimal::new(5, 1),
///     false,
/// );
/// assert_eq!(split.band, TimeBand::Regular);
/// assert_eq!(split.regular, Decimal::new(35, 1));
/// assert_eq!(split.total(), Decimal::new(35, 1));
/// ```
pub fn split_time_periods(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    break_unpaid_hours: Decimal,
    is_public_holiday: bool,
) -> TimePeriodHours {
    let gross_hours = clock_hours(start, end) - break_unpaid_hours;

    let band = if is_public_holiday {
        TimeBand::PublicHoliday
    } else if get_day_type(date) != DayType::Weekday {
        TimeBand::Weekend
    } else {
        classify_weekday_band(start, end)
    };

    debug!(%date, %start, %end, %band, hours = %gross_hours, "Classified shift hours");

    TimePeriodHours::all_in(band, gross_hours)
}

/// Splits a [`ShiftRecord`], resolving public-holiday status against `calendar`.
pub fn split_shift(shift: &ShiftRecord, calendar: &HolidayCalendar) -> TimePeriodHours {
    split_time_periods(
        shift.date,
        shift.start_time,
        shift.end_time,
        shift.break_unpaid_hours,
        shift.is_public_holiday(calendar),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn t(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    // 2025-08-13 is a Wednesday
    fn weekday_split(start: &str, end: &str, break_hours: &str) -> TimePeriodHours {
        split_time_periods(make_date("2025-08-13"), t(start), t(end), dec(break_hours), false)
    }

    #[test]
    fn test_hour_of_day_is_fractional() {
        assert_eq!(hour_of_day(t("17:30")), dec("17.5"));
        assert_eq!(hour_of_day(t("00:00")), Decimal::ZERO);
    }

    #[test]
    fn test_clock_hours_same_day() {
        assert_eq!(clock_hours(t("10:00"), t("14:00")), dec("4"));
    }

    #[test]
    fn test_clock_hours_wraps_midnight() {
        assert_eq!(clock_hours(t("22:00"), t("06:00")), dec("8"));
    }

    #[test]
    fn test_weekday_daytime_is_regular() {
        let split = weekday_split("10:00", "14:00", "0.5");
        assert_eq!(split.band, TimeBand::Regular);
        assert_eq!(split.regular, dec("3.5"));
        assert_eq!(split.evening, Decimal::ZERO);
    }

    #[test]
    fn test_regular_band_boundaries_are_inclusive() {
        assert_eq!(classify_weekday_band(t("06:00"), t("18:00")), TimeBand::Regular);
    }

    #[test]
    fn test_weekday_evening() {
        let split = weekday_split("19:00", "21:00", "0");
        assert_eq!(split.band, TimeBand::Evening);
        assert_eq!(split.evening, dec("2"));
        assert_eq!(split.regular, Decimal::ZERO);
    }

    #[test]
    fn test_evening_band_boundaries_are_inclusive() {
        assert_eq!(classify_weekday_band(t("18:00"), t("22:00")), TimeBand::Evening);
    }

    #[test]
    fn test_overnight_from_22_is_night() {
        let split = weekday_split("22:00", "06:00", "0");
        assert_eq!(split.band, TimeBand::Night);
        assert_eq!(split.night, dec("8"));
    }

    #[test]
    fn test_early_morning_ending_by_six_is_night() {
        let split = weekday_split("02:00", "05:30", "0");
        assert_eq!(split.band, TimeBand::Night);
        assert_eq!(split.night, dec("3.5"));
    }

    #[test]
    fn test_late_start_before_midnight_is_night() {
        assert_eq!(classify_weekday_band(t("23:00"), t("01:00")), TimeBand::Night);
    }

    #[test]
    fn test_spanning_shift_splits_seventy_thirty() {
        // 17:00-19:00 crosses the regular/evening boundary
        let split = weekday_split("17:00", "19:00", "0");
        assert_eq!(split.band, TimeBand::Mixed);
        assert_eq!(split.regular, dec("1.4"));
        assert_eq!(split.evening, dec("0.6"));
        assert_eq!(split.night, Decimal::ZERO);
    }

    #[test]
    fn test_evening_into_night_still_splits_regular_evening() {
        // Not a true interval split: evening/night hours are paid 70/30 regular/evening
        let split = weekday_split("18:00", "23:00", "0");
        assert_eq!(split.band, TimeBand::Mixed);
        assert_eq!(split.regular, dec("3.5"));
        assert_eq!(split.evening, dec("1.5"));
        assert_eq!(split.night, Decimal::ZERO);
    }

    #[test]
    fn test_overnight_from_evening_is_mixed() {
        let split = weekday_split("20:00", "02:00", "0.5");
        assert_eq!(split.band, TimeBand::Mixed);
        assert_eq!(split.total(), dec("5.5"));
    }

    #[test]
    fn test_saturday_is_all_weekend() {
        // 2025-08-16 is a Saturday
        let split = split_time_periods(
            make_date("2025-08-16"),
            t("19:00"),
            t("23:00"),
            Decimal::ZERO,
            false,
        );
        assert_eq!(split.band, TimeBand::Weekend);
        assert_eq!(split.weekend, dec("4"));
        assert_eq!(split.evening, Decimal::ZERO);
    }

    #[test]
    fn test_sunday_is_all_weekend() {
        let split = split_time_periods(
            make_date("2025-08-17"),
            t("09:00"),
            t("12:00"),
            Decimal::ZERO,
            false,
        );
        assert_eq!(split.band, TimeBand::Weekend);
        assert_eq!(split.weekend, dec("3"));
    }

    #[test]
    fn test_public_holiday_dominates_weekend_and_clock() {
        let split = split_time_periods(
            make_date("2025-08-16"),
            t("22:00"),
            t("06:00"),
            dec("1"),
            true,
        );
        assert_eq!(split.band, TimeBand::PublicHoliday);
        assert_eq!(split.public_holiday, dec("7"));
        assert_eq!(split.weekend, Decimal::ZERO);
        assert_eq!(split.night, Decimal::ZERO);
    }

    #[test]
    fn test_split_shift_uses_calendar() {
        let shift = ShiftRecord {
            id: "shift_001".to_string(),
            date: make_date("2025-12-25"),
            start_time: t("08:00"),
            end_time: t("16:00"),
            break_unpaid_hours: dec("1"),
            worker_level: 1,
            travel_distance_km: None,
            is_public_holiday_override: None,
        };
        let calendar = HolidayCalendar::from_dates([make_date("2025-12-25")]);

        let split = split_shift(&shift, &calendar);
        assert_eq!(split.band, TimeBand::PublicHoliday);
        assert_eq!(split.public_holiday, dec("7"));
    }

    #[test]
    fn test_split_sums_to_gross_hours() {
        for (start, end) in [
            ("06:00", "18:00"),
            ("17:00", "19:00"),
            ("09:10", "21:50"),
            ("21:00", "07:00"),
        ] {
            let split = weekday_split(start, end, "0.25");
            let expected = clock_hours(t(start), t(end)) - dec("0.25");
            assert_eq!(split.total(), expected, "{}-{}", start, end);
        }
    }

    #[test]
    fn test_time_band_serialization() {
        assert_eq!(
            serde_json::to_string(&TimeBand::PublicHoliday).unwrap(),
            "\"public_holiday\""
        );
        assert_eq!(format!("{}", TimeBand::Mixed), "mixed");
    }
}
