//! Shift record model.
//!
//! This module defines [`ShiftRecord`], the immutable input to a single pay
//! calculation. Clock times are wall-clock times of day; an end time earlier
//! than the start time denotes a shift that runs past midnight.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::clock_hours;
use crate::error::{EngineError, EngineResult};

use super::HolidayCalendar;

/// Represents one worked shift submitted for pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift (timesheet line).
    pub id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// The clock time the shift starts.
    pub start_time: NaiveTime,
    /// The clock time the shift ends; earlier than `start_time` for overnight shifts.
    pub end_time: NaiveTime,
    /// Unpaid break hours subtracted from the clock duration.
    #[serde(default)]
    pub break_unpaid_hours: Decimal,
    /// The worker's SCHADS level (1 to 5) selecting the base rate.
    pub worker_level: u8,
    /// Kilometres travelled during the shift, if any.
    #[serde(default)]
    pub travel_distance_km: Option<Decimal>,
    /// Forces public-holiday treatment when `Some(true)`.
    #[serde(default)]
    pub is_public_holiday_override: Option<bool>,
}

impl ShiftRecord {
    /// Returns true if the shift ends on the following calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Calculates the clock duration of the shift in hours.
    ///
    /// Overnight shifts wrap past midnight by adding 24 hours to the end time.
    /// A shift whose start and end are equal has zero duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use schads_engine::models::ShiftRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftRecord {
    ///     id: "shift_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     break_unpaid_hours: Decimal::ZERO,
    ///     worker_level: 2,
    ///     travel_distance_km: None,
    ///     is_public_holiday_override: None,
    /// };
    /// assert_eq!(shift.total_clock_hours(), Decimal::new(8, 0));
    /// ```
    pub fn total_clock_hours(&self) -> Decimal {
        clock_hours(self.start_time, self.end_time)
    }

    /// Calculates the worked (paid) hours: clock duration minus unpaid break.
    pub fn worked_hours(&self) -> Decimal {
        self.total_clock_hours() - self.break_unpaid_hours
    }

    /// Returns the day of the week the shift starts on.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true if the shift is paid as a public holiday.
    ///
    /// An explicit `Some(true)` override forces holiday treatment; otherwise
    /// the shift date is looked up in `calendar`. An override of `Some(false)`
    /// does not suppress a calendar holiday.
    pub fn is_public_holiday(&self, calendar: &HolidayCalendar) -> bool {
        self.is_public_holiday_override.unwrap_or(false) || calendar.is_public_holiday(self.date)
    }

    /// Rejects shifts the calculator cannot price.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when the unpaid break or travel
    /// distance is negative, or when the unpaid break is not shorter than the
    /// clock duration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.break_unpaid_hours < Decimal::ZERO {
            return Err(self.invalid("unpaid break hours cannot be negative".to_string()));
        }

        if let Some(distance) = self.travel_distance_km {
            if distance < Decimal::ZERO {
                return Err(self.invalid(format!(
                    "travel distance cannot be negative (got {} km)",
                    distance
                )));
            }
        }

        let clock_hours = self.total_clock_hours();
        if self.break_unpaid_hours >= clock_hours {
            return Err(self.invalid(format!(
                "unpaid break of {}h must be shorter than the {}h shift",
                self.break_unpaid_hours.normalize(),
                clock_hours.normalize()
            )));
        }

        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidShift {
            shift_id: self.id.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicHoliday;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn make_shift(date: &str, start: &str, end: &str, break_hours: &str) -> ShiftRecord {
        ShiftRecord {
            id: "shift_001".to_string(),
            date: make_date(date),
            start_time: make_time(start),
            end_time: make_time(end),
            break_unpaid_hours: dec(break_hours),
            worker_level: 3,
            travel_distance_km: None,
            is_public_holiday_override: None,
        }
    }

    #[test]
    fn test_day_shift_clock_hours() {
        let shift = make_shift("2025-03-12", "10:00", "14:00", "0");
        assert_eq!(shift.total_clock_hours(), dec("4"));
        assert!(!shift.crosses_midnight());
    }

    #[test]
    fn test_worked_hours_subtracts_break() {
        let shift = make_shift("2025-03-12", "10:00", "14:00", "0.5");
        assert_eq!(shift.worked_hours(), dec("3.5"));
    }

    #[test]
    fn test_overnight_shift_wraps_past_midnight() {
        let shift = make_shift("2025-03-12", "22:00", "06:00", "0");
        assert!(shift.crosses_midnight());
        assert_eq!(shift.total_clock_hours(), dec("8"));
    }

    #[test]
    fn test_partial_hours() {
        let shift = make_shift("2025-03-12", "09:15", "17:45", "0.5");
        assert_eq!(shift.total_clock_hours(), dec("8.5"));
        assert_eq!(shift.worked_hours(), dec("8.0"));
    }

    #[test]
    fn test_equal_start_and_end_is_zero_duration() {
        let shift = make_shift("2025-03-12", "09:00", "09:00", "0");
        assert_eq!(shift.total_clock_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_day_of_week() {
        // 2025-03-15 is a Saturday
        let shift = make_shift("2025-03-15", "09:00", "12:00", "0");
        assert_eq!(shift.day_of_week(), Weekday::Sat);
    }

    #[test]
    fn test_validate_accepts_valid_shift() {
        let mut shift = make_shift("2025-03-12", "10:00", "14:00", "0.5");
        shift.travel_distance_km = Some(dec("8"));
        assert!(shift.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_distance() {
        let mut shift = make_shift("2025-03-12", "10:00", "14:00", "0");
        shift.travel_distance_km = Some(dec("-1"));

        match shift.validate() {
            Err(EngineError::InvalidShift { shift_id, message }) => {
                assert_eq!(shift_id, "shift_001");
                assert!(message.contains("travel distance"));
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_break() {
        let shift = make_shift("2025-03-12", "10:00", "14:00", "-0.5");
        assert!(matches!(
            shift.validate(),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_break_equal_to_duration() {
        let shift = make_shift("2025-03-12", "10:00", "14:00", "4");
        match shift.validate() {
            Err(EngineError::InvalidShift { message, .. }) => {
                assert_eq!(message, "unpaid break of 4h must be shorter than the 4h shift");
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_duration_shift() {
        let shift = make_shift("2025-03-12", "09:00", "09:00", "0");
        assert!(shift.validate().is_err());
    }

    #[test]
    fn test_public_holiday_override_forces_holiday() {
        let mut shift = make_shift("2025-03-12", "08:00", "16:00", "1");
        let calendar = HolidayCalendar::default();
        assert!(!shift.is_public_holiday(&calendar));

        shift.is_public_holiday_override = Some(true);
        assert!(shift.is_public_holiday(&calendar));
    }

    #[test]
    fn test_calendar_holiday_not_suppressed_by_false_override() {
        let mut shift = make_shift("2025-12-25", "08:00", "16:00", "1");
        shift.is_public_holiday_override = Some(false);
        let calendar = HolidayCalendar::new(vec![PublicHoliday {
            date: make_date("2025-12-25"),
            name: "Christmas Day".to_string(),
            region: "national".to_string(),
        }]);
        assert!(shift.is_public_holiday(&calendar));
    }

    #[test]
    fn test_shift_deserialization_accepts_short_times() {
        let json = r#"{
            "id": "shift_001",
            "date": "2025-03-12",
            "start_time": "10:00",
            "end_time": "14:00",
            "break_unpaid_hours": "0.5",
            "worker_level": 3,
            "travel_distance_km": "8"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.start_time, make_time("10:00"));
        assert_eq!(shift.break_unpaid_hours, dec("0.5"));
        assert_eq!(shift.travel_distance_km, Some(dec("8")));
        assert_eq!(shift.is_public_holiday_override, None);
    }

    #[test]
    fn test_shift_deserialization_rejects_malformed_time() {
        let json = r#"{
            "id": "shift_001",
            "date": "2025-03-12",
            "start_time": "ten o'clock",
            "end_time": "14:00",
            "worker_level": 3
        }"#;

        assert!(serde_json::from_str::<ShiftRecord>(json).is_err());
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = make_shift("2025-03-12", "22:00", "06:00", "0.5");
        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }
}
