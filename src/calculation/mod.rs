//! Calculation logic for the SCHADS pay engine.
//!
//! This module contains the functions that price a shift: day detection,
//! time-period splitting, base rate lookup, per-category penalty pay,
//! travel and meal allowances, GST, and the [`calculate_pay`] composition
//! that assembles them into an itemised, audited result.

mod allowances;
mod base_rate;
mod day_detection;
mod gst;
mod pay;
mod penalty;
mod time_periods;

pub use allowances::{
    AllowanceResult, MEAL_ALLOWANCE_THRESHOLD_HOURS, calculate_meal_allowance,
    calculate_travel_allowance,
};
pub use base_rate::{
    BaseRateLookupResult, FALLBACK_WORKER_LEVEL, UNKNOWN_WORKER_LEVEL_WARNING, get_base_rate,
};
pub use day_detection::{DayType, get_day_type};
pub use gst::{GstResult, apply_gst};
pub use pay::{
    OVERTIME_NOT_CALCULATED_WARNING, calculate_pay, calculate_timesheet, calculate_timesheet_with,
};
pub use penalty::{PeriodKind, PeriodPayResult, calculate_period_pay};
pub use time_periods::{
    EVENING_START_HOUR, MIXED_REGULAR_SHARE, NIGHT_START_HOUR, REGULAR_START_HOUR, TimeBand,
    TimePeriodHours, classify_weekday_band, clock_hours, hour_of_day, split_shift,
    split_time_periods,
};
