//! Core data models for the SCHADS pay engine.
//!
//! This module contains the domain models used throughout the engine.

mod calculation_result;
mod holiday;
mod shift;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BreakdownCategory, PayBreakdownLine,
    PayCalculationResult, TimesheetSummary,
};
pub use holiday::{HolidayCalendar, PublicHoliday};
pub use shift::ShiftRecord;
