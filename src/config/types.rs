//! Configuration types for SCHADS pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

/// The lowest SCHADS worker level the rate tables cover.
pub const MIN_WORKER_LEVEL: u8 = 1;

/// The highest SCHADS worker level the rate tables cover.
pub const MAX_WORKER_LEVEL: u8 = 5;

/// Metadata about the award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardMetadata {
    /// The Fair Work award code (e.g., "MA000100").
    pub code: String,
    /// The human-readable name of the award.
    pub name: String,
    /// URL to the official award documentation.
    pub source_url: String,
}

/// Penalty multipliers applied to the base hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyMultipliers {
    /// Multiplier for weekday evening hours.
    pub evening: Decimal,
    /// Multiplier for weekday night hours.
    pub night: Decimal,
    /// Multiplier for Saturday hours.
    pub saturday: Decimal,
    /// Multiplier for Sunday hours.
    pub sunday: Decimal,
    /// Multiplier for public-holiday hours.
    pub public_holiday: Decimal,
    /// Multiplier for overtime hours. Carried but not yet applied.
    pub overtime: Decimal,
}

/// Flat and distance-based allowance rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceRates {
    /// Travel allowance per kilometre.
    pub travel_per_km: Decimal,
    /// Meal allowance paid once for shifts over five worked hours.
    pub meal: Decimal,
    /// Sleepover allowance. Published on `GET /rates`, not applied per shift.
    pub sleepover: Decimal,
    /// Broken shift allowance. Published on `GET /rates`, not applied per shift.
    pub broken_shift: Decimal,
}

/// One award year's rates, keyed by award version.
///
/// A rate table is injected into every calculation rather than compiled in,
/// so an award-rate change is a configuration change.
///
/// # Example
///
/// ```
/// use schads_engine::config::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let yaml = r#"
/// award_version: "2025-07-01"
/// effective_date: 2025-07-01
/// base_rates: { 1: "38.50", 2: "42.00", 3: "45.50", 4: "48.75", 5: "52.00" }
/// penalties:
///   evening: "1.25"
///   night: "1.50"
///   saturday: "1.25"
///   sunday: "1.50"
///   public_holiday: "2.00"
///   overtime: "1.50"
/// allowances:
///   travel_per_km: "0.85"
///   meal: "15.50"
///   sleepover: "55.00"
///   broken_shift: "19.25"
/// gst_rate: "0.10"
/// "#;
///
/// let table = RateTable::from_yaml_str(yaml).unwrap();
/// assert_eq!(table.base_rate(3), Some(Decimal::from_str("45.50").unwrap()));
/// assert!(table.public_holidays.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// The award version key (e.g., "2025-07-01").
    pub award_version: String,
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Base hourly rate by worker level.
    pub base_rates: BTreeMap<u8, Decimal>,
    /// Penalty multipliers.
    pub penalties: PenaltyMultipliers,
    /// Allowance rates.
    pub allowances: AllowanceRates,
    /// GST rate applied to gross pay (e.g., 0.10).
    pub gst_rate: Decimal,
    /// Public holidays observed under this table.
    #[serde(default)]
    pub public_holidays: HolidayCalendar,
}

impl RateTable {
    /// Parses and validates a rate table from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let table: RateTable =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        table.validate()?;
        Ok(table)
    }

    /// Returns the base hourly rate for a worker level, if the table has one.
    pub fn base_rate(&self, level: u8) -> Option<Decimal> {
        self.base_rates.get(&level).copied()
    }

    /// Checks that the table holds values the calculator can use.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateTable`] when a level lies outside
    /// 1..=5, a rate or multiplier is negative, or the GST rate is not a
    /// fraction between 0 and 1.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_rates.is_empty() {
            return Err(self.invalid("no base rates defined".to_string()));
        }

        for (level, rate) in &self.base_rates {
            if !(MIN_WORKER_LEVEL..=MAX_WORKER_LEVEL).contains(level) {
                return Err(self.invalid(format!(
                    "worker level {} is outside {}..={}",
                    level, MIN_WORKER_LEVEL, MAX_WORKER_LEVEL
                )));
            }
            if *rate < Decimal::ZERO {
                return Err(self.invalid(format!("base rate for level {} is negative", level)));
            }
        }

        let p = &self.penalties;
        let multipliers = [
            ("evening", p.evening),
            ("night", p.night),
            ("saturday", p.saturday),
            ("sunday", p.sunday),
            ("public_holiday", p.public_holiday),
            ("overtime", p.overtime),
        ];
        if let Some((name, _)) = multipliers.iter().find(|(_, m)| *m < Decimal::ZERO) {
            return Err(self.invalid(format!("{} multiplier is negative", name)));
        }

        let a = &self.allowances;
        let allowances = [
            ("travel_per_km", a.travel_per_km),
            ("meal", a.meal),
            ("sleepover", a.sleepover),
            ("broken_shift", a.broken_shift),
        ];
        if let Some((name, _)) = allowances.iter().find(|(_, r)| *r < Decimal::ZERO) {
            return Err(self.invalid(format!("{} allowance is negative", name)));
        }

        if self.gst_rate < Decimal::ZERO || self.gst_rate > Decimal::ONE {
            return Err(self.invalid(format!(
                "gst_rate {} must be between 0 and 1",
                self.gst_rate
            )));
        }

        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidRateTable {
            award_version: self.award_version.clone(),
            message,
        }
    }
}

/// Award configuration loaded from YAML files.
///
/// Aggregates the award metadata and every rate table found, sorted by
/// effective date (oldest first).
#[derive(Debug, Clone)]
pub struct AwardConfig {
    metadata: AwardMetadata,
    rate_tables: Vec<RateTable>,
}

impl AwardConfig {
    /// Creates a new AwardConfig from its component parts.
    pub fn new(metadata: AwardMetadata, rate_tables: Vec<RateTable>) -> Self {
        let mut sorted = rate_tables;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rate_tables: sorted,
        }
    }

    /// Returns the award metadata.
    pub fn award(&self) -> &AwardMetadata {
        &self.metadata
    }

    /// Returns all rate tables, oldest first.
    pub fn rate_tables(&self) -> &[RateTable] {
        &self.rate_tables
    }
}
