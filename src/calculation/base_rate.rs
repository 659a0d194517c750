//! Base rate lookup functionality.
//!
//! This module resolves a worker level to its base hourly rate. A level the
//! rate table does not know falls back to the level-2 rate; the fallback is
//! logged and recorded as an audit warning rather than failing the shift.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning};

/// The worker level whose rate is used when the requested level is unknown.
pub const FALLBACK_WORKER_LEVEL: u8 = 2;

/// Audit warning code recorded when the fallback level is applied.
pub const UNKNOWN_WORKER_LEVEL_WARNING: &str = "UNKNOWN_WORKER_LEVEL";

/// The result of a base rate lookup.
#[derive(Debug, Clone)]
pub struct BaseRateLookupResult {
    /// The determined base hourly rate.
    pub rate: Decimal,
    /// The level whose rate was applied.
    pub applied_level: u8,
    /// Present when the requested level was unknown and the fallback applied.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Determines the base hourly rate for a worker level.
///
/// # Errors
///
/// Returns [`EngineError::RateNotFound`] only when neither the requested
/// level nor the fallback level has a rate in `table`.
///
/// # Examples
///
/// ```no_run
/// use schads_engine::calculation::get_base_rate;
/// use schads_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/schads").unwrap();
/// let table = loader.rate_table("2025-07-01").unwrap();
///
/// let result = get_base_rate(3, table, 1).unwrap();
/// assert_eq!(result.rate, Decimal::from_str("45.50").unwrap());
/// assert!(result.warning.is_none());
/// ```
pub fn get_base_rate(
    worker_level: u8,
    table: &RateTable,
    step_number: u32,
) -> EngineResult<BaseRateLookupResult> {
    if let Some(rate) = table.base_rate(worker_level) {
        let audit_step = AuditStep {
            step_number,
            rule_id: "base_rate_lookup".to_string(),
            rule_name: "Base Rate Lookup".to_string(),
            input: serde_json::json!({
                "worker_level": worker_level,
                "award_version": table.award_version
            }),
            output: serde_json::json!({
                "rate": rate.to_string(),
                "applied_level": worker_level
            }),
            reasoning: format!(
                "Level {} rate under award version {}: ${}",
                worker_level, table.award_version, rate
            ),
        };

        return Ok(BaseRateLookupResult {
            rate,
            applied_level: worker_level,
            warning: None,
            audit_step,
        });
    }

    let rate = table
        .base_rate(FALLBACK_WORKER_LEVEL)
        .ok_or_else(|| EngineError::RateNotFound {
            level: FALLBACK_WORKER_LEVEL,
            award_version: table.award_version.clone(),
        })?;

    warn!(
        worker_level,
        fallback_level = FALLBACK_WORKER_LEVEL,
        award_version = %table.award_version,
        "Unknown worker level, applying fallback rate"
    );

    let warning = AuditWarning {
        code: UNKNOWN_WORKER_LEVEL_WARNING.to_string(),
        message: format!(
            "Worker level {} is not in award version {}; level {} rate applied",
            worker_level, table.award_version, FALLBACK_WORKER_LEVEL
        ),
        severity: "medium".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_rate_lookup".to_string(),
        rule_name: "Base Rate Lookup".to_string(),
        input: serde_json::json!({
            "worker_level": worker_level,
            "award_version": table.award_version
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "applied_level": FALLBACK_WORKER_LEVEL,
            "fallback": true
        }),
        reasoning: format!(
            "Level {} not found; fell back to level {} rate ${}",
            worker_level, FALLBACK_WORKER_LEVEL, rate
        ),
    };

    Ok(BaseRateLookupResult {
        rate,
        applied_level: FALLBACK_WORKER_LEVEL,
        warning: Some(warning),
        audit_step,
    })
}
