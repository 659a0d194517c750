//! GST application.
//!
//! GST is charged on gross pay (regular pay, penalties and allowances) and is
//! always the last line of a breakdown.

use rust_decimal::Decimal;

use crate::models::{AuditStep, BreakdownCategory, PayBreakdownLine};

/// The result of applying GST to gross pay.
#[derive(Debug, Clone)]
pub struct GstResult {
    /// GST on gross pay.
    pub tax_amount: Decimal,
    /// Gross pay plus GST.
    pub total_pay: Decimal,
    /// The GST breakdown line. Always present, even when the tax is zero.
    pub line: PayBreakdownLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies `gst_rate` to `gross_pay`.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::apply_gst;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = apply_gst(dec("105.00"), dec("0.10"), 4);
/// assert_eq!(result.tax_amount, dec("10.50"));
/// assert_eq!(result.total_pay, dec("115.50"));
/// assert_eq!(result.line.description, "GST (10%)");
/// ```
pub fn apply_gst(gross_pay: Decimal, gst_rate: Decimal, step_number: u32) -> GstResult {
    let tax_amount = gross_pay * gst_rate;
    let total_pay = gross_pay + tax_amount;
    let percent = (gst_rate * Decimal::ONE_HUNDRED).normalize();

    GstResult {
        tax_amount,
        total_pay,
        line: PayBreakdownLine {
            description: format!("GST ({}%)", percent),
            hours: None,
            rate: None,
            amount: tax_amount,
            category: BreakdownCategory::Tax,
        },
        audit_step: AuditStep {
            step_number,
            rule_id: "gst".to_string(),
            rule_name: "GST".to_string(),
            input: serde_json::json!({
                "gross_pay": gross_pay.to_string(),
                "gst_rate": gst_rate.to_string()
            }),
            output: serde_json::json!({
                "tax_amount": tax_amount.to_string(),
                "total_pay": total_pay.to_string()
            }),
            reasoning: format!(
                "${} × {} = ${} GST; total ${}",
                gross_pay, gst_rate, tax_amount, total_pay
            ),
        },
    }
}
