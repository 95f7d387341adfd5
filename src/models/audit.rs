//! Audit trail records for quote calculations.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// quote pipeline (tier resolution, rule lookup, vessel pricing).
///
/// # Example
///
/// ```
/// use charter_quote::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "season_tier".to_string(),
///     rule_name: "Season Tier Resolution".to_string(),
///     input: serde_json::json!({ "date": "2026-07-04" }),
///     output: serde_json::json!({ "tier": "TIER_2" }),
///     reasoning: "07-04 falls within June 20 - September 6".to_string(),
/// };
/// assert_eq!(step.rule_id, "season_tier");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
