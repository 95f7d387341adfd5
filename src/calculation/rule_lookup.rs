//! Boat and pricing rule lookup.
//!
//! Lookups are exact: a boat by its id, a rule by its (boat id, tier) pair.
//! There is no partial matching and no fallback to another tier.

use crate::config::{Boat, Catalog, PricingRule};
use crate::error::{EngineResult, QuoteError};
use crate::models::{AuditStep, SeasonTier};

/// The result of a pricing rule lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct RuleLookupResult<'a> {
    /// The matching rule.
    pub rule: &'a PricingRule,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Finds a boat in the catalog.
///
/// # Errors
///
/// Returns `BoatNotFound` if the id is not in the catalog.
///
/// # Example
///
/// ```
/// use charter_quote::calculation::find_boat;
/// use charter_quote::config::CatalogLoader;
///
/// let loader = CatalogLoader::embedded().unwrap();
/// assert!(find_boat(loader.catalog(), "37_sear").is_ok());
/// assert!(find_boat(loader.catalog(), "nonexistent").is_err());
/// ```
pub fn find_boat<'a>(catalog: &'a Catalog, boat_id: &str) -> EngineResult<&'a Boat> {
    catalog
        .boat(boat_id)
        .ok_or_else(|| QuoteError::BoatNotFound {
            boat_id: boat_id.to_string(),
        })
}

/// Finds the unique pricing rule for a boat in a tier.
///
/// # Errors
///
/// Returns `PricingRuleNotFound` if the catalog has no rule for that exact
/// (boat id, tier) pair.
pub fn find_pricing_rule<'a>(
    catalog: &'a Catalog,
    boat_id: &str,
    tier: SeasonTier,
) -> EngineResult<&'a PricingRule> {
    catalog
        .rule(boat_id, tier)
        .ok_or_else(|| QuoteError::PricingRuleNotFound {
            boat_id: boat_id.to_string(),
            tier,
        })
}

/// Finds the pricing rule for a boat in a tier and records the lookup.
pub fn lookup_pricing_rule<'a>(
    catalog: &'a Catalog,
    boat_id: &str,
    tier: SeasonTier,
    step_number: u32,
) -> EngineResult<RuleLookupResult<'a>> {
    let rule = find_pricing_rule(catalog, boat_id, tier)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "pricing_rule_lookup".to_string(),
        rule_name: "Pricing Rule Lookup".to_string(),
        input: serde_json::json!({
            "boat_id": boat_id,
            "tier": tier.code()
        }),
        output: serde_json::to_value(rule).unwrap_or(serde_json::Value::Null),
        reasoning: format!("Using the {} pricing rule for boat '{}'", tier, boat_id),
    };

    Ok(RuleLookupResult { rule, audit_step })
}
