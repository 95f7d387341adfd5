//! End-to-end quote pricing.
//!
//! Runs the pipeline for a single request: boat lookup, tier resolution,
//! pricing rule lookup, then the vessel price decision tree. Each stage
//! contributes an audit step to the result.

use tracing::{debug, info, warn};

use crate::config::Catalog;
use crate::error::EngineResult;
use crate::models::{AuditStep, QuoteRequest, QuoteResult};

use super::rule_lookup::{find_boat, lookup_pricing_rule};
use super::season_tier::{OUT_OF_SEASON_NOTE, resolve_tier};
use super::vessel_price::price_vessel;

/// Prices a charter quote against the catalog.
///
/// The boat is looked up before anything else, so an unknown boat id fails
/// with `BoatNotFound` without touching the pricing rules. The result is a
/// pure function of the request and the catalog.
///
/// # Errors
///
/// Returns `BoatNotFound` if the boat id is not in the catalog, or
/// `PricingRuleNotFound` if the boat has no rule for the date's tier.
///
/// # Examples
///
/// ```
/// use charter_quote::calculation::calculate_quote;
/// use charter_quote::config::CatalogLoader;
/// use charter_quote::models::{QuoteRequest, SeasonTier};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = CatalogLoader::embedded().unwrap();
/// let request = QuoteRequest {
///     boat_id: "56_sear".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(), // Saturday
///     duration_hours: 4,
/// };
///
/// let quote = calculate_quote(&request, loader.catalog()).unwrap();
/// assert_eq!(quote.price, Decimal::from(1700));
/// assert_eq!(quote.tier, SeasonTier::Tier1);
/// assert!(!quote.fallback_applied);
/// ```
pub fn calculate_quote(request: &QuoteRequest, catalog: &Catalog) -> EngineResult<QuoteResult> {
    debug!(
        boat_id = %request.boat_id,
        date = %request.date,
        duration_hours = request.duration_hours,
        "Pricing quote"
    );

    let boat = find_boat(catalog, &request.boat_id).inspect_err(|err| {
        warn!(boat_id = %request.boat_id, error = %err, "Quote rejected");
    })?;

    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;
    let mut notes: Vec<String> = Vec::new();

    let tier_result = resolve_tier(request.date, step_number);
    let tier = tier_result.tier;
    audit_steps.push(tier_result.audit_step);
    step_number += 1;
    debug!(date = %request.date, tier = %tier, in_season = tier_result.in_season, "Resolved tier");

    if !tier_result.in_season {
        warn!(date = %request.date, tier = %tier, "Date is outside the charter season");
        notes.push(OUT_OF_SEASON_NOTE.to_string());
    }

    let lookup = lookup_pricing_rule(catalog, &boat.id, tier, step_number).inspect_err(|err| {
        warn!(boat_id = %boat.id, tier = %tier, error = %err, "Quote rejected");
    })?;
    audit_steps.push(lookup.audit_step);
    step_number += 1;
    debug!(boat_id = %boat.id, tier = %tier, category = ?boat.category, "Resolved pricing rule");

    let vessel = price_vessel(
        boat,
        lookup.rule,
        request.date,
        request.duration_hours,
        step_number,
    );
    audit_steps.push(vessel.audit_step);

    if vessel.fallback_applied {
        warn!(
            boat_id = %boat.id,
            tier = %tier,
            duration_hours = request.duration_hours,
            "No configured rate matched; priced with hourly fallback"
        );
    }
    notes.extend(vessel.notes);

    info!(
        boat_id = %boat.id,
        tier = %tier,
        price = %vessel.price,
        fallback_applied = vessel.fallback_applied,
        "Quote priced"
    );

    Ok(QuoteResult {
        boat_id: boat.id.clone(),
        boat_name: boat.name.clone(),
        date: request.date,
        duration_hours: request.duration_hours,
        price: vessel.price,
        tier,
        notes,
        fallback_applied: vessel.fallback_applied,
        audit_steps,
    })
}
