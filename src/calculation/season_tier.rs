//! Seasonal tier resolution.
//!
//! This module maps a calendar date to its [`SeasonTier`] using the month and
//! day only. The year and the day of the week never affect the result.

use chrono::{Datelike, NaiveDate};

use crate::models::{AuditStep, SeasonTier};

/// Note attached to quotes whose date lies outside the defined season.
pub const OUT_OF_SEASON_NOTE: &str =
    "date is outside the defined May 1 - October 31 season; defaulting to Tier 1";

/// The result of a tier lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct TierLookupResult {
    /// The resolved tier.
    pub tier: SeasonTier,
    /// False when the date lies outside May 1 - October 31 and the tier is the
    /// Tier 1 default rather than a real season.
    pub in_season: bool,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Determines the seasonal tier for a date.
///
/// Boundaries are inclusive:
/// - Tier 1: May 1 - June 19 and September 7 - October 31
/// - Tier 2: June 20 - September 6
///
/// Dates outside May 1 - October 31 have no defined season and resolve to
/// Tier 1.
///
/// # Examples
///
/// ```
/// use charter_quote::calculation::get_tier;
/// use charter_quote::models::SeasonTier;
/// use chrono::NaiveDate;
///
/// assert_eq!(get_tier(NaiveDate::from_ymd_opt(2026, 6, 19).unwrap()), SeasonTier::Tier1);
/// assert_eq!(get_tier(NaiveDate::from_ymd_opt(2026, 6, 20).unwrap()), SeasonTier::Tier2);
/// assert_eq!(get_tier(NaiveDate::from_ymd_opt(2026, 9, 6).unwrap()), SeasonTier::Tier2);
/// assert_eq!(get_tier(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()), SeasonTier::Tier1);
/// ```
pub fn get_tier(date: NaiveDate) -> SeasonTier {
    season_for(date.month(), date.day()).unwrap_or(SeasonTier::Tier1)
}

/// Resolves the tier for a date and records the decision.
pub fn resolve_tier(date: NaiveDate, step_number: u32) -> TierLookupResult {
    let season = season_for(date.month(), date.day());
    let tier = season.unwrap_or(SeasonTier::Tier1);
    let in_season = season.is_some();

    let reasoning = match (season, tier) {
        (None, _) => format!(
            "{} is outside May 1 - October 31; defaulting to {}",
            date.format("%m-%d"),
            tier
        ),
        (Some(_), SeasonTier::Tier1) => format!(
            "{} falls within May 1 - June 19 or September 7 - October 31 ({})",
            date.format("%m-%d"),
            tier
        ),
        (Some(_), SeasonTier::Tier2) => format!(
            "{} falls within June 20 - September 6 ({})",
            date.format("%m-%d"),
            tier
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "season_tier".to_string(),
        rule_name: "Season Tier Resolution".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "month": date.month(),
            "day": date.day()
        }),
        output: serde_json::json!({
            "tier": tier.code(),
            "in_season": in_season
        }),
        reasoning,
    };

    TierLookupResult {
        tier,
        in_season,
        audit_step,
    }
}

fn season_for(month: u32, day: u32) -> Option<SeasonTier> {
    match (month, day) {
        (5, _) | (6, 1..=19) => Some(SeasonTier::Tier1),
        (6, _) | (7, _) | (8, _) | (9, 1..=6) => Some(SeasonTier::Tier2),
        (9, _) | (10, _) => Some(SeasonTier::Tier1),
        _ => None,
    }
}
