//! Vessel base price calculation.
//!
//! This module implements the day-of-week and duration decision tree that
//! turns a boat, its pricing rule, a date, and a duration into the vessel base
//! price, together with notes explaining the path taken.
//!
//! Precedence:
//! 1. COI vessels: banded hourly rate (Sat-Tues or Wed-Fri) x duration.
//! 2. Standard vessels in Tier 1: Saturday or Sunday-Friday fixed 3-hour and
//!    4-hour prices, otherwise hourly x duration.
//! 3. Standard vessels in Tier 2: Saturday 4-hour price, Sunday 3-hour and
//!    4-hour prices, Monday-Friday fixed prices or hourly x duration.
//! 4. If the branch found no configured rate, the hourly fallback prices the
//!    quote and the result is flagged.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{Boat, BoatCategory, PricingRule};
use crate::models::{AuditStep, SeasonTier};

use super::day_band::{CharterDay, CoiBand, charter_day, coi_band, day_of_week_index};

/// Note appended when no configured rate matched and the hourly fallback applied.
pub const FALLBACK_NOTE: &str =
    "exact pricing configuration not found; using hourly base rate fallback";

/// The result of a vessel price calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct VesselPriceResult {
    /// The vessel base price.
    pub price: Decimal,
    /// Ordered notes describing the pricing path; never empty.
    pub notes: Vec<String>,
    /// True when the hourly fallback set the price.
    pub fallback_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The outcome of the day/duration branch before the fallback is considered.
struct Branch {
    path: &'static str,
    note: String,
    price: Option<Decimal>,
}

/// Calculates the vessel base price for a charter.
///
/// A branch that finds no configured rate leaves the price unresolved; the
/// hourly fallback is then applied once, after the branch, with
/// [`FALLBACK_NOTE`] appended. A configured rate of zero is a resolved price.
///
/// # Arguments
///
/// * `boat` - The boat being chartered
/// * `rule` - The boat's pricing rule for the date's tier
/// * `date` - The charter date
/// * `duration_hours` - The requested duration in whole hours
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use charter_quote::calculation::{find_boat, find_pricing_rule, price_vessel};
/// use charter_quote::config::CatalogLoader;
/// use charter_quote::models::SeasonTier;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = CatalogLoader::embedded().unwrap();
/// let catalog = loader.catalog();
/// let boat = find_boat(catalog, "56_sear").unwrap();
/// let rule = find_pricing_rule(catalog, "56_sear", SeasonTier::Tier1).unwrap();
///
/// // 2026-06-06 is a Saturday in Tier 1
/// let date = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
/// let result = price_vessel(boat, rule, date, 4, 1);
///
/// // Fixed Saturday price, not hourly ($400 x 4 = $1600)
/// assert_eq!(result.price, Decimal::from(1700));
/// assert_eq!(result.notes, vec!["Tier 1 Saturday Pricing".to_string()]);
/// ```
pub fn price_vessel(
    boat: &Boat,
    rule: &PricingRule,
    date: NaiveDate,
    duration_hours: u32,
    step_number: u32,
) -> VesselPriceResult {
    let hours = Decimal::from(duration_hours);

    let branch = match boat.category {
        BoatCategory::Coi => coi_branch(rule, date, hours),
        BoatCategory::Standard => match rule.tier {
            SeasonTier::Tier1 => tier_1_branch(rule, date, duration_hours, hours),
            SeasonTier::Tier2 => tier_2_branch(rule, date, duration_hours, hours),
        },
    };

    let mut notes = vec![branch.note];
    let (price, fallback_applied) = match branch.price {
        Some(price) => (price, false),
        None => {
            notes.push(FALLBACK_NOTE.to_string());
            (rule.hourly.unwrap_or(Decimal::ZERO) * hours, true)
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "vessel_price".to_string(),
        rule_name: "Vessel Base Price".to_string(),
        input: serde_json::json!({
            "boat_id": boat.id,
            "category": boat.category,
            "tier": rule.tier.code(),
            "date": date.to_string(),
            "day_of_week": day_of_week_index(date),
            "duration_hours": duration_hours
        }),
        output: serde_json::json!({
            "path": branch.path,
            "price": price.normalize().to_string(),
            "fallback_applied": fallback_applied
        }),
        reasoning: format!(
            "{}: {} for {} hours = ${}",
            boat.name,
            notes.join("; "),
            duration_hours,
            price.normalize()
        ),
    };

    VesselPriceResult {
        price,
        notes,
        fallback_applied,
        audit_step,
    }
}

fn coi_branch(rule: &PricingRule, date: NaiveDate, hours: Decimal) -> Branch {
    let (path, rate) = match coi_band(date) {
        CoiBand::SatTues => ("coi_sat_tues", rule.coi_sat_tues),
        CoiBand::WedFri => ("coi_wed_fri", rule.coi_wed_fri),
    };

    Branch {
        path,
        note: format!(
            "Rate: ${}/hr ({} rule)",
            rate.unwrap_or(Decimal::ZERO).normalize(),
            coi_band(date)
        ),
        price: rate.map(|r| r * hours),
    }
}

fn tier_1_branch(
    rule: &PricingRule,
    date: NaiveDate,
    duration_hours: u32,
    hours: Decimal,
) -> Branch {
    match charter_day(date) {
        CharterDay::Saturday => Branch {
            path: "tier_1_saturday",
            note: "Tier 1 Saturday Pricing".to_string(),
            price: fixed_or_hourly(
                duration_hours,
                rule.three_hour_weekend,
                rule.four_hour_weekend,
                rule.hourly,
                hours,
            ),
        },
        CharterDay::Sunday | CharterDay::Weekday => Branch {
            path: "tier_1_sun_fri",
            note: "Tier 1 Sun-Fri Pricing".to_string(),
            price: fixed_or_hourly(
                duration_hours,
                rule.three_hour,
                rule.four_hour,
                rule.hourly,
                hours,
            ),
        },
    }
}

fn tier_2_branch(
    rule: &PricingRule,
    date: NaiveDate,
    duration_hours: u32,
    hours: Decimal,
) -> Branch {
    match charter_day(date) {
        // Tier 2 has no fixed 3-hour Saturday price; anything but 4 hours is unresolved.
        CharterDay::Saturday => Branch {
            path: "tier_2_saturday",
            note: "Tier 2 Saturday Pricing".to_string(),
            price: match duration_hours {
                4 => rule.four_hour_weekend,
                _ => None,
            },
        },
        CharterDay::Sunday => Branch {
            path: "tier_2_sunday",
            note: "Tier 2 Sunday Pricing".to_string(),
            price: match duration_hours {
                4 => rule.four_hour_sun,
                3 => rule.three_hour_sun,
                _ => None,
            },
        },
        CharterDay::Weekday => Branch {
            path: "tier_2_mon_fri",
            note: "Tier 2 Mon-Fri Pricing".to_string(),
            price: fixed_or_hourly(
                duration_hours,
                rule.three_hour,
                rule.four_hour,
                rule.hourly,
                hours,
            ),
        },
    }
}

fn fixed_or_hourly(
    duration_hours: u32,
    three_hour: Option<Decimal>,
    four_hour: Option<Decimal>,
    hourly: Option<Decimal>,
    hours: Decimal,
) -> Option<Decimal> {
    match duration_hours {
        4 => four_hour,
        3 => three_hour,
        _ => hourly.map(|rate| rate * hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Catalog, CatalogLoader};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn load_catalog() -> Catalog {
        CatalogLoader::embedded()
            .expect("Failed to load catalog")
            .into_catalog()
    }

    fn price(
        catalog: &Catalog,
        boat_id: &str,
        tier: SeasonTier,
        d: NaiveDate,
        hours: u32,
    ) -> VesselPriceResult {
        let boat = catalog.boat(boat_id).unwrap();
        let rule = catalog.rule(boat_id, tier).unwrap();
        price_vessel(boat, rule, d, hours, 1)
    }

    fn empty_rule(boat_id: &str, tier: SeasonTier) -> PricingRule {
        PricingRule {
            boat_id: boat_id.to_string(),
            tier,
            hourly: None,
            three_hour: None,
            four_hour: None,
            three_hour_weekend: None,
            four_hour_weekend: None,
            three_hour_sun: None,
            four_hour_sun: None,
            coi_sat_tues: None,
            coi_wed_fri: None,
        }
    }

    // ==========================================================================
    // COI banding
    // ==========================================================================
    #[test]
    fn test_coi_sat_tues_band_tier_1() {
        let catalog = load_catalog();
        // Saturday, Sunday, Monday, Tuesday in Tier 1
        for d in [date(2026, 6, 6), date(2026, 5, 31), date(2026, 6, 1), date(2026, 6, 2)] {
            let result = price(&catalog, "57_pcat", SeasonTier::Tier1, d, 3);
            assert_eq!(result.price, dec("3000"), "date {}", d);
            assert_eq!(result.notes, vec!["Rate: $1000/hr (Sat-Tues rule)".to_string()]);
            assert!(!result.fallback_applied);
        }
    }

    #[test]
    fn test_coi_wed_fri_band_tier_1() {
        let catalog = load_catalog();
        for (d, hours) in [(date(2026, 6, 3), 3), (date(2026, 6, 4), 4), (date(2026, 6, 5), 5)] {
            let result = price(&catalog, "57_pcat", SeasonTier::Tier1, d, hours);
            assert_eq!(result.price, dec("1750") * Decimal::from(hours));
            assert_eq!(result.notes, vec!["Rate: $1750/hr (Wed-Fri rule)".to_string()]);
        }
    }

    #[test]
    fn test_coi_rate_values_differ_by_tier() {
        let catalog = load_catalog();
        // 2026-07-11 is a Saturday in Tier 2
        let result = price(&catalog, "57_pcat", SeasonTier::Tier2, date(2026, 7, 11), 4);
        assert_eq!(result.price, dec("6000"));
        assert_eq!(result.notes[0], "Rate: $1500/hr (Sat-Tues rule)");
    }

    // ==========================================================================
    // Tier 1 standard
    // ==========================================================================
    #[test]
    fn test_tier_1_saturday_fixed_four_hour() {
        let catalog = load_catalog();
        let result = price(&catalog, "37_sear", SeasonTier::Tier1, date(2026, 6, 6), 4);
        assert_eq!(result.price, dec("1100"));
        assert_eq!(result.notes, vec!["Tier 1 Saturday Pricing".to_string()]);
    }

    #[test]
    fn test_tier_1_saturday_fixed_price_diverges_from_hourly() {
        let catalog = load_catalog();
        let result = price(&catalog, "56_sear", SeasonTier::Tier1, date(2026, 6, 6), 4);
        assert_eq!(result.price, dec("1700"));
        assert_ne!(result.price, dec("400") * dec("4"));
    }

    #[test]
    fn test_tier_1_saturday_three_hour() {
        let catalog = load_catalog();
        let result = price(&catalog, "46_sear", SeasonTier::Tier1, date(2026, 6, 6), 3);
        assert_eq!(result.price, dec("1100"));
    }

    #[test]
    fn test_tier_1_saturday_other_duration_is_hourly() {
        let catalog = load_catalog();
        let result = price(&catalog, "37_sear", SeasonTier::Tier1, date(2026, 6, 6), 6);
        assert_eq!(result.price, dec("1650"));
        assert!(!result.fallback_applied);
    }

    #[test]
    fn test_tier_1_sunday_uses_sun_fri_prices() {
        let catalog = load_catalog();
        // 2026-09-13 is a Sunday in Tier 1
        let result = price(&catalog, "50_sear", SeasonTier::Tier1, date(2026, 9, 13), 4);
        assert_eq!(result.price, dec("1300"));
        assert_eq!(result.notes, vec!["Tier 1 Sun-Fri Pricing".to_string()]);
    }

    #[test]
    fn test_tier_1_weekday_three_hour() {
        let catalog = load_catalog();
        let result = price(&catalog, "57_azim", SeasonTier::Tier1, date(2026, 6, 3), 3);
        assert_eq!(result.price, dec("1800"));
    }

    // ==========================================================================
    // Tier 2 standard
    // ==========================================================================
    #[test]
    fn test_tier_2_saturday_four_hour() {
        let catalog = load_catalog();
        let result = price(&catalog, "37_sear", SeasonTier::Tier2, date(2026, 7, 11), 4);
        assert_eq!(result.price, dec("1600"));
        assert_eq!(result.notes, vec!["Tier 2 Saturday Pricing".to_string()]);
        assert!(!result.fallback_applied);
    }

    #[test]
    fn test_tier_2_saturday_three_hour_falls_back_to_hourly() {
        let catalog = load_catalog();
        let result = price(&catalog, "37_sear", SeasonTier::Tier2, date(2026, 7, 11), 3);

        assert_eq!(result.price, dec("825"));
        assert!(result.fallback_applied);
        assert_eq!(
            result.notes,
            vec![
                "Tier 2 Saturday Pricing".to_string(),
                FALLBACK_NOTE.to_string()
            ]
        );
    }

    #[test]
    fn test_tier_2_sunday_fixed_prices() {
        let catalog = load_catalog();
        let four = price(&catalog, "46_sear", SeasonTier::Tier2, date(2026, 7, 12), 4);
        let three = price(&catalog, "46_sear", SeasonTier::Tier2, date(2026, 7, 12), 3);

        assert_eq!(four.price, dec("1650"));
        assert_eq!(three.price, dec("1250"));
        assert_eq!(four.notes, vec!["Tier 2 Sunday Pricing".to_string()]);
    }

    #[test]
    fn test_tier_2_sunday_other_duration_falls_back() {
        let catalog = load_catalog();
        let result = price(&catalog, "56_sear", SeasonTier::Tier2, date(2026, 7, 12), 5);

        assert_eq!(result.price, dec("2000"));
        assert!(result.fallback_applied);
        assert_eq!(result.notes[0], "Tier 2 Sunday Pricing");
        assert_eq!(result.notes[1], FALLBACK_NOTE);
    }

    #[test]
    fn test_tier_2_weekday_prices() {
        let catalog = load_catalog();
        // 2026-07-13 is a Monday
        let four = price(&catalog, "48_sear", SeasonTier::Tier2, date(2026, 7, 13), 4);
        let hourly = price(&catalog, "48_sear", SeasonTier::Tier2, date(2026, 7, 13), 2);

        assert_eq!(four.price, dec("1300"));
        assert_eq!(hourly.price, dec("650"));
        assert_eq!(four.notes, vec!["Tier 2 Mon-Fri Pricing".to_string()]);
    }

    // ==========================================================================
    // Fallback policy
    // ==========================================================================
    #[test]
    fn test_missing_fixed_rate_triggers_fallback_once() {
        let boat = Boat {
            id: "sparse".to_string(),
            name: "Sparse".to_string(),
            capacity: 8,
            category: BoatCategory::Standard,
        };
        let mut rule = empty_rule("sparse", SeasonTier::Tier1);
        rule.hourly = Some(dec("250"));

        let result = price_vessel(&boat, &rule, date(2026, 6, 3), 4, 1);

        assert_eq!(result.price, dec("1000"));
        assert!(result.fallback_applied);
        assert_eq!(result.notes.iter().filter(|n| *n == FALLBACK_NOTE).count(), 1);
    }

    #[test]
    fn test_configured_zero_rate_is_not_treated_as_missing() {
        let boat = Boat {
            id: "promo".to_string(),
            name: "Promo".to_string(),
            capacity: 8,
            category: BoatCategory::Standard,
        };
        let mut rule = empty_rule("promo", SeasonTier::Tier1);
        rule.hourly = Some(dec("250"));
        rule.four_hour = Some(Decimal::ZERO);

        let result = price_vessel(&boat, &rule, date(2026, 6, 3), 4, 1);

        assert_eq!(result.price, Decimal::ZERO);
        assert!(!result.fallback_applied);
        assert_eq!(result.notes, vec!["Tier 1 Sun-Fri Pricing".to_string()]);
    }

    #[test]
    fn test_fallback_without_hourly_rate_prices_at_zero() {
        let boat = Boat {
            id: "bare".to_string(),
            name: "Bare".to_string(),
            capacity: 8,
            category: BoatCategory::Coi,
        };
        let rule = empty_rule("bare", SeasonTier::Tier1);

        let result = price_vessel(&boat, &rule, date(2026, 6, 3), 4, 1);

        assert_eq!(result.price, Decimal::ZERO);
        assert!(result.fallback_applied);
        assert_eq!(result.notes[0], "Rate: $0/hr (Wed-Fri rule)");
    }

    // ==========================================================================
    // Audit
    // ==========================================================================
    #[test]
    fn test_audit_step_records_path_and_price() {
        let catalog = load_catalog();
        let boat = catalog.boat("37_sear").unwrap();
        let rule = catalog.rule("37_sear", SeasonTier::Tier2).unwrap();

        let result = price_vessel(boat, rule, date(2026, 7, 11), 3, 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "vessel_price");
        assert_eq!(result.audit_step.input["day_of_week"], 6);
        assert_eq!(result.audit_step.input["category"], "standard");
        assert_eq!(result.audit_step.output["path"], "tier_2_saturday");
        assert_eq!(result.audit_step.output["price"], "825");
        assert_eq!(result.audit_step.output["fallback_applied"], true);
        assert!(result.audit_step.reasoning.contains("$825"));
    }

    #[test]
    fn test_pricing_is_idempotent() {
        let catalog = load_catalog();
        let first = price(&catalog, "85_pcat", SeasonTier::Tier2, date(2026, 8, 5), 4);
        let second = price(&catalog, "85_pcat", SeasonTier::Tier2, date(2026, 8, 5), 4);

        assert_eq!(first.price, second.price);
        assert_eq!(first.notes, second.notes);
        assert_eq!(first.audit_step, second.audit_step);
    }
}
