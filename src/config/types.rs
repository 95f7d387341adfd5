//! Catalog types for charter pricing.
//!
//! This module contains the strongly-typed catalog structures that are
//! deserialized from YAML files, and the validated [`Catalog`] built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{EngineResult, QuoteError};
use crate::models::{NO_BEVERAGE_PACKAGE, SeasonTier};

/// The pricing scheme a vessel falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoatCategory {
    /// Priced with fixed 3-hour and 4-hour packages plus an hourly rate.
    Standard,
    /// Certificate-of-inspection vessel, priced with hourly rates banded by
    /// day-of-week group.
    Coi,
}

/// A vessel available for charter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    /// Unique catalog key (e.g., "37_sear").
    pub id: String,
    /// Display name (e.g., "37' Sea Ray").
    pub name: String,
    /// Passenger capacity.
    pub capacity: u32,
    /// The pricing scheme for this vessel.
    pub category: BoatCategory,
}

/// The rates for one boat in one tier.
///
/// Every rate is optional. An absent rate means no price is defined for that
/// combination; it is never replaced by an implicit default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    /// The boat this rule prices.
    pub boat_id: String,
    /// The tier this rule applies in.
    pub tier: SeasonTier,
    /// Hourly rate.
    pub hourly: Option<Decimal>,
    /// Fixed 3-hour price.
    pub three_hour: Option<Decimal>,
    /// Fixed 4-hour price.
    pub four_hour: Option<Decimal>,
    /// Fixed 3-hour Saturday price.
    pub three_hour_weekend: Option<Decimal>,
    /// Fixed 4-hour Saturday price.
    pub four_hour_weekend: Option<Decimal>,
    /// Fixed 3-hour Sunday price (Tier 2).
    pub three_hour_sun: Option<Decimal>,
    /// Fixed 4-hour Sunday price (Tier 2).
    pub four_hour_sun: Option<Decimal>,
    /// COI hourly rate for Saturday through Tuesday.
    pub coi_sat_tues: Option<Decimal>,
    /// COI hourly rate for Wednesday through Friday.
    pub coi_wed_fri: Option<Decimal>,
}

impl PricingRule {
    fn rates(&self) -> [(&'static str, Option<Decimal>); 9] {
        [
            ("hourly", self.hourly),
            ("three_hour", self.three_hour),
            ("four_hour", self.four_hour),
            ("three_hour_weekend", self.three_hour_weekend),
            ("four_hour_weekend", self.four_hour_weekend),
            ("three_hour_sun", self.three_hour_sun),
            ("four_hour_sun", self.four_hour_sun),
            ("coi_sat_tues", self.coi_sat_tues),
            ("coi_wed_fri", self.coi_wed_fri),
        ]
    }
}

/// A named holiday period.
///
/// Holiday windows are carried in the catalog but are not consulted when
/// resolving tiers or prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayWindow {
    /// The holiday name.
    pub name: String,
    /// The first day of the window (inclusive).
    pub start: NaiveDate,
    /// The last day of the window (inclusive).
    pub end: NaiveDate,
}

impl HolidayWindow {
    /// Checks whether a date falls within this window, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use charter_quote::config::HolidayWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = HolidayWindow {
    ///     name: "4th of July Week".to_string(),
    ///     start: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2026, 7, 5).unwrap(),
    /// };
    /// assert!(window.contains(NaiveDate::from_ymd_opt(2026, 7, 5).unwrap()));
    /// assert!(!window.contains(NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A beverage package priced per person per hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeveragePackage {
    /// The package identifier (e.g., "call").
    pub id: String,
    /// The display name.
    pub name: String,
    /// Rate charged per guest per hour.
    pub rate_per_person_per_hour: Decimal,
}

impl BeveragePackage {
    /// The implicit "no package" entry.
    pub fn none() -> Self {
        Self {
            id: NO_BEVERAGE_PACKAGE.to_string(),
            name: "No beverage package".to_string(),
            rate_per_person_per_hour: Decimal::ZERO,
        }
    }
}

/// Boats file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BoatsConfig {
    /// The vessels, in display order.
    pub boats: Vec<Boat>,
}

/// Pricing file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// One rule per (boat, tier).
    pub rules: Vec<PricingRule>,
}

/// Holidays file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The holiday windows.
    pub holidays: Vec<HolidayWindow>,
}

/// Beverage packages file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BeveragesConfig {
    /// The named packages, excluding the implicit "none".
    pub packages: Vec<BeveragePackage>,
}

/// The validated, immutable pricing catalog.
///
/// Boats are indexed by id and rules by (boat id, tier). Construction via
/// [`Catalog::new`] enforces:
/// - boat ids are unique;
/// - every rule names a known boat, and no (boat, tier) pair has two rules;
/// - every boat has at least one rule;
/// - COI rules define both banded rates and standard rules define an hourly rate;
/// - no rate or beverage price is negative;
/// - holiday windows do not end before they start;
/// - beverage package ids are unique and never "none".
#[derive(Debug, Clone)]
pub struct Catalog {
    boats: Vec<Boat>,
    boat_index: HashMap<String, usize>,
    rules: Vec<PricingRule>,
    rule_index: HashMap<(String, SeasonTier), usize>,
    holidays: Vec<HolidayWindow>,
    beverage_packages: Vec<BeveragePackage>,
    no_beverage_package: BeveragePackage,
}

impl Catalog {
    /// Builds a catalog from its component parts, validating it.
    pub fn new(
        boats: Vec<Boat>,
        rules: Vec<PricingRule>,
        holidays: Vec<HolidayWindow>,
        beverage_packages: Vec<BeveragePackage>,
    ) -> EngineResult<Self> {
        let mut boat_index = HashMap::with_capacity(boats.len());
        for (position, boat) in boats.iter().enumerate() {
            if boat_index.insert(boat.id.clone(), position).is_some() {
                return Err(invalid(format!("duplicate boat id '{}'", boat.id)));
            }
        }

        let mut rule_index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            let boat = boat_index
                .get(&rule.boat_id)
                .map(|&i| &boats[i])
                .ok_or_else(|| {
                    invalid(format!(
                        "pricing rule references unknown boat '{}'",
                        rule.boat_id
                    ))
                })?;

            validate_rule(boat, rule)?;

            if rule_index
                .insert((rule.boat_id.clone(), rule.tier), position)
                .is_some()
            {
                return Err(invalid(format!(
                    "more than one pricing rule for boat '{}' in {}",
                    rule.boat_id, rule.tier
                )));
            }
        }

        for boat in &boats {
            let has_rule = SeasonTier::ALL
                .iter()
                .any(|tier| rule_index.contains_key(&(boat.id.clone(), *tier)));
            if !has_rule {
                return Err(invalid(format!("boat '{}' has no pricing rules", boat.id)));
            }
        }

        for holiday in &holidays {
            if holiday.end < holiday.start {
                return Err(invalid(format!(
                    "holiday '{}' ends ({}) before it starts ({})",
                    holiday.name, holiday.end, holiday.start
                )));
            }
        }

        let mut package_ids = HashSet::new();
        for package in &beverage_packages {
            if package.id == NO_BEVERAGE_PACKAGE {
                return Err(invalid(format!(
                    "beverage package id '{}' is reserved",
                    NO_BEVERAGE_PACKAGE
                )));
            }
            if !package_ids.insert(package.id.as_str()) {
                return Err(invalid(format!(
                    "duplicate beverage package id '{}'",
                    package.id
                )));
            }
            if package.rate_per_person_per_hour < Decimal::ZERO {
                return Err(invalid(format!(
                    "beverage package '{}' has a negative rate",
                    package.id
                )));
            }
        }

        Ok(Self {
            boats,
            boat_index,
            rules,
            rule_index,
            holidays,
            beverage_packages,
            no_beverage_package: BeveragePackage::none(),
        })
    }

    /// Returns all boats in display order.
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// Looks up a boat by id.
    pub fn boat(&self, boat_id: &str) -> Option<&Boat> {
        self.boat_index.get(boat_id).map(|&i| &self.boats[i])
    }

    /// Returns all pricing rules in catalog order.
    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    /// Looks up the rule for an exact (boat, tier) pair.
    pub fn rule(&self, boat_id: &str, tier: SeasonTier) -> Option<&PricingRule> {
        self.rule_index
            .get(&(boat_id.to_string(), tier))
            .map(|&i| &self.rules[i])
    }

    /// Returns the holiday windows.
    pub fn holidays(&self) -> &[HolidayWindow] {
        &self.holidays
    }

    /// Returns the named beverage packages, excluding the implicit "none".
    pub fn beverage_packages(&self) -> &[BeveragePackage] {
        &self.beverage_packages
    }

    /// Looks up a beverage package by id.
    ///
    /// Unknown ids resolve to the implicit "none" package with a zero rate.
    pub fn beverage_package(&self, package_id: &str) -> &BeveragePackage {
        self.beverage_packages
            .iter()
            .find(|p| p.id == package_id)
            .unwrap_or(&self.no_beverage_package)
    }
}

fn validate_rule(boat: &Boat, rule: &PricingRule) -> EngineResult<()> {
    for (field, rate) in rule.rates() {
        if rate.is_some_and(|r| r < Decimal::ZERO) {
            return Err(invalid(format!(
                "pricing rule for boat '{}' in {} has a negative {}",
                rule.boat_id, rule.tier, field
            )));
        }
    }

    match boat.category {
        BoatCategory::Coi if rule.coi_sat_tues.is_none() || rule.coi_wed_fri.is_none() => {
            Err(invalid(format!(
                "COI boat '{}' in {} must define coi_sat_tues and coi_wed_fri",
                rule.boat_id, rule.tier
            )))
        }
        BoatCategory::Standard if rule.hourly.is_none() => Err(invalid(format!(
            "standard boat '{}' in {} must define an hourly rate",
            rule.boat_id, rule.tier
        ))),
        _ => Ok(()),
    }
}

fn invalid(message: String) -> QuoteError {
    QuoteError::InvalidCatalog { message }
}
