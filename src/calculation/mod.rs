//! Calculation logic for the Quote Pricing Engine.
//!
//! This module contains the pricing pipeline: seasonal tier resolution,
//! boat and pricing rule lookup, day-of-week banding, the vessel price
//! decision tree with its hourly fallback, and the billing expansion from a
//! vessel base price to an invoice total.

mod billing;
mod day_band;
mod quote;
mod rule_lookup;
mod season_tier;
mod vessel_price;

pub use billing::{
    PACKAGE_TAX_RATE, SERVICE_CHARGE_RATE, calculate_billing, round_breakdown, round_money,
};
pub use day_band::{CharterDay, CoiBand, charter_day, coi_band, day_of_week_index};
pub use quote::calculate_quote;
pub use rule_lookup::{RuleLookupResult, find_boat, find_pricing_rule, lookup_pricing_rule};
pub use season_tier::{OUT_OF_SEASON_NOTE, TierLookupResult, get_tier, resolve_tier};
pub use vessel_price::{FALLBACK_NOTE, VesselPriceResult, price_vessel};
