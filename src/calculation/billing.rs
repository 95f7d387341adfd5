//! Billing expansion from a vessel base price to an invoice total.
//!
//! The order of operations is fixed:
//! 1. discount = vessel base x discount% (vessel only)
//! 2. discounted vessel = vessel base - discount
//! 3. beverage = rate per person per hour x guests x hours
//! 4. food and beverage subtotal = food + beverage
//! 5. package tax = subtotal x 11.25% (food and beverage only)
//! 6. service charge = (discounted vessel + subtotal) x 18%
//! 7. grand total = discounted vessel + subtotal + package tax + service charge
//!
//! Amounts keep full decimal precision; [`round_breakdown`] rounds for display.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Catalog;
use crate::models::{BillingBreakdown, BillingInputs};

/// Tax rate on the food and beverage subtotal (11.25%).
pub const PACKAGE_TAX_RATE: Decimal = Decimal::from_parts(1125, 0, 0, false, 4);

/// Service charge rate on the discounted vessel plus food and beverage (18%).
pub const SERVICE_CHARGE_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Expands a vessel base price and add-ons into a billing breakdown.
///
/// Inputs are brought into range before use: the discount is clamped to
/// 0-100, negative amounts count as zero, and a guest count of zero counts
/// as one. Unknown beverage package ids bill as "none".
///
/// # Examples
///
/// ```
/// use charter_quote::calculation::calculate_billing;
/// use charter_quote::config::CatalogLoader;
/// use charter_quote::models::BillingInputs;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = CatalogLoader::embedded().unwrap();
/// let inputs = BillingInputs {
///     vessel_base: Decimal::from(1000),
///     discount_percent: Decimal::from(10),
///     food_amount: Decimal::from(200),
///     beverage_package_id: "call".to_string(),
///     guest_count: 10,
///     duration_hours: 4,
/// };
///
/// let breakdown = calculate_billing(&inputs, loader.catalog());
/// assert_eq!(breakdown.grand_total, Decimal::from_str("2173.55").unwrap());
/// ```
pub fn calculate_billing(inputs: &BillingInputs, catalog: &Catalog) -> BillingBreakdown {
    let vessel_base = inputs.vessel_base.max(Decimal::ZERO);
    let discount_percent = inputs
        .discount_percent
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let food_amount = inputs.food_amount.max(Decimal::ZERO);
    let guest_count = inputs.guest_count.max(1);
    let package = catalog.beverage_package(&inputs.beverage_package_id);

    let discount_amount = vessel_base * (discount_percent / Decimal::ONE_HUNDRED);
    let discounted_vessel = vessel_base - discount_amount;

    let beverage_amount = package.rate_per_person_per_hour
        * Decimal::from(guest_count)
        * Decimal::from(inputs.duration_hours);
    let food_and_beverage_subtotal = food_amount + beverage_amount;

    let package_tax = food_and_beverage_subtotal * PACKAGE_TAX_RATE;
    let service_charge = (discounted_vessel + food_and_beverage_subtotal) * SERVICE_CHARGE_RATE;

    let grand_total =
        discounted_vessel + food_and_beverage_subtotal + package_tax + service_charge;

    BillingBreakdown {
        vessel_base,
        discount_percent,
        discount_amount,
        discounted_vessel,
        food_amount,
        beverage_package_id: package.id.clone(),
        beverage_rate: package.rate_per_person_per_hour,
        beverage_amount,
        food_and_beverage_subtotal,
        package_tax,
        service_charge,
        grand_total,
        guest_count,
        duration_hours: inputs.duration_hours,
    }
}

/// Rounds an amount to cents using banker's rounding.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Returns a copy of the breakdown with every amount rounded to cents.
///
/// Only for display: the grand total is rounded on its own, not recomputed
/// from rounded parts.
pub fn round_breakdown(breakdown: &BillingBreakdown) -> BillingBreakdown {
    BillingBreakdown {
        vessel_base: round_money(breakdown.vessel_base),
        discount_amount: round_money(breakdown.discount_amount),
        discounted_vessel: round_money(breakdown.discounted_vessel),
        food_amount: round_money(breakdown.food_amount),
        beverage_amount: round_money(breakdown.beverage_amount),
        food_and_beverage_subtotal: round_money(breakdown.food_and_beverage_subtotal),
        package_tax: round_money(breakdown.package_tax),
        service_charge: round_money(breakdown.service_charge),
        grand_total: round_money(breakdown.grand_total),
        ..breakdown.clone()
    }
}
