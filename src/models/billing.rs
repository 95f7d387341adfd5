//! Billing input and breakdown models.
//!
//! [`BillingInputs`] carries the vessel base price and the itemised add-ons;
//! [`BillingBreakdown`] is the invoice produced from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs to a billing expansion.
///
/// Values are trusted to be in range (discount 0-100, food amount and vessel
/// base non-negative, guest count at least 1); the form intake layer
/// normalises loose input into this shape.
///
/// # Example
///
/// ```
/// use charter_quote::models::BillingInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = BillingInputs {
///     vessel_base: Decimal::from(1000),
///     discount_percent: Decimal::from(10),
///     food_amount: Decimal::from(200),
///     beverage_package_id: "call".to_string(),
///     guest_count: 10,
///     duration_hours: 4,
/// };
/// assert_eq!(inputs.guest_count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInputs {
    /// The vessel base price from the quote.
    pub vessel_base: Decimal,
    /// The discount applied to the vessel price, as a percentage (0-100).
    pub discount_percent: Decimal,
    /// The flat food package amount.
    pub food_amount: Decimal,
    /// The beverage package identifier ("none" for no package).
    pub beverage_package_id: String,
    /// The number of guests.
    pub guest_count: u32,
    /// The charter duration in hours.
    pub duration_hours: u32,
}

/// The itemised invoice for a charter.
///
/// Discount applies only to the vessel, tax only to food and beverage, and the
/// service charge to the discounted vessel plus the untaxed food and beverage
/// subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingBreakdown {
    /// The vessel base price.
    pub vessel_base: Decimal,
    /// The discount percentage actually applied (after clamping).
    pub discount_percent: Decimal,
    /// The discount taken off the vessel price.
    pub discount_amount: Decimal,
    /// The vessel price after discount.
    pub discounted_vessel: Decimal,
    /// The flat food package amount.
    pub food_amount: Decimal,
    /// The resolved beverage package identifier.
    pub beverage_package_id: String,
    /// The beverage rate per person per hour.
    pub beverage_rate: Decimal,
    /// The beverage package amount (rate x guests x hours).
    pub beverage_amount: Decimal,
    /// Food plus beverage, before tax.
    pub food_and_beverage_subtotal: Decimal,
    /// Tax on the food and beverage subtotal.
    pub package_tax: Decimal,
    /// Service charge on the discounted vessel plus food and beverage.
    pub service_charge: Decimal,
    /// The invoice total.
    pub grand_total: Decimal,
    /// The guest count used.
    pub guest_count: u32,
    /// The duration used.
    pub duration_hours: u32,
}
