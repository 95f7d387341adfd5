//! Quote request and result models.
//!
//! This module contains the strict [`QuoteRequest`] consumed by the pricing
//! pipeline and the [`QuoteResult`] it produces.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, SeasonTier};

/// A request to price a vessel charter.
///
/// The date is a local calendar day. It is never derived from a timestamp, so
/// no time zone can shift it onto a neighbouring day.
///
/// # Example
///
/// ```
/// use charter_quote::models::QuoteRequest;
/// use chrono::NaiveDate;
///
/// let request = QuoteRequest {
///     boat_id: "37_sear".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
///     duration_hours: 4,
/// };
/// assert_eq!(request.duration_hours, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The catalog identifier of the boat (e.g., "37_sear").
    pub boat_id: String,
    /// The charter date.
    pub date: NaiveDate,
    /// The requested duration in whole hours (at least 1).
    pub duration_hours: u32,
}

/// The priced quote for a single charter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// The catalog identifier of the boat.
    pub boat_id: String,
    /// The display name of the boat.
    pub boat_name: String,
    /// The charter date.
    pub date: NaiveDate,
    /// The requested duration in whole hours.
    pub duration_hours: u32,
    /// The vessel base price, before add-ons, tax, or service charge.
    pub price: Decimal,
    /// The seasonal tier the date resolved to.
    pub tier: SeasonTier,
    /// Human-readable notes explaining which pricing path was taken, in order.
    pub notes: Vec<String>,
    /// True when no configured rate matched and the hourly fallback priced the quote.
    pub fallback_applied: bool,
    /// The audit trail of pipeline decisions.
    pub audit_steps: Vec<AuditStep>,
}

impl QuoteResult {
    /// Renders the plain-text quote details handed to downstream drafting.
    ///
    /// # Example
    ///
    /// ```
    /// use charter_quote::calculation::calculate_quote;
    /// use charter_quote::config::CatalogLoader;
    /// use charter_quote::models::QuoteRequest;
    /// use chrono::NaiveDate;
    ///
    /// let loader = CatalogLoader::embedded().unwrap();
    /// let request = QuoteRequest {
    ///     boat_id: "37_sear".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(), // Saturday
    ///     duration_hours: 4,
    /// };
    /// let quote = calculate_quote(&request, loader.catalog()).unwrap();
    ///
    /// assert!(quote.summary().contains("Price: $1100"));
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "Vessel: {}\nDate: {}\nDuration: {} Hours\nPrice: ${}\nPricing Notes: {}",
            self.boat_name,
            self.date,
            self.duration_hours,
            self.price.normalize(),
            self.notes.join(", ")
        )
    }
}
