//! Form intake for quote and billing requests.
//!
//! Form fields arrive as loosely-typed optional strings. This module
//! normalises them into the strict [`QuoteRequest`] and [`BillingInputs`]
//! shapes before they reach the pricing pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineResult, QuoteError};

use super::{BillingInputs, QuoteRequest};

/// Duration selected by the quote form when the field is left blank.
pub const DEFAULT_DURATION_HOURS: u32 = 4;

/// Beverage package identifier meaning "no package".
pub const NO_BEVERAGE_PACKAGE: &str = "none";

/// Raw quote form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    /// The selected boat identifier.
    #[serde(default)]
    pub boat_id: Option<String>,
    /// The selected date, as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// The selected duration in hours, as text.
    #[serde(default)]
    pub duration: Option<String>,
}

/// Raw billing form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingForm {
    /// The vessel base price, possibly formatted as currency (e.g., "$1,100").
    #[serde(default)]
    pub vessel_base: Option<String>,
    /// The discount percentage.
    #[serde(default)]
    pub discount_percent: Option<String>,
    /// The food package amount, possibly formatted as currency.
    #[serde(default)]
    pub food_amount: Option<String>,
    /// The selected beverage package identifier.
    #[serde(default)]
    pub beverage_package_id: Option<String>,
    /// The number of guests.
    #[serde(default)]
    pub guest_count: Option<String>,
    /// The duration in hours.
    #[serde(default)]
    pub duration_hours: Option<String>,
}

impl TryFrom<QuoteForm> for QuoteRequest {
    type Error = QuoteError;

    /// Normalises a quote form.
    ///
    /// # Example
    ///
    /// ```
    /// use charter_quote::models::{QuoteForm, QuoteRequest};
    ///
    /// let form = QuoteForm {
    ///     boat_id: Some("37_sear".to_string()),
    ///     date: Some("2026-06-06".to_string()),
    ///     duration: None,
    /// };
    /// let request = QuoteRequest::try_from(form).unwrap();
    /// assert_eq!(request.duration_hours, 4);
    /// ```
    fn try_from(form: QuoteForm) -> EngineResult<Self> {
        let boat_id = non_blank(form.boat_id).ok_or_else(|| QuoteError::InvalidRequest {
            field: "boat_id".to_string(),
            message: "please select a boat".to_string(),
        })?;

        let date_text = non_blank(form.date).ok_or_else(|| QuoteError::InvalidRequest {
            field: "date".to_string(),
            message: "please select a date".to_string(),
        })?;
        let date = parse_calendar_date(&date_text)?;

        let duration_hours = match non_blank(form.duration) {
            None => DEFAULT_DURATION_HOURS,
            Some(text) => parse_duration(&text)?,
        };

        Ok(QuoteRequest {
            boat_id,
            date,
            duration_hours,
        })
    }
}

impl From<BillingForm> for BillingInputs {
    /// Normalises a billing form.
    ///
    /// Currency fields that fail to parse become zero, the discount is clamped
    /// to 0-100, a missing or zero guest count becomes 1, and a missing
    /// beverage package becomes "none".
    fn from(form: BillingForm) -> Self {
        let discount_percent = parse_currency(form.discount_percent.as_deref())
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

        let guest_count = form
            .guest_count
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(1)
            .max(1);

        let duration_hours = form
            .duration_hours
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|hours| *hours >= 1)
            .unwrap_or(DEFAULT_DURATION_HOURS);

        BillingInputs {
            vessel_base: parse_currency(form.vessel_base.as_deref()),
            discount_percent,
            food_amount: parse_currency(form.food_amount.as_deref()),
            beverage_package_id: non_blank(form.beverage_package_id)
                .unwrap_or_else(|| NO_BEVERAGE_PACKAGE.to_string()),
            guest_count,
            duration_hours,
        }
    }
}

/// Parses a `YYYY-MM-DD` string into its calendar components.
///
/// The string is read as year, month, and day directly; it is never treated
/// as a UTC instant.
///
/// # Example
///
/// ```
/// use charter_quote::models::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let date = parse_calendar_date("2026-06-01").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
/// ```
pub fn parse_calendar_date(text: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| QuoteError::InvalidRequest {
        field: "date".to_string(),
        message: format!("expected YYYY-MM-DD, got '{}': {}", text.trim(), e),
    })
}

/// Parses a currency-like string, coercing anything non-numeric or negative to zero.
///
/// # Example
///
/// ```
/// use charter_quote::models::parse_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_currency(Some("$1,250.50")), Decimal::new(125050, 2));
/// assert_eq!(parse_currency(Some("TBD")), Decimal::ZERO);
/// assert_eq!(parse_currency(None), Decimal::ZERO);
/// ```
pub fn parse_currency(text: Option<&str>) -> Decimal {
    let Some(text) = text else {
        return Decimal::ZERO;
    };

    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();

    Decimal::from_str(&cleaned)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}

fn parse_duration(text: &str) -> EngineResult<u32> {
    let hours = text
        .trim()
        .parse::<u32>()
        .map_err(|_| QuoteError::InvalidRequest {
            field: "duration".to_string(),
            message: format!("expected whole hours, got '{}'", text.trim()),
        })?;

    if hours < 1 {
        return Err(QuoteError::InvalidRequest {
            field: "duration".to_string(),
            message: "duration must be at least 1 hour".to_string(),
        });
    }

    Ok(hours)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn quote_form(boat_id: Option<&str>, date: Option<&str>, duration: Option<&str>) -> QuoteForm {
        QuoteForm {
            boat_id: boat_id.map(str::to_string),
            date: date.map(str::to_string),
            duration: duration.map(str::to_string),
        }
    }

    #[test]
    fn test_quote_form_converts_to_request() {
        let form = quote_form(Some("57_pcat"), Some("2026-06-01"), Some("3"));

        let request = QuoteRequest::try_from(form).unwrap();

        assert_eq!(request.boat_id, "57_pcat");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        assert_eq!(request.duration_hours, 3);
    }

    #[test]
    fn test_blank_duration_defaults_to_four_hours() {
        let form = quote_form(Some("37_sear"), Some("2026-06-01"), Some("  "));

        let request = QuoteRequest::try_from(form).unwrap();

        assert_eq!(request.duration_hours, 4);
    }

    #[test]
    fn test_missing_boat_is_rejected() {
        let form = quote_form(None, Some("2026-06-01"), Some("4"));

        match QuoteRequest::try_from(form) {
            Err(QuoteError::InvalidRequest { field, .. }) => assert_eq!(field, "boat_id"),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let form = quote_form(Some("37_sear"), Some(""), Some("4"));

        match QuoteRequest::try_from(form) {
            Err(QuoteError::InvalidRequest { field, .. }) => assert_eq!(field, "date"),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let form = quote_form(Some("37_sear"), Some("06/01/2026"), Some("4"));

        match QuoteRequest::try_from(form) {
            Err(QuoteError::InvalidRequest { field, message }) => {
                assert_eq!(field, "date");
                assert!(message.contains("06/01/2026"));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_text_durations_are_rejected() {
        for duration in ["0", "four", "-2"] {
            let form = quote_form(Some("37_sear"), Some("2026-06-01"), Some(duration));
            match QuoteRequest::try_from(form) {
                Err(QuoteError::InvalidRequest { field, .. }) => assert_eq!(field, "duration"),
                other => panic!("Expected InvalidRequest for {}, got {:?}", duration, other),
            }
        }
    }

    #[test]
    fn test_date_parsing_keeps_the_calendar_day() {
        // Midnight-adjacent dates must not shift to the previous day.
        let date = parse_calendar_date(" 2026-06-20 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 6, 20).unwrap());
    }

    #[test]
    fn test_parse_currency_strips_formatting() {
        assert_eq!(parse_currency(Some("$1,100")), dec("1100"));
        assert_eq!(parse_currency(Some(" 200.50 ")), dec("200.50"));
    }

    #[test]
    fn test_parse_currency_coerces_garbage_and_negatives_to_zero() {
        assert_eq!(parse_currency(Some("call us")), Decimal::ZERO);
        assert_eq!(parse_currency(Some("")), Decimal::ZERO);
        assert_eq!(parse_currency(Some("-50")), Decimal::ZERO);
    }

    #[test]
    fn test_billing_form_defaults() {
        let inputs: BillingInputs = BillingForm::default().into();

        assert_eq!(inputs.vessel_base, Decimal::ZERO);
        assert_eq!(inputs.discount_percent, Decimal::ZERO);
        assert_eq!(inputs.food_amount, Decimal::ZERO);
        assert_eq!(inputs.beverage_package_id, "none");
        assert_eq!(inputs.guest_count, 1);
        assert_eq!(inputs.duration_hours, 4);
    }

    #[test]
    fn test_billing_form_clamps_discount() {
        let form = BillingForm {
            discount_percent: Some("150".to_string()),
            ..Default::default()
        };
        let inputs: BillingInputs = form.into();
        assert_eq!(inputs.discount_percent, dec("100"));
    }

    #[test]
    fn test_billing_form_zero_guests_becomes_one() {
        let form = BillingForm {
            guest_count: Some("0".to_string()),
            ..Default::default()
        };
        let inputs: BillingInputs = form.into();
        assert_eq!(inputs.guest_count, 1);
    }

    #[test]
    fn test_billing_form_full_conversion() {
        let form = BillingForm {
            vessel_base: Some("$1,000".to_string()),
            discount_percent: Some("10".to_string()),
            food_amount: Some("200".to_string()),
            beverage_package_id: Some("call".to_string()),
            guest_count: Some("10".to_string()),
            duration_hours: Some("4".to_string()),
        };
        let inputs: BillingInputs = form.into();

        assert_eq!(inputs.vessel_base, dec("1000"));
        assert_eq!(inputs.discount_percent, dec("10"));
        assert_eq!(inputs.food_amount, dec("200"));
        assert_eq!(inputs.beverage_package_id, "call");
        assert_eq!(inputs.guest_count, 10);
        assert_eq!(inputs.duration_hours, 4);
    }
}
