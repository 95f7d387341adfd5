//! Error types for the Charter Quote Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a quote.

use thiserror::Error;

use crate::models::SeasonTier;

/// The main error type for the Charter Quote Engine.
///
/// An unresolvable price combination is deliberately absent: the pricer
/// degrades to the hourly fallback instead of failing.
///
/// # Example
///
/// ```
/// use charter_quote::error::QuoteError;
///
/// let error = QuoteError::BoatNotFound {
///     boat_id: "nonexistent".to_string(),
/// };
/// assert_eq!(error.to_string(), "Boat not found: nonexistent");
/// ```
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The requested boat is not in the catalog.
    #[error("Boat not found: {boat_id}")]
    BoatNotFound {
        /// The boat identifier that was not found.
        boat_id: String,
    },

    /// The catalog has no pricing rule for the boat in the resolved tier.
    #[error("Pricing rule not found for boat '{boat_id}' in {tier}")]
    PricingRuleNotFound {
        /// The boat identifier.
        boat_id: String,
        /// The tier the date resolved to.
        tier: SeasonTier,
    },

    /// A catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The catalog parsed but failed startup validation.
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// A description of the inconsistency.
        message: String,
    },

    /// A form input could not be normalised into a quote or billing request.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return QuoteError.
pub type EngineResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_not_found_displays_id() {
        let error = QuoteError::BoatNotFound {
            boat_id: "nonexistent".to_string(),
        };
        assert_eq!(error.to_string(), "Boat not found: nonexistent");
    }

    #[test]
    fn test_pricing_rule_not_found_displays_boat_and_tier() {
        let error = QuoteError::PricingRuleNotFound {
            boat_id: "37_sear".to_string(),
            tier: SeasonTier::Tier2,
        };
        assert_eq!(
            error.to_string(),
            "Pricing rule not found for boat '37_sear' in Tier 2"
        );
    }

    #[test]
    fn test_catalog_parse_error_displays_path_and_message() {
        let error = QuoteError::CatalogParseError {
            path: "/catalog/pricing.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse catalog file '/catalog/pricing.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_request_displays_field_and_message() {
        let error = QuoteError::InvalidRequest {
            field: "date".to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid request field 'date': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<QuoteError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_boat_not_found() -> EngineResult<()> {
            Err(QuoteError::BoatNotFound {
                boat_id: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_boat_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
