//! Seasonal pricing tiers.

use serde::{Deserialize, Serialize};

/// A seasonal pricing period.
///
/// Tiers are derived from the calendar date and never stored on a quote
/// request. See [`crate::calculation::get_tier`] for the date boundaries.
///
/// # Example
///
/// ```
/// use charter_quote::models::SeasonTier;
///
/// assert_eq!(SeasonTier::Tier2.to_string(), "Tier 2");
/// assert_eq!(serde_json::to_string(&SeasonTier::Tier1).unwrap(), "\"TIER_1\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonTier {
    /// Shoulder season: May 1 - June 19 and September 7 - October 31.
    #[serde(rename = "TIER_1")]
    Tier1,
    /// Peak season: June 20 - September 6.
    #[serde(rename = "TIER_2")]
    Tier2,
}

impl SeasonTier {
    /// Both tiers, in catalog order.
    pub const ALL: [SeasonTier; 2] = [SeasonTier::Tier1, SeasonTier::Tier2];

    /// Returns the wire code for this tier (`"TIER_1"` or `"TIER_2"`).
    pub fn code(&self) -> &'static str {
        match self {
            SeasonTier::Tier1 => "TIER_1",
            SeasonTier::Tier2 => "TIER_2",
        }
    }
}

impl std::fmt::Display for SeasonTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonTier::Tier1 => write!(f, "Tier 1"),
            SeasonTier::Tier2 => write!(f, "Tier 2"),
        }
    }
}
