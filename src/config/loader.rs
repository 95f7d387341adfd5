//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the pricing
//! catalog from YAML files, either from a directory or from the copy compiled
//! into the crate.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineResult, QuoteError};

use super::types::{BeveragesConfig, BoatsConfig, Catalog, HolidaysConfig, PricingConfig};

const BOATS_FILE: &str = "boats.yaml";
const PRICING_FILE: &str = "pricing.yaml";
const HOLIDAYS_FILE: &str = "holidays.yaml";
const BEVERAGES_FILE: &str = "beverages.yaml";

const EMBEDDED_BOATS: &str = include_str!("../../config/charter/boats.yaml");
const EMBEDDED_PRICING: &str = include_str!("../../config/charter/pricing.yaml");
const EMBEDDED_HOLIDAYS: &str = include_str!("../../config/charter/holidays.yaml");
const EMBEDDED_BEVERAGES: &str = include_str!("../../config/charter/beverages.yaml");

/// Loads and provides access to the pricing catalog.
///
/// # Directory Structure
///
/// ```text
/// config/charter/
/// ├── boats.yaml      # Vessels and their pricing category
/// ├── pricing.yaml    # One pricing rule per (boat, tier)
/// ├── holidays.yaml   # Holiday windows (carried, not priced)
/// └── beverages.yaml  # Beverage packages
/// ```
///
/// # Example
///
/// ```
/// use charter_quote::config::CatalogLoader;
///
/// let loader = CatalogLoader::embedded().unwrap();
/// let boat = loader.catalog().boat("57_pcat").unwrap();
/// assert_eq!(boat.name, "57' Power Catamaran");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` on success, or an error if:
    /// - Any catalog file is missing (`CatalogNotFound`)
    /// - Any file contains invalid YAML or missing fields (`CatalogParseError`)
    /// - The catalog fails validation (`InvalidCatalog`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use charter_quote::config::CatalogLoader;
    ///
    /// let loader = CatalogLoader::load("./config/charter")?;
    /// # Ok::<(), charter_quote::error::QuoteError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let boats = Self::load_yaml::<BoatsConfig>(&path.join(BOATS_FILE))?;
        let pricing = Self::load_yaml::<PricingConfig>(&path.join(PRICING_FILE))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join(HOLIDAYS_FILE))?;
        let beverages = Self::load_yaml::<BeveragesConfig>(&path.join(BEVERAGES_FILE))?;

        let loader = Self::assemble(boats, pricing, holidays, beverages)?;
        info!(
            path = %path.display(),
            boats = loader.catalog.boats().len(),
            rules = loader.catalog.rules().len(),
            "Loaded pricing catalog"
        );
        Ok(loader)
    }

    /// Loads the catalog shipped with the crate.
    pub fn embedded() -> EngineResult<Self> {
        let boats = Self::parse_yaml::<BoatsConfig>(EMBEDDED_BOATS, BOATS_FILE)?;
        let pricing = Self::parse_yaml::<PricingConfig>(EMBEDDED_PRICING, PRICING_FILE)?;
        let holidays = Self::parse_yaml::<HolidaysConfig>(EMBEDDED_HOLIDAYS, HOLIDAYS_FILE)?;
        let beverages = Self::parse_yaml::<BeveragesConfig>(EMBEDDED_BEVERAGES, BEVERAGES_FILE)?;

        Self::assemble(boats, pricing, holidays, beverages)
    }

    fn assemble(
        boats: BoatsConfig,
        pricing: PricingConfig,
        holidays: HolidaysConfig,
        beverages: BeveragesConfig,
    ) -> EngineResult<Self> {
        let catalog = Catalog::new(
            boats.boats,
            pricing.rules,
            holidays.holidays,
            beverages.packages,
        )?;
        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| QuoteError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| QuoteError::CatalogParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the validated catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
