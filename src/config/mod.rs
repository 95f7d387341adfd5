//! Pricing catalog loading and management for the Charter Quote Engine.
//!
//! This module provides the immutable reference data the engine prices
//! against: boats, pricing rules per (boat, tier), holiday windows, and
//! beverage packages, loaded from YAML and validated once at startup.
//!
//! # Example
//!
//! ```
//! use charter_quote::config::CatalogLoader;
//!
//! let loader = CatalogLoader::embedded().unwrap();
//! println!("{} boats available", loader.catalog().boats().len());
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{
    BeveragePackage, BeveragesConfig, Boat, BoatCategory, BoatsConfig, Catalog, HolidayWindow,
    HolidaysConfig, PricingConfig, PricingRule,
};
