//! Charter Quote Engine
//!
//! This crate prices boat charters: it maps a calendar date to a seasonal tier,
//! resolves the pricing rule for a boat in that tier, prices the vessel for the
//! requested day and duration, and expands the vessel price into a full billing
//! breakdown with discounts, food and beverage packages, tax, and service charge.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
