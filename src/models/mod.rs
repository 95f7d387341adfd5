//! Core data models for the Charter Quote Engine.
//!
//! This module contains the domain models shared by the pricing pipeline:
//! seasonal tiers, quote requests and results, billing inputs and breakdowns,
//! audit steps, and the form intake that produces strict requests.

mod audit;
mod billing;
mod quote;
mod request;
mod season;

pub use audit::AuditStep;
pub use billing::{BillingBreakdown, BillingInputs};
pub use quote::{QuoteRequest, QuoteResult};
pub use request::{
    BillingForm, DEFAULT_DURATION_HOURS, NO_BEVERAGE_PACKAGE, QuoteForm, parse_calendar_date,
    parse_currency,
};
pub use season::SeasonTier;
