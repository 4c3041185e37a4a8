//! Asset valuation.
//!
//! `valuation_policy` turns one asset's raw balance and raw quote into a
//! [`ValuationRow`]; `valuation_service` drives the balance and price
//! providers for a whole token list and hands the rows to the aggregator.

mod valuation_model;
mod valuation_policy;
mod valuation_service;

pub use valuation_model::*;
pub use valuation_policy::*;
pub use valuation_service::ValuationService;
pub use valuation_service::ValuationServiceTrait;
