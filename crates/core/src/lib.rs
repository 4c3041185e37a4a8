//! eth2usd Core - Valuation engine for on-chain balances.
//!
//! This crate turns raw integer balances and raw oracle answers into exact
//! USD valuations, flags missing and stale prices per row, and aggregates the
//! rows into a total. Balances and prices come from the providers defined in
//! the `eth2usd-market-data` crate.

pub mod aggregate;
pub mod constants;
pub mod decimal;
pub mod errors;
pub mod valuation;

// Re-export the engine surface
pub use aggregate::{aggregate, render, to_json, to_text, OutputFormat, ValuationResult};
pub use decimal::DecimalString;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
