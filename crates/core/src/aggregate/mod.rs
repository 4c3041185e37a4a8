//! Aggregation and rendering of valuation rows.

mod aggregate_model;
mod aggregator;
mod render;

pub use aggregate_model::{OutputFormat, ValuationResult};
pub use aggregator::aggregate;
pub use render::{render, to_json, to_text};
