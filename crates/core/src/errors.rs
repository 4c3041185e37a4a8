//! Core error types for the valuation engine.
//!
//! Only the batch-level precondition (nothing to value) is surfaced as
//! [`Error`]; rendering reports [`RenderError`]. Per-asset failures are captured as
//! [`ValuationError`]s and stored on the affected row instead.

use thiserror::Error;

use eth2usd_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no tokens to process")]
    NoTokens,
}

/// Errors raised when a decimal string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    #[error("empty decimal string")]
    Empty,

    #[error("invalid decimal string '{0}'")]
    Malformed(String),
}

/// Per-row valuation failures.
///
/// The `Display` text of each variant is what ends up in a row's `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// The price is absent or not strictly positive.
    #[error("no price available")]
    NoPrice,

    /// The price is valid but older than the freshness window. A warning only.
    #[error("stale price")]
    StalePrice,

    /// An arithmetic input was not a decimal number.
    #[error("{0}")]
    Parse(#[from] DecimalError),

    /// Opaque failure from the balance or price collaborator.
    #[error("{0}")]
    Collaborator(String),
}

impl From<MarketDataError> for ValuationError {
    fn from(error: MarketDataError) -> Self {
        ValuationError::Collaborator(error.to_string())
    }
}

/// Errors raised while rendering a valuation result.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to format text output")]
    Format(#[from] std::fmt::Error),

    #[error("failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported output format '{0}'")]
    UnsupportedFormat(String),
}
