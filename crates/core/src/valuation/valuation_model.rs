//! Valuation domain models.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use eth2usd_market_data::RawQuote;

use crate::constants::{
    default_freshness_window, AMOUNT_DECIMAL_PRECISION, DEFAULT_MAX_CONCURRENCY,
    PRICE_DECIMAL_PRECISION, USD_DECIMAL_PRECISION,
};
use crate::decimal::{DecimalString, ScaledAmount};
use crate::errors::ValuationError;

/// Where a row's USD value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValuationSource {
    /// Priced from a fresh quote (or unpriced because no quote exists)
    Priced,
    /// Priced from a quote older than the freshness window
    PricedStale,
    /// The collaborator failed before the asset could be valued
    Error,
}

impl ValuationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValuationSource::Priced => "priced",
            ValuationSource::PricedStale => "priced-stale",
            ValuationSource::Error => "error",
        }
    }
}

impl fmt::Display for ValuationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One asset's valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRow {
    pub symbol: String,
    pub amount: DecimalString,
    pub usd: DecimalString,
    pub source: ValuationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValuationRow {
    /// A successfully priced row.
    pub fn priced(symbol: impl Into<String>, amount: DecimalString, usd: DecimalString) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            usd,
            source: ValuationSource::Priced,
            error: None,
        }
    }

    /// A row priced from a stale quote. The USD value is kept.
    pub fn stale(symbol: impl Into<String>, amount: DecimalString, usd: DecimalString) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            usd,
            source: ValuationSource::PricedStale,
            error: Some(ValuationError::StalePrice.to_string()),
        }
    }

    /// A row whose asset has no usable price. The amount is kept, USD is zero.
    pub fn unpriced(symbol: impl Into<String>, amount: DecimalString) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            usd: DecimalString::zero(),
            source: ValuationSource::Priced,
            error: Some(ValuationError::NoPrice.to_string()),
        }
    }

    /// A row for an asset that could not be valued at all.
    pub fn failed(
        symbol: impl Into<String>,
        amount: DecimalString,
        error: &ValuationError,
    ) -> Self {
        let message = error.to_string();
        debug_assert!(!message.trim().is_empty(), "error rows carry a message");
        Self {
            symbol: symbol.into(),
            amount,
            usd: DecimalString::zero(),
            source: ValuationSource::Error,
            error: Some(message),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A USD price quote: the feed's raw answer plus when it was last updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub answer: BigInt,
    pub decimals: u32,
    pub updated_at: DateTime<Utc>,
}

impl PriceQuote {
    pub fn new(answer: impl Into<BigInt>, decimals: u32, updated_at: DateTime<Utc>) -> Self {
        Self {
            answer: answer.into(),
            decimals,
            updated_at,
        }
    }

    /// The price as a scaled amount, or `None` when the answer is not strictly positive.
    pub fn price(&self) -> Option<ScaledAmount> {
        if !self.answer.is_positive() {
            return None;
        }
        self.answer
            .to_biguint()
            .map(|magnitude| ScaledAmount::new(magnitude, self.decimals))
    }

    /// True when more than `window` has elapsed since the quote was updated.
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.updated_at) > window
    }
}

impl From<RawQuote> for PriceQuote {
    fn from(quote: RawQuote) -> Self {
        Self {
            answer: quote.answer,
            decimals: quote.decimals,
            updated_at: quote.updated_at,
        }
    }
}

/// Tunables for the valuation policy and service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationConfig {
    /// Fractional digits of displayed quantities
    pub amount_precision: u32,
    /// Fractional digits kept for prices before multiplying
    pub price_precision: u32,
    /// Fractional digits of USD values
    pub usd_precision: u32,
    /// Quotes older than this are stale
    pub freshness_window: Duration,
    /// Maximum number of assets fetched at once
    pub max_concurrency: usize,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            amount_precision: AMOUNT_DECIMAL_PRECISION,
            price_precision: PRICE_DECIMAL_PRECISION,
            usd_precision: USD_DECIMAL_PRECISION,
            freshness_window: default_freshness_window(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl ValuationConfig {
    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}
