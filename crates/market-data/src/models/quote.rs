use chrono::{DateTime, Utc};
use num_bigint::{BigInt, BigUint};

use crate::errors::MarketDataError;

/// Largest accepted decimals count. ERC-20 `decimals()` and feed decimals are `uint8`.
pub const MAX_DECIMALS: u32 = u8::MAX as u32;

/// Rejects decimals counts that do not fit the on-chain `uint8`.
pub fn check_decimals(decimals: u32, asset: &str) -> Result<u32, MarketDataError> {
    if decimals > MAX_DECIMALS {
        return Err(MarketDataError::InvalidData(format!(
            "decimals {} for {} exceeds {}",
            decimals, asset, MAX_DECIMALS
        )));
    }
    Ok(decimals)
}

/// Raw balance of one asset as reported by a balance provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetBalance {
    /// Balance in the asset's smallest unit (e.g. wei)
    pub raw: BigUint,

    /// Number of implied fractional digits of `raw`
    pub decimals: u32,

    /// Symbol reported on-chain, if any
    pub symbol: Option<String>,
}

impl AssetBalance {
    pub fn new(raw: BigUint, decimals: u32) -> Self {
        Self {
            raw,
            decimals,
            symbol: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Latest answer of a USD price feed.
///
/// `answer` is signed because price oracles report `int256`; a non-positive
/// answer is treated downstream as "no price".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawQuote {
    /// Price in the feed's own decimals
    pub answer: BigInt,

    /// Number of implied fractional digits of `answer`
    pub decimals: u32,

    /// When the feed last updated this answer
    pub updated_at: DateTime<Utc>,
}

impl RawQuote {
    pub fn new(answer: BigInt, decimals: u32, updated_at: DateTime<Utc>) -> Self {
        Self {
            answer,
            decimals,
            updated_at,
        }
    }
}
