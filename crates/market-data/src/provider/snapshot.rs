//! Offline provider backed by a JSON snapshot.
//!
//! A snapshot captures, for one account, the raw balances and raw price feed
//! answers that an RPC-backed collaborator would have fetched:
//!
//! ```json
//! {
//!   "account": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
//!   "assets": [
//!     {
//!       "address": "eth://native",
//!       "balance": "1500000000000000000",
//!       "price": { "answer": "305000000000", "decimals": 8, "updatedAt": 1700000000 }
//!     },
//!     {
//!       "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
//!       "symbol": "USDC",
//!       "decimals": 6,
//!       "balance": 2500000
//!     }
//!   ]
//! }
//! ```
//!
//! Integers may be given as JSON numbers or as decimal strings (needed for
//! anything beyond 64 bits). Assets without a `price` have no feed.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Deserializer};

use crate::errors::MarketDataError;
use crate::models::{
    check_decimals, Address, AssetBalance, RawQuote, Token, NATIVE_ASSET_DECIMALS,
};

use super::traits::{BalanceProvider, PriceFeedProvider};

const PROVIDER_ID: &str = "SNAPSHOT";

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    account: Address,
    #[serde(default)]
    assets: Vec<SnapshotAsset>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotAsset {
    address: String,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    decimals: Option<u32>,
    #[serde(deserialize_with = "deserialize_biguint")]
    balance: BigUint,
    #[serde(default)]
    price: Option<SnapshotPrice>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotPrice {
    #[serde(deserialize_with = "deserialize_bigint")]
    answer: BigInt,
    decimals: u32,
    #[serde(with = "chrono::serde::ts_seconds")]
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerRepr {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_biguint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    match IntegerRepr::deserialize(deserializer)? {
        IntegerRepr::Text(text) => BigUint::from_str(text.trim()).map_err(|_| {
            serde::de::Error::custom(format!("invalid unsigned integer '{}'", text))
        }),
        IntegerRepr::Unsigned(value) => Ok(BigUint::from(value)),
        IntegerRepr::Signed(value) => Err(serde::de::Error::custom(format!(
            "balance must not be negative, got {}",
            value
        ))),
    }
}

fn deserialize_bigint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
    match IntegerRepr::deserialize(deserializer)? {
        IntegerRepr::Text(text) => BigInt::from_str(text.trim())
            .map_err(|_| serde::de::Error::custom(format!("invalid integer '{}'", text))),
        IntegerRepr::Unsigned(value) => Ok(BigInt::from(value)),
        IntegerRepr::Signed(value) => Ok(BigInt::from(value)),
    }
}

/// Balance and price provider serving a single account from a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    account: Address,
    assets: HashMap<String, SnapshotAsset>,
}

impl SnapshotProvider {
    /// Parses a snapshot from its JSON text.
    ///
    /// Balance and feed decimals above the on-chain `uint8` range are rejected.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        for asset in &file.assets {
            if let Some(decimals) = asset.decimals {
                check_decimals(decimals, &asset.address)?;
            }
            if let Some(price) = &asset.price {
                check_decimals(price.decimals, &asset.address)?;
            }
        }
        let assets = file
            .assets
            .into_iter()
            .map(|asset| (asset.address.to_ascii_lowercase(), asset))
            .collect();
        Ok(Self {
            account: file.account,
            assets,
        })
    }

    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> Result<Self, MarketDataError> {
        let contents = fs::read_to_string(path)?;
        let provider = Self::from_json(&contents)?;
        debug!(
            "Loaded snapshot for {} with {} assets from {}",
            provider.account,
            provider.assets.len(),
            path.display()
        );
        Ok(provider)
    }

    /// The account this snapshot was taken for.
    pub fn account(&self) -> &Address {
        &self.account
    }

    fn asset(&self, token: &Token) -> Option<&SnapshotAsset> {
        self.assets.get(&token.key())
    }
}

#[async_trait]
impl BalanceProvider for SnapshotProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn balance_of(
        &self,
        account: &Address,
        token: &Token,
    ) -> Result<AssetBalance, MarketDataError> {
        if *account != self.account {
            return Err(MarketDataError::UnknownAccount(account.to_string()));
        }
        let asset = self
            .asset(token)
            .ok_or_else(|| MarketDataError::BalanceNotFound {
                asset: token.address.clone(),
            })?;

        let decimals = match asset.decimals.or(token.decimals) {
            Some(decimals) => decimals,
            None if token.is_native() => NATIVE_ASSET_DECIMALS,
            None => {
                return Err(MarketDataError::InvalidData(format!(
                    "missing decimals for {}",
                    token.address
                )))
            }
        };

        let mut balance = AssetBalance::new(asset.balance.clone(), decimals);
        if let Some(symbol) = &asset.symbol {
            balance = balance.with_symbol(symbol.clone());
        }
        Ok(balance)
    }
}

#[async_trait]
impl PriceFeedProvider for SnapshotProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, token: &Token) -> Result<Option<RawQuote>, MarketDataError> {
        Ok(self
            .asset(token)
            .and_then(|asset| asset.price.as_ref())
            .map(|price| RawQuote::new(price.answer.clone(), price.decimals, price.updated_at)))
    }
}
