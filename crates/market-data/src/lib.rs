//! eth2usd Market Data Crate
//!
//! This crate holds everything the valuation engine consumes from the outside
//! world, without implementing any network protocol itself.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+
//! |   Token list     | --> |     Token        |  (address, symbol, decimals)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!        +-------------------------+-------------------------+
//!        |                                                   |
//!        v                                                   v
//! +------------------+                              +------------------+
//! | BalanceProvider  |  -> AssetBalance             | PriceFeedProvider|  -> RawQuote
//! +------------------+     (raw, decimals, symbol)  +------------------+     (answer, decimals,
//!                                                                            updated_at)
//! ```
//!
//! # Core Types
//!
//! - [`Address`] - 20-byte account/contract address
//! - [`Token`] - Token whitelist entry
//! - [`AssetBalance`] - Raw balance in the asset's smallest unit
//! - [`RawQuote`] - Raw USD price feed answer
//! - [`SnapshotProvider`] - Offline provider backed by a JSON snapshot

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{
    check_decimals, default_tokens, is_hex_address, load_tokens, parse_tokens, Address,
    AssetBalance, RawQuote, Token, FALLBACK_SYMBOL, MAX_DECIMALS, NATIVE_ASSET_ADDRESS,
    NATIVE_ASSET_DECIMALS, NATIVE_ASSET_SYMBOL,
};

pub use provider::{BalanceProvider, PriceFeedProvider, SnapshotProvider};
