//! Collaborator data models
//!
//! This module contains the data types exchanged with balance and price providers:
//! - `address` - 20-byte account/contract addresses
//! - `token` - Token whitelist entries and list loading
//! - `quote` - Raw balances and raw price feed answers

mod address;
mod quote;
mod token;

pub use address::{is_hex_address, Address};
pub use quote::{check_decimals, AssetBalance, RawQuote, MAX_DECIMALS};
pub use token::{
    default_tokens, load_tokens, parse_tokens, Token, FALLBACK_SYMBOL, NATIVE_ASSET_ADDRESS,
    NATIVE_ASSET_DECIMALS, NATIVE_ASSET_SYMBOL,
};
