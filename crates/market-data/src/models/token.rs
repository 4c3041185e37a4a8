use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

use super::quote::check_decimals;

/// Pseudo-address used in token lists for the chain's native coin.
pub const NATIVE_ASSET_ADDRESS: &str = "eth://native";

/// Symbol of the native coin.
pub const NATIVE_ASSET_SYMBOL: &str = "ETH";

/// Decimals of the native coin (wei per ether).
pub const NATIVE_ASSET_DECIMALS: u32 = 18;

/// Display label used when neither the token list nor the provider knows a symbol.
pub const FALLBACK_SYMBOL: &str = "TKN";

/// One entry of a tokens whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Contract address, or [`NATIVE_ASSET_ADDRESS`] for the native coin
    pub address: String,

    /// Display symbol; empty means "ask the provider"
    #[serde(default)]
    pub symbol: String,

    /// Declared decimals, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
}

impl Token {
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Option<u32>,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// The native coin entry used when no token list is supplied.
    pub fn native() -> Self {
        Self::new(
            NATIVE_ASSET_ADDRESS,
            NATIVE_ASSET_SYMBOL,
            Some(NATIVE_ASSET_DECIMALS),
        )
    }

    pub fn is_native(&self) -> bool {
        self.address == NATIVE_ASSET_ADDRESS
    }

    /// Lowercased address, used as a lookup key by providers.
    pub fn key(&self) -> String {
        self.address.to_ascii_lowercase()
    }
}

/// Returns the built-in token list (native coin only).
pub fn default_tokens() -> Vec<Token> {
    vec![Token::native()]
}

/// Loads a tokens whitelist from a JSON file, or the default list when `path` is `None`.
pub fn load_tokens(path: Option<&Path>) -> Result<Vec<Token>, MarketDataError> {
    let Some(path) = path else {
        return Ok(default_tokens());
    };
    let contents = fs::read_to_string(path)?;
    let tokens = parse_tokens(&contents)?;
    debug!("Loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}

/// Parses a JSON array of tokens.
///
/// Declared decimals above the on-chain `uint8` range are rejected.
pub fn parse_tokens(json: &str) -> Result<Vec<Token>, MarketDataError> {
    let tokens: Vec<Token> = serde_json::from_str(json)?;
    for token in &tokens {
        if let Some(decimals) = token.decimals {
            check_decimals(decimals, &token.address)?;
        }
    }
    Ok(tokens)
}
