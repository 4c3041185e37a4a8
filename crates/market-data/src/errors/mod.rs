//! Error types for the collaborator layer.
//!
//! Everything that can go wrong before the valuation engine is invoked
//! (bad addresses, unreadable token lists, provider failures) is reported as a
//! [`MarketDataError`]. The engine never inspects these beyond their message:
//! each one becomes a single error row.

use thiserror::Error;

/// Errors that can occur while fetching balances or price quotes.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The value is not a `0x`-prefixed 20-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The provider has no balance for the requested asset.
    #[error("no balance for {asset}")]
    BalanceNotFound {
        /// Address or pseudo-address of the asset
        asset: String,
    },

    /// The provider was asked about an account it does not serve.
    #[error("unknown account: {0}")]
    UnknownAccount(String),

    /// A provider-specific error occurred.
    #[error("provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// Data returned by the provider could not be decoded.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Failed to read a token list or snapshot from disk.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A token list or snapshot is not valid JSON for its schema.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarketDataError {
    /// Returns true if the error concerns the input data rather than the provider.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MarketDataError::InvalidAddress(_) | MarketDataError::UnknownAccount(_)
        )
    }
}
