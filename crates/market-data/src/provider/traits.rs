//! Provider trait definitions.
//!
//! A balance provider and a price feed provider together supply everything
//! the valuation engine needs for one asset. Implementations own all blocking
//! I/O (RPC calls, file reads); the engine itself never waits on anything.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Address, AssetBalance, RawQuote, Token};

/// Source of raw on-chain balances.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use eth2usd_market_data::provider::BalanceProvider;
///
/// struct FixedBalance;
///
/// #[async_trait]
/// impl BalanceProvider for FixedBalance {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn balance_of(&self, _account: &Address, _token: &Token)
///         -> Result<AssetBalance, MarketDataError>
///     {
///         Ok(AssetBalance::new(1_000_000u32.into(), 6))
///     }
/// }
/// ```
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the balance of `token` held by `account`.
    ///
    /// For the native coin (`token.is_native()`) this is the account's own
    /// balance; otherwise it is the token contract's `balanceOf(account)`.
    async fn balance_of(
        &self,
        account: &Address,
        token: &Token,
    ) -> Result<AssetBalance, MarketDataError>;
}

/// Source of USD price quotes.
#[async_trait]
pub trait PriceFeedProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest USD quote for `token`.
    ///
    /// Returns `Ok(None)` when no feed exists for the asset. Transport and
    /// decoding failures are errors.
    async fn latest_quote(&self, token: &Token) -> Result<Option<RawQuote>, MarketDataError>;
}
