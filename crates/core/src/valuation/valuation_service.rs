use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use log::{debug, error, info, warn};

use eth2usd_market_data::{
    check_decimals, Address, AssetBalance, BalanceProvider, MarketDataError, PriceFeedProvider,
    RawQuote, Token, FALLBACK_SYMBOL,
};

use crate::aggregate::{aggregate, ValuationResult};
use crate::decimal::ScaledAmount;
use crate::errors::{Error, Result, ValuationError};

use super::valuation_model::{PriceQuote, ValuationConfig, ValuationRow};
use super::valuation_policy::{error_row, value_row};

#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Values every token held by `account` and aggregates the rows.
    ///
    /// Per-token failures become error rows; only an empty token list is an error.
    /// Rows are returned in the order of `tokens`.
    ///
    /// Args:
    ///     account: Hex address of the account to value.
    ///     tokens: Assets to value, in display order.
    ///     now: Reference time for staleness checks.
    async fn value_account(
        &self,
        account: &str,
        tokens: &[Token],
        now: DateTime<Utc>,
    ) -> Result<ValuationResult>;

    /// Values a single token for an already-parsed account.
    async fn value_token(
        &self,
        account: &Address,
        token: &Token,
        now: DateTime<Utc>,
    ) -> ValuationRow;
}

#[derive(Clone)]
pub struct ValuationService {
    balance_provider: Arc<dyn BalanceProvider>,
    price_provider: Arc<dyn PriceFeedProvider>,
    config: ValuationConfig,
}

impl ValuationService {
    pub fn new(
        balance_provider: Arc<dyn BalanceProvider>,
        price_provider: Arc<dyn PriceFeedProvider>,
        config: ValuationConfig,
    ) -> Self {
        Self {
            balance_provider,
            price_provider,
            config,
        }
    }

    fn log_collaborator_error(&self, token: &Token, err: &MarketDataError) {
        if err.is_input_error() {
            warn!("token {}: {}", label_for(token), err);
        } else {
            error!("token {}: {}", label_for(token), err);
        }
    }
}

/// Label used for error rows: the listed symbol, else the address.
fn label_for(token: &Token) -> &str {
    if token.symbol.trim().is_empty() {
        &token.address
    } else {
        &token.symbol
    }
}

/// Rejects provider answers whose decimals exceed the on-chain `uint8` range.
fn check_answer_decimals(
    token: &Token,
    balance: &AssetBalance,
    quote: Option<&RawQuote>,
) -> std::result::Result<(), MarketDataError> {
    check_decimals(balance.decimals, &token.address)?;
    if let Some(quote) = quote {
        check_decimals(quote.decimals, &token.address)?;
    }
    Ok(())
}

/// Symbol for a valued row: listed symbol, else provider symbol, else the fallback.
fn resolve_symbol(token: &Token, provider_symbol: Option<&str>) -> String {
    if !token.symbol.trim().is_empty() {
        return token.symbol.clone();
    }
    match provider_symbol {
        Some(symbol) if !symbol.trim().is_empty() => symbol.to_string(),
        _ => FALLBACK_SYMBOL.to_string(),
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn value_account(
        &self,
        account: &str,
        tokens: &[Token],
        now: DateTime<Utc>,
    ) -> Result<ValuationResult> {
        if tokens.is_empty() {
            return Err(Error::NoTokens);
        }
        let start = Instant::now();

        let rows: Vec<ValuationRow> = match account.parse::<Address>() {
            Ok(account) => {
                let pending: Vec<_> = tokens
                    .iter()
                    .map(|token| self.value_token(&account, token, now))
                    .collect();
                stream::iter(pending)
                    .buffered(self.config.max_concurrency.max(1))
                    .collect()
                    .await
            }
            Err(err) => {
                warn!("Invalid account {}: every token is reported as an error", account);
                let err = ValuationError::from(err);
                tokens
                    .iter()
                    .map(|token| error_row(label_for(token), err.clone()))
                    .collect()
            }
        };

        let result = aggregate(rows);
        info!(
            "Valued {} assets for {} in {:?}: total {} USD, {} annotated, {} failed",
            result.rows.len(),
            account,
            start.elapsed(),
            result.total_usd,
            result.error_count(),
            result.failed_count()
        );
        Ok(result)
    }

    async fn value_token(
        &self,
        account: &Address,
        token: &Token,
        now: DateTime<Utc>,
    ) -> ValuationRow {
        let (balance, quote) = futures::join!(
            self.balance_provider.balance_of(account, token),
            self.price_provider.latest_quote(token)
        );

        let balance = match balance {
            Ok(balance) => balance,
            Err(err) => {
                self.log_collaborator_error(token, &err);
                return error_row(label_for(token), err);
            }
        };
        let quote = match quote {
            Ok(quote) => quote,
            Err(err) => {
                self.log_collaborator_error(token, &err);
                return error_row(label_for(token), err);
            }
        };
        if let Err(err) = check_answer_decimals(token, &balance, quote.as_ref()) {
            self.log_collaborator_error(token, &err);
            return error_row(label_for(token), err);
        }
        let quote = quote.map(PriceQuote::from);

        let symbol = resolve_symbol(token, balance.symbol.as_deref());
        debug!(
            "Valuing {} ({}): raw balance {} @ {} decimals via {}/{}",
            symbol,
            token.address,
            balance.raw,
            balance.decimals,
            self.balance_provider.id(),
            self.price_provider.id()
        );
        let scaled = ScaledAmount::new(balance.raw, balance.decimals);
        value_row(&symbol, &scaled, quote.as_ref(), now, &self.config)
    }
}
