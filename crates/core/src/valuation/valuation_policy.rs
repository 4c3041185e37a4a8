use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::decimal::{mul_decimal_strings, DecimalString, ScaledAmount};
use crate::errors::ValuationError;

use super::valuation_model::{PriceQuote, ValuationConfig, ValuationRow};

/// Values one asset.
///
/// Pure and infallible: a missing, non-positive or stale price is recorded on
/// the returned row instead of being raised.
///
/// # Arguments
///
/// * `symbol` - Display label of the asset.
/// * `balance` - Raw balance with its decimals.
/// * `quote` - Latest USD quote, if the asset has a feed.
/// * `now` - Reference time for the staleness check.
/// * `config` - Precisions and freshness window.
pub fn value_row(
    symbol: &str,
    balance: &ScaledAmount,
    quote: Option<&PriceQuote>,
    now: DateTime<Utc>,
    config: &ValuationConfig,
) -> ValuationRow {
    let amount = balance.to_decimal_string(config.amount_precision);

    let Some((quote, price)) = quote.and_then(|q| q.price().map(|price| (q, price))) else {
        debug!("No usable price for {}, valuing at zero", symbol);
        return ValuationRow::unpriced(symbol, amount);
    };

    let price = price.to_decimal_string(config.price_precision);
    let usd = match mul_decimal_strings(amount.as_str(), price.as_str(), config.usd_precision) {
        Ok(usd) => usd,
        Err(err) => {
            warn!("Failed to value {}: {}", symbol, err);
            return ValuationRow::failed(symbol, amount, &ValuationError::Parse(err));
        }
    };

    if quote.is_stale(now, config.freshness_window) {
        warn!(
            "Stale price for {}: last updated {} (window {}h)",
            symbol,
            quote.updated_at,
            config.freshness_window.num_hours()
        );
        return ValuationRow::stale(symbol, amount, usd);
    }

    ValuationRow::priced(symbol, amount, usd)
}

/// Builds the row for an asset whose collaborator failed before valuation.
///
/// Amount and USD are both `"0"`; the error message is never empty.
pub fn error_row(symbol: &str, error: impl Into<ValuationError>) -> ValuationRow {
    ValuationRow::failed(symbol, DecimalString::zero(), &error.into())
}
