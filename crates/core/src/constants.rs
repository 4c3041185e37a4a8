use chrono::Duration;

/// Fractional digits kept when displaying asset quantities
pub const AMOUNT_DECIMAL_PRECISION: u32 = 6;

/// Fractional digits kept for prices before the final multiplication
pub const PRICE_DECIMAL_PRECISION: u32 = 8;

/// Fractional digits of USD values and totals
pub const USD_DECIMAL_PRECISION: u32 = 2;

/// Quotes older than this are flagged as stale
pub const DEFAULT_FRESHNESS_WINDOW_HOURS: i64 = 24;

/// Default number of assets valued concurrently
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Default freshness window as a duration.
pub fn default_freshness_window() -> Duration {
    Duration::hours(DEFAULT_FRESHNESS_WINDOW_HOURS)
}
