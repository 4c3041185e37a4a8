//! CLI argument definitions for eth2usd.
//!
//! Every option can also be supplied through an `ETH2USD_*` environment
//! variable, and a `.env` file in the working directory is loaded first.
//!
//! # Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--snapshot` | `ETH2USD_SNAPSHOT` | required | Balances and price feeds JSON |
//! | `--account` | `ETH2USD_ACCOUNT` | required | Account address to value |
//! | `--tokens-file` | `ETH2USD_TOKENS_FILE` | native coin only | Tokens whitelist JSON |
//! | `--format` | `ETH2USD_FORMAT` | `text` | Output format (text, json) |
//! | `--out` | `ETH2USD_OUT` | stdout | Output file |
//! | `--timeout-secs` | `ETH2USD_TIMEOUT_SECS` | `30` | Global timeout |
//! | `--stale-after-hours` | `ETH2USD_STALE_AFTER_HOURS` | `24` | Freshness window |
//! | `--concurrency` | `ETH2USD_CONCURRENCY` | `4` | Assets valued at once |
//!
//! # Examples
//!
//! ```bash
//! eth2usd --snapshot snapshot.json --account 0xd8da6bf26964af9d7eed9e03e53415d37aa96045
//!
//! eth2usd --snapshot snapshot.json --account 0xd8da... --tokens-file tokens.json --format json
//! ```

use std::path::PathBuf;

use clap::Parser;
use eth2usd_core::OutputFormat;

/// Value an account's balances in USD.
#[derive(Debug, Parser)]
#[command(name = "eth2usd", version, about = "Value an account's balances in USD")]
pub struct Cli {
    /// Path to the JSON snapshot of balances and price feeds.
    #[arg(long, env = "ETH2USD_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Account address to read balances from.
    #[arg(long, env = "ETH2USD_ACCOUNT")]
    pub account: String,

    /// Path to a tokens whitelist JSON (defaults to the native coin only).
    #[arg(long, env = "ETH2USD_TOKENS_FILE")]
    pub tokens_file: Option<PathBuf>,

    /// Output format: text or json (case-insensitive).
    #[arg(long, env = "ETH2USD_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file (stdout if absent).
    #[arg(long, env = "ETH2USD_OUT")]
    pub out: Option<PathBuf>,

    /// Global timeout in seconds.
    #[arg(long, env = "ETH2USD_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Quotes older than this many hours are reported as stale.
    #[arg(long, env = "ETH2USD_STALE_AFTER_HOURS", default_value_t = 24)]
    pub stale_after_hours: i64,

    /// Maximum number of assets valued concurrently.
    #[arg(long, env = "ETH2USD_CONCURRENCY", default_value_t = 4)]
    pub concurrency: usize,
}
