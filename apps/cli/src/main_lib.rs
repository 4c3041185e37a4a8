use std::fs;
use std::future::Future;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use eth2usd_core::{render, ValuationResult, ValuationService, ValuationServiceTrait};
use eth2usd_market_data::{load_tokens, SnapshotProvider};

use crate::config::Config;
use crate::error::CliError;

/// Installs the global subscriber. Logs go to stderr; stdout carries the report.
pub fn init_tracing() {
    let log_format = std::env::var("ETH2USD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init();
    }
}

/// Values the configured account and writes the rendered report.
pub async fn run(config: &Config) -> Result<ValuationResult, CliError> {
    let result = with_deadline(config.timeout, value_account(config)).await?;
    let report = render(&result, config.format)?;
    write_report(&report, config.out.as_deref())?;
    Ok(result)
}

/// Loads the snapshot and token list and values every token.
pub async fn value_account(config: &Config) -> Result<ValuationResult, CliError> {
    let snapshot = Arc::new(SnapshotProvider::load(&config.snapshot)?);
    let tokens = load_tokens(config.tokens_file.as_deref())?;
    tracing::info!(
        "Valuing {} tokens for {} from {}",
        tokens.len(),
        config.account,
        config.snapshot.display()
    );

    let service = ValuationService::new(snapshot.clone(), snapshot, config.valuation.clone());
    let result = service
        .value_account(&config.account, &tokens, Utc::now())
        .await?;
    Ok(result)
}

/// Runs `future` until it completes, the timeout elapses or Ctrl-C is pressed.
pub async fn with_deadline<T, F>(timeout: Duration, future: F) -> Result<T, CliError>
where
    F: Future<Output = Result<T, CliError>>,
{
    tokio::select! {
        outcome = tokio::time::timeout(timeout, future) => match outcome {
            Ok(result) => result,
            Err(_) => Err(CliError::Timeout(timeout)),
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, abandoning remaining assets");
            Err(CliError::Cancelled)
        }
    }
}

/// Writes the report to `out`, or to stdout when no path is given.
pub fn write_report(report: &str, out: Option<&Path>) -> Result<(), CliError> {
    let mut report = report.to_string();
    if !report.ends_with('\n') {
        report.push('\n');
    }

    match out {
        Some(path) => {
            fs::write(path, &report)?;
            tracing::info!("Wrote report to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
