use std::path::PathBuf;
use std::time::Duration;

use eth2usd_core::{OutputFormat, ValuationConfig};

use crate::cli::Cli;
use crate::error::CliError;

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot: PathBuf,
    pub account: String,
    pub tokens_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub timeout: Duration,
    pub valuation: ValuationConfig,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        if cli.account.trim().is_empty() {
            return Err(CliError::Config("--account must not be empty".to_string()));
        }
        if cli.timeout_secs == 0 {
            return Err(CliError::Config("--timeout-secs must be positive".to_string()));
        }
        if cli.stale_after_hours <= 0 {
            return Err(CliError::Config(
                "--stale-after-hours must be positive".to_string(),
            ));
        }
        if cli.concurrency == 0 {
            return Err(CliError::Config("--concurrency must be positive".to_string()));
        }

        let freshness_window =
            chrono::Duration::try_hours(cli.stale_after_hours).ok_or_else(|| {
                CliError::Config(format!(
                    "--stale-after-hours is out of range: {}",
                    cli.stale_after_hours
                ))
            })?;

        Ok(Self {
            snapshot: cli.snapshot,
            account: cli.account.trim().to_string(),
            tokens_file: cli.tokens_file,
            format: cli.format,
            out: cli.out,
            timeout: Duration::from_secs(cli.timeout_secs),
            valuation: ValuationConfig::default()
                .with_freshness_window(freshness_window)
                .with_max_concurrency(cli.concurrency),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec![
            "eth2usd",
            "--snapshot",
            "snapshot.json",
            "--account",
            "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults_map_to_valuation_config() {
        let config = Config::from_cli(cli(&[])).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.valuation, ValuationConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::from_cli(cli(&["--stale-after-hours", "2", "--concurrency", "16"])).unwrap();
        assert_eq!(config.valuation.freshness_window, chrono::Duration::hours(2));
        assert_eq!(config.valuation.max_concurrency, 16);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = Config::from_cli(cli(&["--timeout-secs", "0"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let err = Config::from_cli(cli(&["--stale-after-hours", "0"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let err = Config::from_cli(cli(&["--concurrency", "0"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
