use std::time::Duration;

use thiserror::Error;

use eth2usd_core::errors::RenderError;
use eth2usd_market_data::MarketDataError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Input(#[from] MarketDataError),

    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("cancelled")]
    Cancelled,

    #[error(transparent)]
    Valuation(#[from] eth2usd_core::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Input(_) => 2,
            Self::Timeout(_) => 3,
            Self::Cancelled => 3,
            Self::Valuation(_) => 10,
            Self::Render(_) => 10,
            Self::Io(_) => 10,
        }
    }
}
