use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decimal::DecimalString;
use crate::errors::RenderError;
use crate::valuation::{ValuationRow, ValuationSource};

/// Rows of one valuation run plus their USD total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Rows in input token order
    pub rows: Vec<ValuationRow>,

    /// Sum of `usd` over rows without an error
    #[serde(rename = "totalUSD")]
    pub total_usd: DecimalString,
}

impl ValuationResult {
    /// Number of rows carrying an error (stale rows included).
    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.has_error()).count()
    }

    /// Number of rows whose collaborator failed outright.
    pub fn failed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.source == ValuationSource::Error)
            .count()
    }
}

/// Output format of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}
