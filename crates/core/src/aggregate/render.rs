use std::fmt::Write;

use crate::errors::RenderError;

use super::aggregate_model::{OutputFormat, ValuationResult};

const HEADERS: [&str; 5] = ["ASSET", "AMOUNT", "USD", "SOURCE", "ERROR"];
const COLUMN_GAP: usize = 2;

/// Renders a result in the requested format.
pub fn render(result: &ValuationResult, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => to_text(result),
        OutputFormat::Json => to_json(result),
    }
}

/// Renders a result as a left-aligned table followed by the total.
///
/// Column widths fit the widest cell; the last column is never padded.
pub fn to_text(result: &ValuationResult) -> Result<String, RenderError> {
    let cells: Vec<[String; 5]> = result
        .rows
        .iter()
        .map(|row| {
            [
                row.symbol.clone(),
                row.amount.to_string(),
                row.usd.to_string(),
                row.source.to_string(),
                row.error.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &HEADERS, &widths)?;
    for line in &cells {
        let line: Vec<&str> = line.iter().map(String::as_str).collect();
        write_line(&mut out, &line, &widths)?;
    }
    writeln!(out)?;
    writeln!(out, "TOTAL USD: {}", result.total_usd)?;
    Ok(out)
}

fn write_line(out: &mut String, cells: &[&str], widths: &[usize]) -> Result<(), RenderError> {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        write!(line, "{:<width$}", cell, width = width + COLUMN_GAP)?;
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Renders a result as pretty-printed JSON.
pub fn to_json(result: &ValuationResult) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(result)?)
}
