use log::debug;

use crate::constants::USD_DECIMAL_PRECISION;
use crate::decimal::sum_decimal_strings;
use crate::valuation::ValuationRow;

use super::aggregate_model::ValuationResult;

/// Combines rows into a result with a USD total.
///
/// Rows keep their order. Only rows without an error count toward the total,
/// so a stale row is listed with its USD value but not summed.
pub fn aggregate(rows: Vec<ValuationRow>) -> ValuationResult {
    let total_usd = sum_decimal_strings(
        rows.iter().filter(|row| !row.has_error()).map(|row| &row.usd),
        USD_DECIMAL_PRECISION,
    );
    debug!("Aggregated {} rows into {} USD", rows.len(), total_usd);
    ValuationResult { rows, total_usd }
}
