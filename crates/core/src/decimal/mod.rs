//! Arbitrary-precision decimal arithmetic.
//!
//! Raw on-chain quantities are integers with an implied number of fractional
//! digits. This module turns them into canonical decimal strings and combines
//! those strings exactly (via `BigRational`), rounding half away from zero only
//! at the final step of each operation. Nothing here goes through floating point.

mod arithmetic;
mod decimal_string;

pub use arithmetic::{
    format_rational, mul_decimal_strings, round_decimal_string, scale_to_decimal,
    sum_decimal_strings, ScaledAmount,
};
pub use decimal_string::{parse_rational, DecimalString};

pub(crate) use arithmetic::pow10;

#[cfg(test)]
mod decimal_tests;
