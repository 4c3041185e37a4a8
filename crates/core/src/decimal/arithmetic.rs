use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::errors::DecimalError;

use super::decimal_string::{parse_rational, DecimalString};

/// An unsigned integer magnitude with a number of implied fractional digits.
///
/// Represents `magnitude / 10^decimals`, e.g. a wei balance with 18 decimals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaledAmount {
    pub magnitude: BigUint,
    pub decimals: u32,
}

impl ScaledAmount {
    pub fn new(magnitude: impl Into<BigUint>, decimals: u32) -> Self {
        Self {
            magnitude: magnitude.into(),
            decimals,
        }
    }

    /// Exact value as a rational.
    pub fn to_rational(&self) -> BigRational {
        BigRational::new(BigInt::from(self.magnitude.clone()), pow10(self.decimals))
    }

    /// Value rounded to `precision` fractional digits.
    pub fn to_decimal_string(&self, precision: u32) -> DecimalString {
        scale_to_decimal(&self.magnitude, self.decimals, precision)
    }
}

pub(crate) fn pow10(exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exponent as usize)
}

/// Converts `magnitude / 10^decimals` into a decimal string with at most
/// `precision` fractional digits, rounding half away from zero.
///
/// With `decimals == 0` the magnitude is returned verbatim.
pub fn scale_to_decimal(magnitude: &BigUint, decimals: u32, precision: u32) -> DecimalString {
    let numer = BigInt::from(magnitude.clone());
    if decimals == 0 {
        return DecimalString::from_parts(magnitude.to_string(), BigRational::from_integer(numer));
    }
    format_rational(&BigRational::new(numer, pow10(decimals)), precision)
}

/// Rounds `value` to `precision` fractional digits (half away from zero) and
/// formats it canonically.
pub fn format_rational(value: &BigRational, precision: u32) -> DecimalString {
    let scale = pow10(precision);
    let scaled = value * BigRational::from_integer(scale.clone());
    let rounded = round_half_away_from_zero(&scaled);

    let int_part = rounded.magnitude() / scale.magnitude();
    let fraction_part = rounded.magnitude() % scale.magnitude();

    let mut text = String::new();
    if rounded.is_negative() {
        text.push('-');
    }
    text.push_str(&int_part.to_string());
    if !fraction_part.is_zero() {
        let padded = format!(
            "{:0>width$}",
            fraction_part.to_string(),
            width = precision as usize
        );
        text.push('.');
        text.push_str(padded.trim_end_matches('0'));
    }

    DecimalString::from_parts(text, BigRational::new(rounded, scale))
}

fn round_half_away_from_zero(value: &BigRational) -> BigInt {
    let numer = value.numer().magnitude();
    let denom = value.denom().magnitude();

    let mut quotient = numer / denom;
    let remainder = numer % denom;
    if &remainder + &remainder >= *denom {
        quotient += 1u32;
    }

    let quotient = BigInt::from(quotient);
    if value.is_negative() {
        -quotient
    } else {
        quotient
    }
}

/// Multiplies two decimal strings exactly and rounds the product once to
/// `precision` fractional digits.
pub fn mul_decimal_strings(
    a: &str,
    b: &str,
    precision: u32,
) -> Result<DecimalString, DecimalError> {
    let (lhs, _) = parse_rational(a)?;
    let (rhs, _) = parse_rational(b)?;
    Ok(format_rational(&(lhs * rhs), precision))
}

/// Re-formats a decimal string to `precision` fractional digits.
pub fn round_decimal_string(input: &str, precision: u32) -> Result<DecimalString, DecimalError> {
    let (value, _) = parse_rational(input)?;
    Ok(format_rational(&value, precision))
}

/// Exact sum of decimal strings, rounded once to `precision` fractional digits.
pub fn sum_decimal_strings<'a, I>(values: I, precision: u32) -> DecimalString
where
    I: IntoIterator<Item = &'a DecimalString>,
{
    let total = values
        .into_iter()
        .fold(BigRational::zero(), |acc, value| acc + value.value());
    format_rational(&total, precision)
}
