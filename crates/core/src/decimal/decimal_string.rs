//! Canonical textual decimal numbers.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DecimalError;

/// A decimal number in canonical text form, together with its exact value.
///
/// The text never has an exponent, trailing fractional zeros, a dangling
/// decimal point, redundant leading zeros or a negative zero. Two
/// `DecimalString`s are equal exactly when their numeric values are equal.
#[derive(Clone, Debug)]
pub struct DecimalString {
    text: String,
    value: BigRational,
}

impl DecimalString {
    /// The canonical zero, `"0"`.
    pub fn zero() -> Self {
        Self {
            text: "0".to_string(),
            value: BigRational::zero(),
        }
    }

    /// Parses any decimal number and brings it to canonical form without rounding.
    ///
    /// `"3050.0"` becomes `"3050"`, `"-0.50"` becomes `"-0.5"`, `".5"` becomes `"0.5"`.
    pub fn parse(input: &str) -> Result<Self, DecimalError> {
        let (value, fraction_digits) = parse_rational(input)?;
        Ok(super::format_rational(&value, fraction_digits))
    }

    pub(crate) fn from_parts(text: String, value: BigRational) -> Self {
        Self { text, value }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Exact rational value of this number.
    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

/// Parses a decimal number into an exact rational.
///
/// Accepts an optional sign, digits and an optional fractional part
/// (`"12"`, `"-1.50"`, `".5"`, `"7."`). Returns the value and the number of
/// fractional digits written in the input.
pub fn parse_rational(input: &str) -> Result<(BigRational, u32), DecimalError> {
    if input.is_empty() {
        return Err(DecimalError::Empty);
    }
    let malformed = || DecimalError::Malformed(input.to_string());

    let (negative, unsigned) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    let (int_part, fraction_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && fraction_part.is_empty() {
        return Err(malformed());
    }
    if !int_part
        .bytes()
        .chain(fraction_part.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let digits = format!("{}{}", int_part, fraction_part);
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(malformed)?;
    let fraction_digits = u32::try_from(fraction_part.len()).map_err(|_| malformed())?;

    let numer = if negative {
        -BigInt::from(magnitude)
    } else {
        BigInt::from(magnitude)
    };
    Ok((
        BigRational::new(numer, super::pow10(fraction_digits)),
        fraction_digits,
    ))
}

impl PartialEq for DecimalString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for DecimalString {}

impl PartialEq<str> for DecimalString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for DecimalString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Default for DecimalString {
    fn default() -> Self {
        Self::zero()
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl FromStr for DecimalString {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DecimalString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for DecimalString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
