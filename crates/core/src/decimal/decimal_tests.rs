//! Unit tests for decimal arithmetic.

use super::*;
use crate::errors::DecimalError;
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use std::str::FromStr;

fn big(digits: &str) -> BigUint {
    BigUint::from_str(digits).unwrap()
}

// ============================================================================
// scale_to_decimal
// ============================================================================

#[test]
fn test_scale_eighteen_decimal_balance() {
    let amount = scale_to_decimal(&big("1500000000000000000"), 18, 6);
    assert_eq!(amount, "1.5");
}

#[test]
fn test_scale_eight_decimal_price_strips_zeros() {
    let price = scale_to_decimal(&big("305000000000"), 8, 8);
    assert_eq!(price, "3050");
}

#[test]
fn test_scale_zero_decimals_returns_magnitude_verbatim() {
    for precision in [0, 2, 6, 18] {
        let value = scale_to_decimal(&big("123456789012345678901234567890"), 0, precision);
        assert_eq!(value, "123456789012345678901234567890");
    }
}

#[test]
fn test_scale_zero_magnitude() {
    assert_eq!(scale_to_decimal(&big("0"), 18, 6), "0");
    assert_eq!(scale_to_decimal(&big("0"), 0, 6), "0");
}

#[test]
fn test_scale_rounds_half_away_from_zero() {
    // 0.0000005 -> 0.000001 at six digits
    assert_eq!(scale_to_decimal(&big("500000000000"), 18, 6), "0.000001");
    // 0.00000049999 -> 0
    assert_eq!(scale_to_decimal(&big("499990000000"), 18, 6), "0");
    // 2.5 -> 3 at zero digits
    assert_eq!(scale_to_decimal(&big("25"), 1, 0), "3");
}

#[test]
fn test_scale_rounding_carries_into_integer_part() {
    // 0.9999999 at six digits -> 1
    assert_eq!(scale_to_decimal(&big("9999999"), 7, 6), "1");
}

#[test]
fn test_scale_keeps_leading_fraction_zeros() {
    // 1 USDC-cent with 6 decimals
    assert_eq!(scale_to_decimal(&big("10000"), 6, 6), "0.01");
    assert_eq!(scale_to_decimal(&big("1"), 6, 6), "0.000001");
}

#[test]
fn test_scale_beyond_u128() {
    // 2^128 wei
    let amount = scale_to_decimal(&big("340282366920938463463374607431768211456"), 18, 6);
    assert_eq!(amount, "340282366920938463463.374607");
}

#[test]
fn test_scaled_amount_matches_free_function() {
    let scaled = ScaledAmount::new(big("1234567"), 3);
    assert_eq!(scaled.to_decimal_string(2), "1234.57");
    assert_eq!(
        scaled.to_rational(),
        BigRational::new(BigInt::from(1_234_567), BigInt::from(1000))
    );
}

// ============================================================================
// DecimalString parsing
// ============================================================================

#[test]
fn test_parse_canonicalizes() {
    assert_eq!(DecimalString::parse("3050.0").unwrap(), "3050");
    assert_eq!(DecimalString::parse("007.50").unwrap(), "7.5");
    assert_eq!(DecimalString::parse(".5").unwrap(), "0.5");
    assert_eq!(DecimalString::parse("7.").unwrap(), "7");
    assert_eq!(DecimalString::parse("-0.00").unwrap(), "0");
    assert_eq!(DecimalString::parse("+12.340").unwrap(), "12.34");
    assert_eq!(DecimalString::parse("-1.50").unwrap(), "-1.5");
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(DecimalString::parse(""), Err(DecimalError::Empty));
    for input in [".", "-", "1e5", "1.2.3", " 1", "1 ", "abc", "0x10", "1,5", "--1"] {
        assert_eq!(
            DecimalString::parse(input),
            Err(DecimalError::Malformed(input.to_string())),
            "input {:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_parse_rational_reports_fraction_digits() {
    let (value, digits) = parse_rational("1.250").unwrap();
    assert_eq!(digits, 3);
    assert_eq!(value, BigRational::new(BigInt::from(5), BigInt::from(4)));
}

#[test]
fn test_serde_as_string() {
    let value = DecimalString::parse("4575.5").unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"4575.5\"");
    let back: DecimalString = serde_json::from_str("\"4575.50\"").unwrap();
    assert_eq!(back, value);
    assert!(serde_json::from_str::<DecimalString>("\"4e3\"").is_err());
}

#[test]
fn test_display_respects_width() {
    let value = DecimalString::parse("1.5").unwrap();
    assert_eq!(format!("[{:>6}]", value), "[   1.5]");
}

// ============================================================================
// mul_decimal_strings
// ============================================================================

#[test]
fn test_mul_reference_example() {
    // Trailing zeros are stripped, so 4575.00 is rendered as 4575.
    assert_eq!(mul_decimal_strings("1.5", "3050.0", 2).unwrap(), "4575");
}

#[test]
fn test_mul_rounds_once_at_the_end() {
    // 0.333333 * 3 = 0.999999 -> 1 at two digits
    assert_eq!(mul_decimal_strings("0.333333", "3", 2).unwrap(), "1");
    // 0.125 * 1 -> 0.13 (half away from zero)
    assert_eq!(mul_decimal_strings("0.125", "1", 2).unwrap(), "0.13");
    // -0.125 * 1 -> -0.13
    assert_eq!(mul_decimal_strings("-0.125", "1", 2).unwrap(), "-0.13");
}

#[test]
fn test_mul_high_precision_operands_do_not_lose_digits() {
    // 2^53 + 1 is not representable as f64.
    let usd = mul_decimal_strings("9007199254740993.005", "1", 2).unwrap();
    assert_eq!(usd, "9007199254740993.01");

    let usd = mul_decimal_strings("123456789.123456789012345678", "2000.00000001", 2).unwrap();
    assert_eq!(usd, "246913578248.15");
}

#[test]
fn test_mul_is_commutative() {
    let pairs = [("1.5", "3050"), ("0.000001", "99999.99999999"), ("7", "0")];
    for (a, b) in pairs {
        assert_eq!(
            mul_decimal_strings(a, b, 2).unwrap(),
            mul_decimal_strings(b, a, 2).unwrap()
        );
    }
}

#[test]
fn test_mul_rejects_malformed_operand() {
    assert_eq!(
        mul_decimal_strings("1.5", "NaN", 2),
        Err(DecimalError::Malformed("NaN".to_string()))
    );
    assert_eq!(mul_decimal_strings("", "1", 2), Err(DecimalError::Empty));
}

// ============================================================================
// round_decimal_string / sum_decimal_strings / format_rational
// ============================================================================

#[test]
fn test_round_is_idempotent_on_trimmed_strings() {
    for input in ["0", "1", "4575", "0.01", "12.5", "-3.75"] {
        assert_eq!(round_decimal_string(input, 2).unwrap(), input);
    }
}

#[test]
fn test_round_reduces_precision() {
    assert_eq!(round_decimal_string("1.005", 2).unwrap(), "1.01");
    assert_eq!(round_decimal_string("1.00499", 2).unwrap(), "1");
}

#[test]
fn test_sum_is_exact() {
    let values: Vec<DecimalString> = ["0.1", "0.2", "0.3"]
        .iter()
        .map(|s| DecimalString::parse(s).unwrap())
        .collect();
    assert_eq!(sum_decimal_strings(&values, 2), "0.6");
    assert_eq!(sum_decimal_strings(std::iter::empty(), 2), "0");
}

#[test]
fn test_format_rational_negative_rounding_to_zero_has_no_sign() {
    let tiny_negative = BigRational::new(BigInt::from(-1), BigInt::from(1000));
    assert_eq!(format_rational(&tiny_negative, 2), "0");
}
