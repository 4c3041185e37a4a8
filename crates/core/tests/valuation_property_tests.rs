//! Property-based integration tests for decimal arithmetic and aggregation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use eth2usd_core::decimal::{
    mul_decimal_strings, round_decimal_string, scale_to_decimal, DecimalString,
};
use eth2usd_core::errors::ValuationError;
use eth2usd_core::{aggregate, ValuationRow, ValuationSource};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{pow, Signed};
use proptest::prelude::*;
use std::str::FromStr;

// =============================================================================
// Generators
// =============================================================================

/// Generates raw balances well beyond the range of u128.
fn arb_magnitude() -> impl Strategy<Value = BigUint> {
    "[0-9]{1,60}".prop_map(|digits| BigUint::from_str(&digits).unwrap())
}

/// Generates signed decimal strings in the accepted syntax.
fn arb_decimal() -> impl Strategy<Value = String> {
    ("-?", "[0-9]{1,20}", proptest::option::of("[0-9]{1,20}")).prop_map(
        |(sign, int, frac)| match frac {
            Some(frac) => format!("{}{}.{}", sign, int, frac),
            None => format!("{}{}", sign, int),
        },
    )
}

/// Generates non-negative USD values with at most two fractional digits.
fn arb_usd() -> impl Strategy<Value = DecimalString> {
    (0u64..10_000_000_000, 0u32..100)
        .prop_map(|(int, cents)| DecimalString::parse(&format!("{}.{:02}", int, cents)).unwrap())
}

/// Generates a row that is either priced, stale, unpriced or failed.
fn arb_row() -> impl Strategy<Value = ValuationRow> {
    (0u8..4, "[A-Z]{3,5}", arb_usd()).prop_map(|(kind, symbol, usd)| {
        let amount = DecimalString::parse("1").unwrap();
        match kind {
            0 => ValuationRow::priced(symbol, amount, usd),
            1 => ValuationRow::stale(symbol, amount, usd),
            2 => ValuationRow::unpriced(symbol, amount),
            _ => ValuationRow::failed(
                symbol,
                DecimalString::zero(),
                &ValuationError::Collaborator("rpc unavailable".to_string()),
            ),
        }
    })
}

fn half_ulp(precision: u32) -> BigRational {
    BigRational::new(
        BigInt::from(1u32),
        BigInt::from(2u32) * pow(BigInt::from(10u32), precision as usize),
    )
}

fn assert_canonical(text: &str, precision: u32) {
    assert!(!text.ends_with('.'), "dangling point in {}", text);
    assert_ne!(text, "-0");
    if let Some((_, frac)) = text.split_once('.') {
        assert!(!frac.ends_with('0'), "trailing zero in {}", text);
        assert!(frac.len() <= precision as usize, "too many digits in {}", text);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Scaling is within half a unit of the last kept digit of the exact value.
    #[test]
    fn prop_scale_is_within_half_ulp(
        magnitude in arb_magnitude(),
        decimals in 1u32..40,
        precision in 0u32..12,
    ) {
        let scaled = scale_to_decimal(&magnitude, decimals, precision);
        let exact = BigRational::new(
            BigInt::from(magnitude.clone()),
            pow(BigInt::from(10u32), decimals as usize),
        );
        let error = (scaled.value() - &exact).abs();
        prop_assert!(error <= half_ulp(precision));
        assert_canonical(scaled.as_str(), precision);
    }

    /// Zero decimals returns the magnitude verbatim.
    #[test]
    fn prop_zero_decimals_is_verbatim(magnitude in arb_magnitude(), precision in 0u32..12) {
        let scaled = scale_to_decimal(&magnitude, 0, precision);
        prop_assert_eq!(scaled.as_str(), magnitude.to_string());
    }

    /// Re-parsing a result yields the same text.
    #[test]
    fn prop_scaled_text_round_trips(
        magnitude in arb_magnitude(),
        decimals in 0u32..40,
        precision in 0u32..12,
    ) {
        let scaled = scale_to_decimal(&magnitude, decimals, precision);
        let reparsed = DecimalString::parse(scaled.as_str()).unwrap();
        prop_assert_eq!(reparsed, scaled);
    }

    /// Multiplication does not depend on operand order.
    #[test]
    fn prop_mul_is_commutative(a in arb_decimal(), b in arb_decimal(), precision in 0u32..10) {
        let ab = mul_decimal_strings(&a, &b, precision).unwrap();
        let ba = mul_decimal_strings(&b, &a, precision).unwrap();
        prop_assert_eq!(ab.as_str(), ba.as_str());
        assert_canonical(ab.as_str(), precision);
    }

    /// Rounding an already rounded value changes nothing.
    #[test]
    fn prop_round_is_idempotent(value in arb_decimal(), precision in 0u32..10) {
        let once = round_decimal_string(&value, precision).unwrap();
        let twice = round_decimal_string(once.as_str(), precision).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// The total only counts rows without errors and ignores row order.
    #[test]
    fn prop_total_ignores_error_rows_and_order(
        rows in proptest::collection::vec(arb_row(), 0..20),
        rotate in 0usize..20,
    ) {
        let expected = rows
            .iter()
            .filter(|row| row.error.is_none())
            .fold(BigRational::from_integer(BigInt::from(0u32)), |acc, row| acc + row.usd.value());

        let mut shuffled = rows.clone();
        shuffled.reverse();
        if !shuffled.is_empty() {
            let k = rotate % shuffled.len();
            shuffled.rotate_left(k);
        }

        let forward = aggregate(rows.clone());
        let backward = aggregate(shuffled);

        prop_assert_eq!(forward.total_usd.value(), &expected);
        prop_assert_eq!(&forward.total_usd, &backward.total_usd);
        prop_assert_eq!(forward.rows, rows);
    }

    /// Rows with a collaborator failure always carry zero USD and a message.
    #[test]
    fn prop_failed_rows_have_zero_usd(rows in proptest::collection::vec(arb_row(), 1..10)) {
        let result = aggregate(rows);
        for row in result.rows.iter().filter(|row| row.error.is_some()) {
            prop_assert!(!row.error.as_deref().unwrap_or_default().is_empty());
        }
        for row in result.rows.iter().filter(|row| row.source == ValuationSource::Error) {
            prop_assert!(row.usd.is_zero());
        }
    }
}
