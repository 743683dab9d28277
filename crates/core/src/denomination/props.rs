//! Property-based tests for denomination conversion.
//!
//! - Round trip through wei is lossless for integer amounts
//! - Identity conversions (wei to wei, ether to ether)
//! - Offset lookups round-trip
//! - Every amount representation converts identically

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use proptest::prelude::*;
use weiunits_shared::{Amount, ConversionError, ParseMode};

use super::registry::{Denomination, ETHER_OFFSET};
use super::service::{
    UnitConverter, convert_to_base_unit, convert_to_whole_unit, resolve_denomination_from_offset,
};

/// Strategy to pick any known denomination.
fn known_denomination() -> impl Strategy<Value = Denomination> {
    prop::sample::select(Denomination::ALL.to_vec())
}

/// Strategy to generate signed integer amounts spanning several orders of magnitude.
fn integer_amount() -> impl Strategy<Value = BigInt> {
    (any::<i64>(), 0u32..4).prop_map(|(base, widen)| {
        BigInt::from(base) * billion_pow(widen)
    })
}

fn billion_pow(widen: u32) -> BigInt {
    BigInt::from(10u64.pow(9)).pow(widen)
}

/// Strategy to generate plain decimal text with up to 24 fractional digits.
fn decimal_text() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        "[0-9]{1,30}",
        prop::option::of("[0-9]{1,24}"),
    )
        .prop_map(|(negative, int_part, frac_part)| {
            let sign = if negative { "-" } else { "" };
            match frac_part {
                Some(frac) => format!("{sign}{int_part}.{frac}"),
                None => format!("{sign}{int_part}"),
            }
        })
}

/// Strategy to generate offsets that match no denomination.
fn unmatched_offset() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("offset must not be registered", |offset| {
        Denomination::from_offset(*offset).is_none()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting an integer amount to wei, then to ether, then scaling back
    /// into the source denomination reproduces the amount exactly.
    #[test]
    fn prop_round_trip_through_wei_is_lossless(
        amount in integer_amount(),
        from in known_denomination(),
    ) {
        let wei = convert_to_base_unit(amount.clone(), from).unwrap();
        let ether = convert_to_whole_unit(wei, Denomination::Wei).unwrap();

        let offset = i64::from(from.offset().unwrap());
        let back = ether.scale_by_pow10(i64::from(ETHER_OFFSET) - offset).unwrap();
        prop_assert_eq!(back, Amount::from_integer(amount));
    }

    /// Wei amounts are truncated, never scaled.
    #[test]
    fn prop_wei_to_wei_truncates(text in decimal_text()) {
        let wei = convert_to_base_unit(text.as_str(), Denomination::Wei).unwrap();
        prop_assert_eq!(wei, Amount::parse(&text).unwrap().truncate());
    }

    /// Ether amounts pass through to ether unchanged.
    #[test]
    fn prop_ether_to_ether_is_identity(text in decimal_text()) {
        let ether = convert_to_whole_unit(text.as_str(), Denomination::Ether).unwrap();
        prop_assert_eq!(ether, Amount::parse(&text).unwrap());
    }

    /// Text and big decimal inputs of the same value convert identically.
    #[test]
    fn prop_text_and_decimal_inputs_agree(
        text in decimal_text(),
        from in known_denomination(),
    ) {
        let decimal = BigDecimal::from_str(&text).unwrap();
        prop_assert_eq!(
            convert_to_base_unit(text.as_str(), from),
            convert_to_base_unit(decimal.clone(), from)
        );
        prop_assert_eq!(
            convert_to_whole_unit(text.as_str(), from),
            convert_to_whole_unit(decimal, from)
        );
    }

    /// Named and offset selectors for the same denomination convert identically.
    #[test]
    fn prop_named_and_offset_selectors_agree(
        text in decimal_text(),
        from in known_denomination(),
    ) {
        let offset = i64::from(from.offset().unwrap());
        prop_assert_eq!(
            convert_to_base_unit(text.as_str(), from),
            convert_to_base_unit(text.as_str(), offset)
        );
    }

    /// Conversion to wei never moves the value away from zero.
    #[test]
    fn prop_truncation_is_toward_zero(
        text in decimal_text(),
        from in known_denomination(),
    ) {
        let exact = Amount::parse(&text)
            .unwrap()
            .scale_by_pow10(i64::from(from.offset().unwrap()))
            .unwrap();
        let wei = Amount::from_integer(convert_to_base_unit(text.as_str(), from).unwrap());

        if exact.is_negative() {
            prop_assert!(wei >= exact);
        } else {
            prop_assert!(wei <= exact);
        }
    }

    /// Ether results print as plain decimal text that parses back to the
    /// same value.
    #[test]
    fn prop_whole_unit_display_round_trips(
        text in decimal_text(),
        from in known_denomination(),
    ) {
        let ether = convert_to_whole_unit(text.as_str(), from).unwrap();
        let printed = ether.to_string();
        prop_assert!(!printed.contains(['e', 'E']));
        prop_assert_eq!(Amount::parse(&printed).unwrap(), ether);
    }

    /// Unregistered offsets fail both conversions and the lookup.
    #[test]
    fn prop_unmatched_offset_fails(offset in unmatched_offset()) {
        let expected = ConversionError::UnknownOffset(offset);
        prop_assert_eq!(resolve_denomination_from_offset(offset), Err(expected.clone()));
        prop_assert_eq!(convert_to_base_unit("1", offset), Err(expected.clone()));
        prop_assert_eq!(convert_to_whole_unit("1", offset), Err(expected));
    }

    /// Lenient parsing never fails on text when the denomination is valid.
    #[test]
    fn prop_lenient_never_fails_on_text(
        text in ".*",
        from in known_denomination(),
    ) {
        let converter = UnitConverter::new(ParseMode::Lenient);
        prop_assert!(converter.to_base_unit(text.as_str(), from).is_ok());
        prop_assert!(converter.to_whole_unit(text.as_str(), from).is_ok());
    }

    /// Strict parsing rejects text carrying an exponent.
    #[test]
    fn prop_strict_rejects_exponents(
        mantissa in "[0-9]{1,5}",
        exponent in "[0-9]{1,3}",
    ) {
        let text = format!("{mantissa}e{exponent}");
        let err = convert_to_base_unit(text.as_str(), Denomination::Wei).unwrap_err();
        prop_assert_eq!(err.error_code(), "INVALID_AMOUNT");
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Every registered offset resolves and reports itself back.
    #[test]
    fn test_offset_round_trip() {
        for offset in [0, 3, 6, 9, 12, 15, 18] {
            let denomination = resolve_denomination_from_offset(offset).unwrap();
            assert_eq!(denomination.offset(), Some(offset.try_into().unwrap()));
        }
    }

    /// Offset 17 sits between finney and ether and is not registered.
    #[test]
    fn test_offset_17_fails() {
        assert_eq!(
            resolve_denomination_from_offset(17),
            Err(ConversionError::UnknownOffset(17))
        );
    }
}
