//! Trailing-sign amount encoding.
//!
//! The downstream consumer serializes negative amounts with a trailing `-`
//! instead of a leading sign, and this quirk must be preserved byte-for-byte.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{GeneratorError, GeneratorResult};

/// Encodes an amount using the trailing-sign convention.
///
/// Negative values render their magnitude followed by `-`; non-negative
/// values render unchanged.
///
/// # Examples
///
/// ```
/// use hr_fixtures::pipeline::encode_trailing_sign;
/// use rust_decimal::Decimal;
///
/// assert_eq!(encode_trailing_sign(Decimal::new(1250, 2)), "12.50");
/// assert_eq!(encode_trailing_sign(Decimal::new(-1250, 2)), "12.50-");
/// ```
pub fn encode_trailing_sign(amount: Decimal) -> String {
    if amount.is_sign_negative() {
        format!("{}-", -amount)
    } else {
        amount.to_string()
    }
}

/// Decodes a trailing-sign amount back into a signed decimal.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidAmount`] if the remaining magnitude does
/// not parse as a decimal.
pub fn decode_trailing_sign(value: &str) -> GeneratorResult<Decimal> {
    let (magnitude, negative) = match value.strip_suffix('-') {
        Some(rest) => (rest, true),
        None => (value, false),
    };

    let parsed = Decimal::from_str(magnitude).map_err(|_| GeneratorError::InvalidAmount {
        value: value.to_string(),
    })?;

    Ok(if negative { -parsed } else { parsed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_positive_amounts_render_unchanged() {
        assert_eq!(encode_trailing_sign(dec("1234.56")), "1234.56");
        assert_eq!(encode_trailing_sign(Decimal::ZERO), "0");
    }

    #[test]
    fn test_negative_amounts_move_the_sign_to_the_tail() {
        assert_eq!(encode_trailing_sign(dec("-1234.56")), "1234.56-");
        assert_eq!(encode_trailing_sign(dec("-0.01")), "0.01-");
    }

    #[test]
    fn test_decode_round_trips_exact_values() {
        for raw in ["1234.56", "-1234.56", "0.00", "-0.01", "9999.99"] {
            let amount = dec(raw);
            assert_eq!(decode_trailing_sign(&encode_trailing_sign(amount)).unwrap(), amount);
        }
    }

    #[test]
    fn test_decode_garbage_is_error() {
        assert!(decode_trailing_sign("12.3.4-").is_err());
        assert!(decode_trailing_sign("abc").is_err());
        assert!(decode_trailing_sign("-").is_err());
    }

    proptest! {
        #[test]
        fn prop_trailing_sign_round_trip(mantissa in -99_999_999i64..=99_999_999i64, scale in 0u32..=4) {
            let amount = Decimal::new(mantissa, scale);
            let encoded = encode_trailing_sign(amount);
            prop_assert!(!encoded.starts_with('-'));
            prop_assert_eq!(decode_trailing_sign(&encoded).unwrap(), amount);
        }
    }
}
