use alloy_primitives::U256;
use rust_decimal::Decimal;
use tracing::warn;

/// Largest scale a [`Decimal`] can represent.
const MAX_SCALE: u8 = 28;

pub fn exp10(decimals: u8) -> U256 {
    U256::from(10).pow(U256::from(decimals))
}

/// Divide, yielding zero for a zero denominator or an overflowing quotient.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// Multiply, yielding zero when the product leaves the [`Decimal`] range.
pub fn safe_mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        warn!("Product of {} and {} overflows, using zero", lhs, rhs);
        Decimal::ZERO
    })
}

/// Add, yielding zero when the sum leaves the [`Decimal`] range.
pub fn safe_add(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_add(rhs).unwrap_or_else(|| {
        warn!("Sum of {} and {} overflows, using zero", lhs, rhs);
        Decimal::ZERO
    })
}

/// Convert a raw on-chain amount into token units using the token's decimals.
///
/// A token with zero decimals keeps its raw value. Fractional digits beyond 28 places are truncated.
/// Amounts whose integral part does not fit a [`Decimal`] degrade to zero.
pub fn convert_token_to_decimal(amount: U256, decimals: u8) -> Decimal {
    if decimals == 0 {
        return u256_to_decimal(amount, 0).unwrap_or_else(|| {
            warn!("Amount {} does not fit a decimal, using zero", amount);
            Decimal::ZERO
        });
    }

    let (whole, fraction) = amount.div_rem(exp10(decimals));
    let (fraction, scale) = if decimals > MAX_SCALE { (fraction / exp10(decimals - MAX_SCALE), MAX_SCALE) } else { (fraction, decimals) };

    let converted = match (u256_to_decimal(whole, 0), u256_to_decimal(fraction, scale)) {
        (Some(whole), Some(fraction)) => whole.checked_add(fraction),
        _ => None,
    };

    converted.unwrap_or_else(|| {
        warn!("Amount {} with {} decimals does not fit a decimal, using zero", amount, decimals);
        Decimal::ZERO
    })
}

fn u256_to_decimal(value: U256, scale: u8) -> Option<Decimal> {
    let value = u128::try_from(value).ok()?;
    let value = i128::try_from(value).ok()?;
    Decimal::try_from_i128_with_scale(value, scale as u32).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_safe_div_zero_denominator() {
        assert_eq!(safe_div(Decimal::ONE, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(safe_div(Decimal::from(10), Decimal::from(4)), Decimal::from_str("2.5").unwrap());
    }

    #[test]
    fn test_safe_mul_and_add_overflow_is_zero() {
        assert_eq!(safe_mul(Decimal::MAX, Decimal::TWO), Decimal::ZERO);
        assert_eq!(safe_mul(Decimal::from(1_000_000_000), Decimal::from_str("1000000000000000000000").unwrap()), Decimal::ZERO);
        assert_eq!(safe_add(Decimal::MAX, Decimal::ONE), Decimal::ZERO);

        assert_eq!(safe_mul(Decimal::from(3), Decimal::from_str("0.5").unwrap()), Decimal::from_str("1.5").unwrap());
        assert_eq!(safe_add(Decimal::MAX, Decimal::ZERO), Decimal::MAX);
    }

    #[test]
    fn test_convert_eighteen_decimals() {
        let amount = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(convert_token_to_decimal(amount, 18), Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_convert_six_decimals() {
        let amount = U256::from(2_000_123u64);
        assert_eq!(convert_token_to_decimal(amount, 6), Decimal::from_str("2.000123").unwrap());
    }

    #[test]
    fn test_convert_zero_decimals_keeps_raw_value() {
        assert_eq!(convert_token_to_decimal(U256::from(42), 0), Decimal::from(42));
    }

    #[test]
    fn test_convert_large_reserve() {
        // uint112 max with 18 decimals still fits once scaled down
        let amount = (U256::from(1) << 112) - U256::from(1);
        let converted = convert_token_to_decimal(amount, 18);
        assert!(converted > Decimal::from(5_192_296_858_534_827u64));
        assert!(converted < Decimal::from(5_192_296_858_534_828u64));
    }

    #[test]
    fn test_convert_overflow_is_zero() {
        assert_eq!(convert_token_to_decimal(U256::MAX, 0), Decimal::ZERO);
        assert_eq!(convert_token_to_decimal(U256::MAX, 2), Decimal::ZERO);
    }

    #[test]
    fn test_convert_truncates_beyond_max_scale() {
        let amount = exp10(30) + U256::from(12);
        assert_eq!(convert_token_to_decimal(amount, 30), Decimal::ONE);
    }
}
