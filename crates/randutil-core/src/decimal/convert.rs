//! Conversions from primitive numbers.

use super::wide::U256;
use super::{Decimal, DecimalError, MAX_SCALE};

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::raw(u128::from(value.unsigned_abs()), 0, value < 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::raw(u128::from(value.unsigned_abs()), 0, value < 0)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self::raw(u128::from(value), 0, false)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::raw(u128::from(value), 0, false)
    }
}

/// Converts the exact binary value of an `f64`, rounded half-to-even to the
/// largest scale (at most 28) whose magnitude still fits in 96 bits. Trailing
/// zeros are stripped.
impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DecimalError::NotFinite);
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let exponent_bits = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);
        // value = mantissa * 2^exponent
        let (mantissa, exponent) = if exponent_bits == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), exponent_bits - 1075)
        };
        if mantissa == 0 {
            return Ok(Self::ZERO);
        }

        if exponent >= 0 {
            // A normal mantissa is at least 2^52, so any shift past 43 leaves
            // 96 bits behind.
            let shift = exponent.unsigned_abs();
            if shift > 43 {
                return Err(DecimalError::Overflow);
            }
            return Ok(Self::raw(u128::from(mantissa) << shift, 0, negative));
        }

        let shift = exponent.unsigned_abs();
        let (magnitude, scale) = (0..=MAX_SCALE)
            .rev()
            .find_map(|scale| {
                U256::from_u128(u128::from(mantissa))
                    .mul_pow10(scale)
                    .shr_round_even(shift)
                    .to_u96()
                    .map(|magnitude| (magnitude, scale))
            })
            .ok_or(DecimalError::Overflow)?;
        Ok(Self::raw(magnitude, scale, negative).normalize())
    }
}
