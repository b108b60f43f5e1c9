//! Uniform 28-digit decimals.
//!
//! A decimal in `[0, 1)` at scale 28 is an unscaled magnitude in
//! `[0, 10^28)`. The magnitude is assembled from three 32-bit words: the low
//! and middle words are full-range draws, the high word is drawn exactly from
//! `[0, HI_WORD_EXCLUSIVE)`. That covers `[0, HI_WORD_EXCLUSIVE * 2^64)`
//! uniformly, which overshoots `10^28` by a sliver; candidates at or above
//! one are discarded and the whole triple is redrawn. The rejection rate is
//! about `1.4e-9`, and there is no retry cap.

use randutil_core::decimal::{Decimal, DecimalError, MAX_SCALE};
use randutil_core::error::RandomError;
use randutil_core::rng::RandomEngine;
use tracing::trace;

use crate::generator::RandomUtil;

/// Scale of every value produced by [`RandomUtil::next_decimal_uniform`].
pub const DECIMAL_SCALE: u32 = MAX_SCALE;

/// Smallest high word at which a scale-28 magnitude can reach `10^28`:
/// `ceil(10^28 / 2^64)`.
pub const HI_WORD_EXCLUSIVE: u32 = 542_101_087;

impl<E: RandomEngine> RandomUtil<E> {
    /// Returns a decimal uniformly distributed over `[0, 1)` with 28
    /// fractional digits.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn next_decimal_uniform(&self) -> Decimal {
        loop {
            let lo = self.next_i32() as u32;
            let mid = self.next_i32() as u32;
            let hi = self
                .engine()
                .next_i64_range(0, i64::from(HI_WORD_EXCLUSIVE)) as u32;

            let candidate = Decimal::from_parts(lo, mid, hi, false, DECIMAL_SCALE);
            if candidate < Decimal::ONE {
                return candidate;
            }
            trace!(lo, mid, hi, "rejected decimal candidate at or above one");
        }
    }

    /// Returns `min + (max - min) * u` for a uniform unit decimal `u`,
    /// optionally rounded (ties to even) to `rounding_digits` fractional
    /// digits. Rounding happens after rescaling.
    ///
    /// When `min == max` the result is `min`. Rounding at the 28-digit
    /// precision limit can make the result equal `max`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `rounding_digits` exceeds 28, or
    /// `RandomError::Arithmetic` if the rescaled value cannot be represented.
    pub fn next_decimal_uniform_range(
        &self,
        min: Decimal,
        max: Decimal,
        rounding_digits: Option<u32>,
    ) -> Result<Decimal, RandomError> {
        check_rounding_digits(rounding_digits)?;
        let unit = self.next_decimal_uniform();
        let result = rescale(unit, min, max)?;
        Ok(round(result, rounding_digits))
    }
}

pub(crate) fn check_rounding_digits(rounding_digits: Option<u32>) -> Result<(), RandomError> {
    match rounding_digits {
        Some(digits) if digits > MAX_SCALE => Err(RandomError::InvalidRange(format!(
            "rounding digits {digits} exceed the maximum of {MAX_SCALE}"
        ))),
        _ => Ok(()),
    }
}

/// `min + (max - min) * unit`
pub(crate) fn rescale(unit: Decimal, min: Decimal, max: Decimal) -> Result<Decimal, RandomError> {
    let overflow = || RandomError::Arithmetic(DecimalError::Overflow);
    let width = max.checked_sub(min).ok_or_else(overflow)?;
    let offset = width.checked_mul(unit).ok_or_else(overflow)?;
    min.checked_add(offset).ok_or_else(overflow)
}

pub(crate) fn round(value: Decimal, rounding_digits: Option<u32>) -> Decimal {
    match rounding_digits {
        Some(digits) => value.round_dp(digits),
        None => value,
    }
}
