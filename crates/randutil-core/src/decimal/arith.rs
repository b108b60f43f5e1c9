//! Checked arithmetic and rounding.

use super::wide::U256;
use super::{Decimal, MAX_SCALE};

/// How dropped digits are resolved when a value is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingStrategy {
    /// Round to nearest; ties go to the even neighbour.
    #[default]
    MidpointNearestEven,
    /// Round to nearest; ties go away from zero.
    MidpointAwayFromZero,
    /// Truncate.
    ToZero,
}

impl RoundingStrategy {
    fn rounds_up(self, last_digit: u64, sticky: bool, odd: bool) -> bool {
        match self {
            Self::MidpointNearestEven => last_digit > 5 || (last_digit == 5 && (sticky || odd)),
            Self::MidpointAwayFromZero => last_digit >= 5,
            Self::ToZero => false,
        }
    }
}

/// Drops trailing digits until the scale is at most `max_scale` and the
/// magnitude fits in 96 bits. Returns `None` when that would need a
/// negative scale.
fn fit(
    mut magnitude: U256,
    mut scale: u32,
    max_scale: u32,
    strategy: RoundingStrategy,
) -> Option<(u128, u32)> {
    loop {
        let mut last_digit = 0;
        let mut sticky = false;
        let mut dropped = false;
        while scale > max_scale || magnitude.to_u96().is_none() {
            if scale == 0 {
                return None;
            }
            let (quotient, rem) = magnitude.div_rem_u64(10);
            sticky |= last_digit != 0;
            last_digit = rem;
            magnitude = quotient;
            scale -= 1;
            dropped = true;
        }
        if dropped && strategy.rounds_up(last_digit, sticky, magnitude.is_odd()) {
            magnitude = magnitude.add(U256::ONE);
        }
        // Rounding up can carry into bit 96; go round again.
        if let Some(fitted) = magnitude.to_u96() {
            return Some((fitted, scale));
        }
    }
}

impl Decimal {
    /// `self + other`, or `None` if the sum does not fit.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let (left, right, scale) = self.aligned_magnitudes(&other);
        let (magnitude, negative) = if self.negative == other.negative {
            (left.add(right), self.negative)
        } else if left >= right {
            (left.sub(right), self.negative)
        } else {
            (right.sub(left), other.negative)
        };
        let (magnitude, scale) =
            fit(magnitude, scale, MAX_SCALE, RoundingStrategy::MidpointNearestEven)?;
        Some(Self::raw(magnitude, scale, negative))
    }

    /// `self - other`, or `None` if the difference does not fit.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.checked_add(-other)
    }

    /// `self * other`, or `None` if the product does not fit.
    #[must_use]
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let product = U256::mul_u128(self.magnitude, other.magnitude);
        let (magnitude, scale) = fit(
            product,
            self.scale + other.scale,
            MAX_SCALE,
            RoundingStrategy::MidpointNearestEven,
        )?;
        Some(Self::raw(magnitude, scale, self.negative != other.negative))
    }

    /// Rounds to `digits` fractional digits, ties to even.
    #[must_use]
    pub fn round_dp(self, digits: u32) -> Self {
        self.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
    }

    /// Rounds to `digits` fractional digits using `strategy`. Values that
    /// already have `digits` or fewer fractional digits are returned as is.
    #[must_use]
    pub fn round_dp_with_strategy(self, digits: u32, strategy: RoundingStrategy) -> Self {
        if digits >= self.scale {
            return self;
        }
        match fit(U256::from_u128(self.magnitude), self.scale, digits, strategy) {
            Some((magnitude, scale)) => Self::raw(magnitude, scale, self.negative),
            None => self,
        }
    }
}
