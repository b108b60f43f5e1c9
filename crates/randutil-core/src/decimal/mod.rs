//! Fixed-point decimal value type.
//!
//! A `Decimal` is a signed base-10 scaled integer: a 96-bit unsigned
//! magnitude, a sign and a scale of `0..=28` fractional digits. Its value is
//! `(-1)^negative * magnitude / 10^scale`. The magnitude is laid out as three
//! 32-bit words (`lo`, `mid`, `hi`) so that generators can compose a value
//! directly from raw draws.
//!
//! Arithmetic is checked: an operation whose result cannot be represented
//! returns `None`. Results that need more than 28 fractional digits, or more
//! than 96 bits at their natural scale, are rounded half-to-even onto a
//! smaller scale.

mod arith;
mod convert;
mod fmt;
mod wide;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use thiserror::Error;

pub use arith::RoundingStrategy;

use wide::U256;

/// Maximum number of fractional digits.
pub const MAX_SCALE: u32 = 28;

/// Exclusive upper bound of the magnitude.
const MAGNITUDE_LIMIT: u128 = 1 << 96;

/// Errors raised while constructing or parsing a `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The requested scale exceeds [`MAX_SCALE`].
    #[error("scale {0} exceeds the maximum of 28")]
    ScaleOutOfRange(u32),

    /// The value does not fit in a 96-bit magnitude.
    #[error("value does not fit in a 96-bit decimal")]
    Overflow,

    /// A floating-point input was NaN or infinite.
    #[error("value is not finite")]
    NotFinite,

    /// A string could not be parsed as a decimal literal.
    #[error("invalid decimal literal: {0}")]
    Parse(String),
}

/// A 96-bit fixed-point decimal with up to 28 fractional digits.
///
/// Equality, ordering and hashing are by numeric value, so `1.0 == 1.00`.
#[derive(Clone, Copy)]
pub struct Decimal {
    magnitude: u128,
    scale: u32,
    negative: bool,
}

impl Decimal {
    /// `0`
    pub const ZERO: Self = Self::raw(0, 0, false);
    /// `1`
    pub const ONE: Self = Self::raw(1, 0, false);
    /// Largest representable value, `2^96 - 1`.
    pub const MAX: Self = Self::raw(MAGNITUDE_LIMIT - 1, 0, false);
    /// Smallest representable value, `-(2^96 - 1)`.
    pub const MIN: Self = Self::raw(MAGNITUDE_LIMIT - 1, 0, true);

    /// Builds a value from parts that already satisfy the invariants. Zero is
    /// never negative.
    pub(crate) const fn raw(magnitude: u128, scale: u32, negative: bool) -> Self {
        Self {
            magnitude,
            scale,
            negative: negative && magnitude != 0,
        }
    }

    /// Builds a value from the three 32-bit words of its magnitude.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds [`MAX_SCALE`]. Use
    /// [`Decimal::try_from_parts`] for untrusted input.
    #[must_use]
    pub fn from_parts(lo: u32, mid: u32, hi: u32, negative: bool, scale: u32) -> Self {
        assert!(
            scale <= MAX_SCALE,
            "decimal scale {scale} exceeds the maximum of {MAX_SCALE}"
        );
        Self::raw(compose(lo, mid, hi), scale, negative)
    }

    /// Builds a value from the three 32-bit words of its magnitude.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::ScaleOutOfRange` if `scale` exceeds
    /// [`MAX_SCALE`].
    pub fn try_from_parts(
        lo: u32,
        mid: u32,
        hi: u32,
        negative: bool,
        scale: u32,
    ) -> Result<Self, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange(scale));
        }
        Ok(Self::raw(compose(lo, mid, hi), scale, negative))
    }

    /// Builds `mantissa / 10^scale`.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::ScaleOutOfRange` if `scale` exceeds
    /// [`MAX_SCALE`], or `DecimalError::Overflow` if `|mantissa| >= 2^96`.
    pub fn try_new(mantissa: i128, scale: u32) -> Result<Self, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange(scale));
        }
        let magnitude = mantissa.unsigned_abs();
        if magnitude >= MAGNITUDE_LIMIT {
            return Err(DecimalError::Overflow);
        }
        Ok(Self::raw(magnitude, scale, mantissa < 0))
    }

    /// Low 32 bits of the magnitude.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn lo(&self) -> u32 {
        self.magnitude as u32
    }

    /// Middle 32 bits of the magnitude.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mid(&self) -> u32 {
        (self.magnitude >> 32) as u32
    }

    /// High 32 bits of the magnitude.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hi(&self) -> u32 {
        (self.magnitude >> 64) as u32
    }

    /// Number of fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Signed unscaled integer.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn mantissa(&self) -> i128 {
        // magnitude < 2^96, so the cast cannot wrap.
        let magnitude = self.magnitude as i128;
        if self.negative { -magnitude } else { magnitude }
    }

    #[must_use]
    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    #[must_use]
    pub const fn abs(&self) -> Self {
        Self::raw(self.magnitude, self.scale, false)
    }

    /// Removes trailing fractional zeros without changing the value.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut magnitude = self.magnitude;
        let mut scale = self.scale;
        while scale > 0 && magnitude % 10 == 0 {
            magnitude /= 10;
            scale -= 1;
        }
        Self::raw(magnitude, scale, self.negative)
    }

    fn aligned_magnitudes(&self, other: &Self) -> (U256, U256, u32) {
        let scale = self.scale.max(other.scale);
        let left = U256::from_u128(self.magnitude).mul_pow10(scale - self.scale);
        let right = U256::from_u128(other.magnitude).mul_pow10(scale - other.scale);
        (left, right, scale)
    }
}

fn compose(lo: u32, mid: u32, hi: u32) -> u128 {
    u128::from(lo) | (u128::from(mid) << 32) | (u128::from(hi) << 64)
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::raw(self.magnitude, self.scale, !self.negative)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => {
                let (left, right, _) = self.aligned_magnitudes(other);
                left.cmp(&right)
            }
            (true, true) => {
                let (left, right, _) = self.aligned_magnitudes(other);
                right.cmp(&left)
            }
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normal = self.normalize();
        normal.magnitude.hash(state);
        normal.scale.hash(state);
        normal.negative.hash(state);
    }
}
