//! 256-bit unsigned intermediate for scale alignment and products.
//!
//! Two 96-bit magnitudes multiply into at most 192 bits, and aligning a
//! 96-bit magnitude by up to 28 decimal places needs at most 190, so four
//! 64-bit limbs never overflow for the operations `Decimal` performs.

use std::cmp::Ordering;

const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Little-endian limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct U256([u64; 4]);

impl U256 {
    pub(crate) const ZERO: Self = Self([0; 4]);
    pub(crate) const ONE: Self = Self([1, 0, 0, 0]);

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_u128(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// Full product of two `u128` values.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn mul_u128(a: u128, b: u128) -> Self {
        let a = [a as u64, (a >> 64) as u64];
        let b = [b as u64, (b >> 64) as u64];
        let mut out = [0u64; 4];
        for i in 0..2 {
            let mut carry = 0u128;
            for j in 0..2 {
                let cur = u128::from(out[i + j]) + u128::from(a[i]) * u128::from(b[j]) + carry;
                out[i + j] = cur as u64;
                carry = cur >> 64;
            }
            out[i + 2] = carry as u64;
        }
        Self(out)
    }

    /// Returns the value when it is below `2^96`.
    pub(crate) fn to_u96(self) -> Option<u128> {
        if self.0[2] != 0 || self.0[3] != 0 || self.0[1] >> 32 != 0 {
            return None;
        }
        Some(u128::from(self.0[0]) | (u128::from(self.0[1]) << 64))
    }

    pub(crate) fn is_odd(self) -> bool {
        self.0[0] & 1 == 1
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn mul_u64(self, rhs: u64) -> Self {
        let mut out = [0u64; 4];
        let mut carry = 0u128;
        for (slot, &limb) in out.iter_mut().zip(self.0.iter()) {
            let cur = u128::from(limb) * u128::from(rhs) + carry;
            *slot = cur as u64;
            carry = cur >> 64;
        }
        debug_assert_eq!(carry, 0, "U256 multiplication overflow");
        Self(out)
    }

    pub(crate) fn mul_pow10(self, exp: u32) -> Self {
        let mut value = self;
        let mut remaining = exp;
        while remaining > 0 {
            let step = remaining.min(19);
            value = value.mul_u64(POW10[step as usize]);
            remaining -= step;
        }
        value
    }

    pub(crate) fn add(self, rhs: Self) -> Self {
        let mut out = [0u64; 4];
        let mut carry = false;
        for (i, slot) in out.iter_mut().enumerate() {
            let (sum, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, c2) = sum.overflowing_add(u64::from(carry));
            *slot = sum;
            carry = c1 || c2;
        }
        debug_assert!(!carry, "U256 addition overflow");
        Self(out)
    }

    /// `self - rhs`; requires `self >= rhs`.
    pub(crate) fn sub(self, rhs: Self) -> Self {
        let mut out = [0u64; 4];
        let mut borrow = false;
        for (i, slot) in out.iter_mut().enumerate() {
            let (diff, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, b2) = diff.overflowing_sub(u64::from(borrow));
            *slot = diff;
            borrow = b1 || b2;
        }
        debug_assert!(!borrow, "U256 subtraction underflow");
        Self(out)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn div_rem_u64(self, divisor: u64) -> (Self, u64) {
        let divisor = u128::from(divisor);
        let mut out = [0u64; 4];
        let mut rem = 0u128;
        for i in (0..4).rev() {
            let cur = (rem << 64) | u128::from(self.0[i]);
            out[i] = (cur / divisor) as u64;
            rem = cur % divisor;
        }
        (Self(out), rem as u64)
    }

    /// Shifts right by `n` bits, rounding the discarded bits half-to-even.
    pub(crate) fn shr_round_even(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        let quotient = self.shr(n);
        let half = self.bit(n - 1);
        let sticky = self.any_below(n - 1);
        if half && (sticky || quotient.is_odd()) {
            quotient.add(Self::ONE)
        } else {
            quotient
        }
    }

    fn shr(self, n: u32) -> Self {
        if n >= 256 {
            return Self::ZERO;
        }
        let limbs = (n / 64) as usize;
        let bits = n % 64;
        let mut out = [0u64; 4];
        for (i, slot) in out.iter_mut().enumerate().take(4 - limbs) {
            let low = self.0[i + limbs] >> bits;
            let high = if bits > 0 && i + limbs + 1 < 4 {
                self.0[i + limbs + 1] << (64 - bits)
            } else {
                0
            };
            *slot = low | high;
        }
        Self(out)
    }

    fn bit(self, index: u32) -> bool {
        if index >= 256 {
            return false;
        }
        (self.0[(index / 64) as usize] >> (index % 64)) & 1 == 1
    }

    /// True if any bit below position `n` is set.
    fn any_below(self, n: u32) -> bool {
        let n = n.min(256);
        let full = (n / 64) as usize;
        let rem = n % 64;
        if self.0[..full].iter().any(|&limb| limb != 0) {
            return true;
        }
        rem > 0 && self.0[full] & ((1u64 << rem) - 1) != 0
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
