//! Scalar generators: thin range and type adapters over the engine.

use randutil_core::error::RandomError;
use randutil_core::rng::RandomEngine;

use crate::generator::RandomUtil;

impl<E: RandomEngine> RandomUtil<E> {
    /// Returns an integer in `[0, max)`, or `0` when `max == 0`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `max` is negative.
    pub fn next_int(&self, max: i32) -> Result<i32, RandomError> {
        if max < 0 {
            return Err(RandomError::InvalidRange(format!(
                "max {max} must be non-negative"
            )));
        }
        self.next_int_range(0, max)
    }

    /// Returns an integer in `[min, max)`, or `min` when `min == max`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `min > max`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_int_range(&self, min: i32, max: i32) -> Result<i32, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange(format!(
                "min {min} is greater than max {max}"
            )));
        }
        if min == max {
            return Ok(min);
        }
        // The draw lies in [min, max), so it narrows back losslessly.
        Ok(self
            .engine()
            .next_i64_range(i64::from(min), i64::from(max)) as i32)
    }

    /// Returns a float in `[0.0, 1.0)`.
    pub fn next_f64(&self) -> f64 {
        self.engine().next_f64()
    }

    /// Returns `next_f64() * (max - min) + min`.
    ///
    /// This is an affine map of a half-open interval; at extreme magnitudes
    /// floating-point rounding can produce `max` itself.
    pub fn next_f64_range(&self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Returns an `i32` drawn uniformly over all `2^32` bit patterns.
    ///
    /// Draws from `[i32::MIN, i32::MAX + 1)` in `i64`, a range exactly `2^32`
    /// wide, and narrows.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_i32(&self) -> i32 {
        self.engine()
            .next_i64_range(i64::from(i32::MIN), i64::from(i32::MAX) + 1) as i32
    }
}
