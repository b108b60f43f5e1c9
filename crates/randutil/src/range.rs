//! Float-backed decimal ranges.

use randutil_core::decimal::Decimal;
use randutil_core::error::RandomError;
use randutil_core::rng::RandomEngine;

use crate::generator::RandomUtil;
use crate::uniform::{check_rounding_digits, rescale, round};

impl<E: RandomEngine> RandomUtil<E> {
    /// Returns a decimal in `[min, max)` built from a single `f64` draw,
    /// optionally rounded (ties to even) to `rounding_digits` fractional
    /// digits.
    ///
    /// Cheaper than [`RandomUtil::next_decimal_uniform_range`] but carries
    /// only the 53 bits of entropy of the float, so most of the 28 digits are
    /// not independently random.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `rounding_digits` exceeds 28, or
    /// `RandomError::Arithmetic` if the rescaled value cannot be represented.
    pub fn next_decimal(
        &self,
        min: Decimal,
        max: Decimal,
        rounding_digits: Option<u32>,
    ) -> Result<Decimal, RandomError> {
        check_rounding_digits(rounding_digits)?;
        let unit = Decimal::try_from(self.next_f64())?;
        let result = rescale(unit, min, max)?;
        Ok(round(result, rounding_digits))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use randutil_core::decimal::Decimal;
    use randutil_core::error::RandomError;
    use randutil_test_support::SequenceEngine;

    use crate::RandomUtil;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_stays_in_bounds() {
        let random = RandomUtil::new();
        for (min, max) in [("2", "5"), ("5.5", "7.2"), ("7.54", "10.25")] {
            let (min, max) = (dec(min), dec(max));
            for _ in 0..1_000 {
                let value = random.next_decimal(min, max, None).unwrap();
                assert!(value >= min && value < max, "{value:?} outside [{min}, {max})");
            }
        }
    }

    #[test]
    fn test_degenerate_returns_min() {
        let random = RandomUtil::new();
        for text in ["0", "5.5", "10.25"] {
            let bound = dec(text);
            assert_eq!(random.next_decimal(bound, bound, None), Ok(bound));
        }
    }

    #[test]
    fn test_scripted_float_maps_affinely() {
        let random = RandomUtil::with_engine(SequenceEngine::new().with_floats([0.5, 0.25]));
        assert_eq!(random.next_decimal(dec("2"), dec("4"), None), Ok(dec("3")));
        assert_eq!(random.next_decimal(dec("-1"), dec("1"), None), Ok(dec("-0.5")));
    }

    #[test]
    fn test_rounding_digits_applied() {
        let random = RandomUtil::with_engine(SequenceEngine::new().with_floats([0.1]));
        let value = random.next_decimal(dec("0"), dec("10"), Some(3)).unwrap();
        assert_eq!(value, dec("1.000"));
        assert_eq!(value.scale(), 3);
    }

    #[test]
    fn test_rejects_excess_rounding_digits() {
        let random = RandomUtil::with_engine(SequenceEngine::new());
        let result = random.next_decimal(Decimal::ZERO, Decimal::ONE, Some(40));
        assert!(matches!(result, Err(RandomError::InvalidRange(_))));
        assert_eq!(random.engine().float_draws(), 0);
    }

    proptest! {
        #[test]
        fn equal_bounds_always_return_the_bound(mantissa in -(1i128 << 80)..(1i128 << 80), scale in 0u32..=28) {
            let bound = Decimal::try_new(mantissa, scale).unwrap();
            let random = RandomUtil::new();
            prop_assert_eq!(random.next_decimal(bound, bound, None).unwrap(), bound);
            prop_assert_eq!(random.next_decimal_uniform_range(bound, bound, None).unwrap(), bound);
        }

        #[test]
        fn results_lie_within_closed_bounds(low in -1_000_000i64..1_000_000, width in 0i64..1_000_000, scale in 0u32..=6) {
            let min = Decimal::try_new(i128::from(low), scale).unwrap();
            let max = Decimal::try_new(i128::from(low + width), scale).unwrap();
            let random = RandomUtil::new();
            let fast = random.next_decimal(min, max, None).unwrap();
            let uniform = random.next_decimal_uniform_range(min, max, None).unwrap();
            prop_assert!(fast >= min && fast <= max);
            prop_assert!(uniform >= min && uniform <= max);
        }
    }
}
