//! Weighted random selection.
//!
//! Uses a single-pass weighted reservoir: keep a running total `t` of the
//! weights seen so far and, for each item with weight `w > 0`, replace the
//! current pick when a fresh draw `r` satisfies `r * t < w`. Item `i` ends up
//! selected with probability `w_i / sum(w)`. Every non-zero weight consumes
//! exactly one draw; zero weights consume none.

use randutil_core::error::RandomError;
use randutil_core::rng::RandomEngine;

use crate::generator::RandomUtil;

impl<E: RandomEngine> RandomUtil<E> {
    /// Picks one of `items` with probability proportional to the weight at
    /// the same index.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if the slices are empty or of
    /// different lengths, if any weight is negative or not finite, or if all
    /// weights are zero. Nothing is drawn when the input is rejected.
    pub fn weighted_random_selection<'a, T>(
        &self,
        items: &'a [T],
        weights: &[f64],
    ) -> Result<&'a T, RandomError> {
        if items.is_empty() || items.len() != weights.len() {
            return Err(RandomError::InvalidArgument(format!(
                "items and weights must have the same non-zero length (got {} items, {} weights)",
                items.len(),
                weights.len()
            )));
        }
        let index = self.weighted_index(weights)?;
        Ok(&items[index])
    }

    /// Returns an index into `weights` with probability proportional to the
    /// weight at that index.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `weights` is empty, if any
    /// weight is negative or not finite, or if all weights are zero.
    pub fn weighted_index(&self, weights: &[f64]) -> Result<usize, RandomError> {
        validate_weights(weights)?;

        let mut total = 0.0;
        let mut selected = None;
        let mut last_positive = 0;
        for (index, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            total += weight;
            last_positive = index;
            if self.next_f64() * total < weight {
                selected = Some(index);
            }
        }

        // The first positive weight is accepted unless `r * w` rounds up to
        // `w`, which subnormal weights can do.
        Ok(selected.unwrap_or(last_positive))
    }
}

fn validate_weights(weights: &[f64]) -> Result<(), RandomError> {
    if weights.is_empty() {
        return Err(RandomError::InvalidArgument(
            "weights must not be empty".to_owned(),
        ));
    }
    if let Some((index, weight)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(RandomError::InvalidArgument(format!(
            "weight {weight} at index {index} must be finite and non-negative"
        )));
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(RandomError::InvalidArgument(
            "total weight must be greater than zero".to_owned(),
        ));
    }
    if !total.is_finite() {
        return Err(RandomError::InvalidArgument(
            "total weight overflows".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use randutil_core::error::RandomError;
    use randutil_test_support::{MockEngine, SequenceEngine};

    use crate::RandomUtil;

    const ITEMS: [&str; 3] = ["A", "B", "C"];

    fn is_invalid_argument<T>(result: &Result<T, RandomError>) -> bool {
        matches!(result, Err(RandomError::InvalidArgument(_)))
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let random = RandomUtil::with_engine(SequenceEngine::new());
        let result = random.weighted_random_selection(&ITEMS, &[1.0, 2.0]);
        assert!(is_invalid_argument(&result));
        assert_eq!(random.engine().float_draws(), 0);
    }

    #[test]
    fn test_rejects_empty_input() {
        let random = RandomUtil::new();
        let items: [&str; 0] = [];
        assert!(is_invalid_argument(&random.weighted_random_selection(&items, &[])));
        assert!(is_invalid_argument(&random.weighted_index(&[])));
    }

    #[test]
    fn test_rejects_negative_weight_before_drawing() {
        let random = RandomUtil::with_engine(SequenceEngine::new());
        let result = random.weighted_random_selection(&ITEMS, &[3.0, 10.0, -2.0]);
        assert_eq!(
            result,
            Err(RandomError::InvalidArgument(
                "weight -2 at index 2 must be finite and non-negative".to_owned()
            ))
        );
        assert_eq!(random.engine().float_draws(), 0);
    }

    #[test]
    fn test_rejects_non_finite_weights() {
        let random = RandomUtil::new();
        assert!(is_invalid_argument(&random.weighted_index(&[1.0, f64::NAN])));
        assert!(is_invalid_argument(&random.weighted_index(&[f64::INFINITY])));
        assert!(is_invalid_argument(&random.weighted_index(&[f64::MAX, f64::MAX])));
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let random = RandomUtil::new();
        let result = random.weighted_random_selection(&ITEMS, &[0.0, 0.0, 0.0]);
        assert_eq!(
            result,
            Err(RandomError::InvalidArgument(
                "total weight must be greater than zero".to_owned()
            ))
        );
    }

    #[test]
    fn test_single_positive_weight_always_wins() {
        let random = RandomUtil::new();
        for _ in 0..1_000 {
            assert_eq!(
                random.weighted_random_selection(&ITEMS, &[0.0, 4.0, 0.0]),
                Ok(&"B")
            );
        }
    }

    #[test]
    fn test_one_draw_per_positive_weight() {
        let random =
            RandomUtil::with_engine(SequenceEngine::new().with_floats([0.9, 0.9, 0.9]));
        let _ = random
            .weighted_random_selection(&["A", "B", "C", "D", "E"], &[1.0, 0.0, 2.0, 0.0, 3.0])
            .unwrap();
        assert_eq!(random.engine().float_draws(), 3);
    }

    #[test]
    fn test_reservoir_replacement_rule() {
        // Weights 3, 10, 2. Item A: 0.5 * 3 < 3 -> A. Item B: 0.7 * 13 = 9.1 < 10
        // -> B. Item C: 0.9 * 15 = 13.5, not < 2 -> stays B.
        let random =
            RandomUtil::with_engine(SequenceEngine::new().with_floats([0.5, 0.7, 0.9]));
        assert_eq!(
            random.weighted_random_selection(&ITEMS, &[3.0, 10.0, 2.0]),
            Ok(&"B")
        );

        // Item B: 0.8 * 13 = 10.4, not < 10 -> stays A. Item C: 0.1 * 15 = 1.5 < 2 -> C.
        let random =
            RandomUtil::with_engine(SequenceEngine::new().with_floats([0.0, 0.8, 0.1]));
        assert_eq!(
            random.weighted_random_selection(&ITEMS, &[3.0, 10.0, 2.0]),
            Ok(&"C")
        );
    }

    #[test]
    fn test_zero_draws_keep_latest_item() {
        // A draw of 0.0 always accepts, so the last positive weight wins.
        let random = RandomUtil::with_engine(MockEngine);
        assert_eq!(
            random.weighted_random_selection(&ITEMS, &[3.0, 10.0, 0.0]),
            Ok(&"B")
        );
    }

    #[test]
    fn test_subnormal_weight_falls_back_to_last_positive() {
        let tiny = f64::from_bits(1);
        let random = RandomUtil::with_engine(SequenceEngine::new().with_floats([0.9]));
        assert_eq!(
            random.weighted_random_selection(&ITEMS, &[0.0, tiny, 0.0]),
            Ok(&"B")
        );
    }
}
