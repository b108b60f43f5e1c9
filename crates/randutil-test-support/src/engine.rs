//! Deterministic `RandomEngine` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use randutil_core::rng::RandomEngine;

/// An engine that always returns `min` for `next_i64_range`, `0.0` for
/// `next_f64` and zero bytes. Suitable for tests that do not depend on
/// specific random values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEngine;

impl RandomEngine for MockEngine {
    fn next_i64_range(&self, min: i64, _max: i64) -> i64 {
        min
    }

    fn next_f64(&self) -> f64 {
        0.0
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

#[derive(Debug, Default)]
struct Script {
    ints: VecDeque<i64>,
    floats: VecDeque<f64>,
    bytes: VecDeque<u8>,
    int_draws: usize,
    float_draws: usize,
}

/// An engine that replays predetermined values and counts the draws taken.
/// Panics if a queue is exhausted or a scripted integer falls outside the
/// requested range. Used in tests that pin exact outcomes or draw counts.
///
/// A request for an empty integer range (`min >= max`) returns `min` without
/// consuming a scripted value, matching the engine contract.
#[derive(Debug, Default)]
pub struct SequenceEngine {
    script: Mutex<Script>,
}

impl SequenceEngine {
    /// Create an engine with empty queues.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integers returned by `next_i64_range`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.script.get_mut().unwrap().ints.extend(values);
        self
    }

    /// Queue floats returned by `next_f64`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_floats(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script.get_mut().unwrap().floats.extend(values);
        self
    }

    /// Queue bytes consumed by `fill_bytes`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_bytes(mut self, values: impl IntoIterator<Item = u8>) -> Self {
        self.script.get_mut().unwrap().bytes.extend(values);
        self
    }

    /// Number of integers handed out so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn int_draws(&self) -> usize {
        self.script.lock().unwrap().int_draws
    }

    /// Number of floats handed out so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn float_draws(&self) -> usize {
        self.script.lock().unwrap().float_draws
    }

    /// Number of scripted integers not yet consumed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn remaining_ints(&self) -> usize {
        self.script.lock().unwrap().ints.len()
    }
}

impl RandomEngine for SequenceEngine {
    fn next_i64_range(&self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        let mut script = self.script.lock().unwrap();
        let value = script
            .ints
            .pop_front()
            .expect("SequenceEngine ran out of scripted integers");
        assert!(
            (min..max).contains(&value),
            "scripted integer {value} outside [{min}, {max})"
        );
        script.int_draws += 1;
        value
    }

    fn next_f64(&self) -> f64 {
        let mut script = self.script.lock().unwrap();
        let value = script
            .floats
            .pop_front()
            .expect("SequenceEngine ran out of scripted floats");
        script.float_draws += 1;
        value
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        let mut script = self.script.lock().unwrap();
        for slot in dest.iter_mut() {
            *slot = script
                .bytes
                .pop_front()
                .expect("SequenceEngine ran out of scripted bytes");
        }
    }
}

#[cfg(test)]
mod tests {
    use randutil_core::rng::RandomEngine;

    use super::{MockEngine, SequenceEngine};

    #[test]
    fn test_mock_engine_returns_lower_bounds() {
        let engine = MockEngine;
        assert_eq!(engine.next_i64_range(-4, 10), -4);
        assert!(engine.next_f64().abs() < f64::EPSILON);
        let mut buf = [9u8; 4];
        engine.fill_bytes(&mut buf);
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn test_sequence_engine_replays_in_order() {
        let engine = SequenceEngine::new()
            .with_ints([3, 1])
            .with_floats([0.25])
            .with_bytes([7, 8]);

        assert_eq!(engine.next_i64_range(0, 10), 3);
        assert_eq!(engine.next_i64_range(0, 10), 1);
        assert!((engine.next_f64() - 0.25).abs() < f64::EPSILON);
        let mut buf = [0u8; 2];
        engine.fill_bytes(&mut buf);
        assert_eq!(buf, [7, 8]);
        assert_eq!(engine.int_draws(), 2);
        assert_eq!(engine.float_draws(), 1);
        assert_eq!(engine.remaining_ints(), 0);
    }

    #[test]
    fn test_sequence_engine_empty_range_consumes_nothing() {
        let engine = SequenceEngine::new().with_ints([5]);
        assert_eq!(engine.next_i64_range(2, 2), 2);
        assert_eq!(engine.remaining_ints(), 1);
        assert_eq!(engine.int_draws(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_sequence_engine_rejects_out_of_range_script() {
        let engine = SequenceEngine::new().with_ints([10]);
        let _ = engine.next_i64_range(0, 10);
    }
}
