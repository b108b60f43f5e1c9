//! Random engine abstraction.
//!
//! In production, this wraps rand's thread-local generator. In tests, a
//! scripted implementation is injected.

use std::sync::Arc;

use rand::{Rng, RngCore};

/// The three primitive draws every generator is built from.
///
/// Implementations must be safe to share between threads; all methods take
/// `&self` so that callers never need a lock around the engine.
pub trait RandomEngine: Send + Sync {
    /// Generate a uniform `i64` in `[min, max)`. Returns `min` when
    /// `min >= max`.
    fn next_i64_range(&self, min: i64, max: i64) -> i64;

    /// Generate a uniform `f64` in `[0.0, 1.0)`.
    fn next_f64(&self) -> f64;

    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Production engine backed by `rand::rng()`.
///
/// Zero-sized; every call reaches the calling thread's own generator, so no
/// state is shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEngine;

impl RandomEngine for ThreadEngine {
    fn next_i64_range(&self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..max)
    }

    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }
}

impl<E: RandomEngine + ?Sized> RandomEngine for &E {
    fn next_i64_range(&self, min: i64, max: i64) -> i64 {
        (**self).next_i64_range(min, max)
    }

    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

impl<E: RandomEngine + ?Sized> RandomEngine for Arc<E> {
    fn next_i64_range(&self, min: i64, max: i64) -> i64 {
        (**self).next_i64_range(min, max)
    }

    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

impl<E: RandomEngine + ?Sized> RandomEngine for Box<E> {
    fn next_i64_range(&self, min: i64, max: i64) -> i64 {
        (**self).next_i64_range(min, max)
    }

    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}
