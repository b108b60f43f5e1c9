//! Stateless random values shared across call sites.
//!
//! [`RandomUtil`] wraps an injected [`RandomEngine`] and layers three kinds
//! of generator on top of it:
//!
//! - scalar adapters: bounded integers, ranged floats, full-range `i32`;
//! - a uniform 28-digit [`Decimal`] over `[0, 1)` and its affine rescale;
//! - weighted selection over caller-supplied items.
//!
//! No generator keeps state between calls, so a single `RandomUtil` can be
//! shared freely between threads and tasks.

mod delay;
mod generator;
mod range;
mod scalar;
mod selection;
mod uniform;

pub use generator::RandomUtil;
pub use randutil_core::decimal::{Decimal, DecimalError, RoundingStrategy};
pub use randutil_core::error::RandomError;
pub use randutil_core::rng::{RandomEngine, ThreadEngine};
pub use uniform::{DECIMAL_SCALE, HI_WORD_EXCLUSIVE};
