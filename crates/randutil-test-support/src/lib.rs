//! Deterministic engines for randutil tests.

mod engine;

pub use engine::{MockEngine, SequenceEngine};
