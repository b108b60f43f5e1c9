//! Shared abstractions for randutil: the engine trait, the decimal type and errors.
//!
//! This crate defines the random engine capability, the fixed-point
//! `Decimal` value type and the error taxonomy that the generator crate
//! builds on. It holds no generator logic of its own.

pub mod decimal;
pub mod error;
pub mod rng;
