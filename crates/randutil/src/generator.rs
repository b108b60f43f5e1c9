//! The generator facade.

use randutil_core::rng::{RandomEngine, ThreadEngine};

/// Random value generator over an injected engine.
///
/// Holds nothing but the engine; every method takes `&self`. With the
/// default [`ThreadEngine`] the type is zero-sized and `Copy`.
///
/// ```
/// use randutil::RandomUtil;
///
/// let random = RandomUtil::new();
/// let roll = random.next_int_range(1, 7).unwrap();
/// assert!((1..7).contains(&roll));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUtil<E = ThreadEngine> {
    engine: E,
}

impl RandomUtil {
    /// Generator backed by the calling thread's `rand` generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            engine: ThreadEngine,
        }
    }
}

impl<E: RandomEngine> RandomUtil<E> {
    /// Generator over a caller-supplied engine, e.g. a scripted one in tests.
    #[must_use]
    pub const fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }
}
