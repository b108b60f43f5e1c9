//! Randomised delays on the tokio timer.

use std::future;
use std::time::Duration;

use randutil_core::error::RandomError;
use randutil_core::rng::RandomEngine;
use tracing::{debug, instrument};

use crate::generator::RandomUtil;

impl<E: RandomEngine> RandomUtil<E> {
    /// Sleeps for a duration drawn uniformly from `[min_ms, max_ms)`
    /// milliseconds and returns it.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `min_ms` is negative or greater
    /// than `max_ms`.
    pub async fn delay(&self, min_ms: i32, max_ms: i32) -> Result<Duration, RandomError> {
        self.delay_until_cancelled(min_ms, max_ms, future::pending())
            .await
    }

    /// Like [`RandomUtil::delay`], but gives up as soon as `cancel`
    /// completes. A `cancel` future that is already complete wins over a
    /// zero-length sleep.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` for malformed bounds and
    /// `RandomError::Cancelled` if `cancel` completes first.
    #[instrument(skip(self, cancel))]
    pub async fn delay_until_cancelled<F>(
        &self,
        min_ms: i32,
        max_ms: i32,
        cancel: F,
    ) -> Result<Duration, RandomError>
    where
        F: Future<Output = ()>,
    {
        if min_ms < 0 {
            return Err(RandomError::InvalidRange(format!(
                "min delay {min_ms}ms must be non-negative"
            )));
        }
        let ms = self.next_int_range(min_ms, max_ms)?;
        let duration = Duration::from_millis(u64::from(ms.unsigned_abs()));

        debug!(ms, "delaying");
        tokio::select! {
            biased;
            () = cancel => {
                debug!(ms, "delay was cancelled");
                Err(RandomError::Cancelled)
            }
            () = tokio::time::sleep(duration) => Ok(duration),
        }
    }
}
