//! Suspension points for simulated latency and deferred redirects.

use std::time::Duration;

use async_trait::async_trait;

/// Async, clock-independent sleeping abstraction.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend execution for `duration`.
    ///
    /// ```rust,no_run
    /// use async_trait::async_trait;
    /// use landing::domain::ports::Sleeper;
    /// use std::sync::{Arc, Mutex};
    /// use std::time::Duration;
    /// #[derive(Default)]
    /// struct RecordingSleeper {
    ///     requested: Arc<Mutex<Vec<Duration>>>,
    /// }
    /// #[async_trait]
    /// impl Sleeper for RecordingSleeper {
    ///     async fn sleep(&self, duration: Duration) {
    ///         self.requested.lock().expect("requested mutex").push(duration);
    ///     }
    /// }
    /// # async fn demo() {
    /// let sleeper = RecordingSleeper::default();
    /// sleeper.sleep(Duration::from_millis(1500)).await;
    /// assert_eq!(sleeper.requested.lock().expect("requested mutex").len(), 1);
    /// # }
    /// ```
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_advances_the_clock() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
