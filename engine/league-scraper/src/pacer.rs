//! Inter-request pacing

use std::time::Duration;

/// Enforces a fixed dwell time after every navigation.
///
/// One `pace()` call follows every successful navigate-and-extract step,
/// whichever stage performed it. The interval is fixed: no jitter, no
/// adaptive backoff. Concurrent requests would defeat the point, which is
/// why the pipeline runs one navigation at a time.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Suspend the calling flow for the configured interval
    pub async fn pace(&self) {
        tokio::time::sleep(self.interval).await;
    }

    /// The configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
