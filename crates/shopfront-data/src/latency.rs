//! Simulated latency for in-process product sources.

use std::time::Duration;

/// Delay applied before each source operation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Listing the whole catalog.
    pub list: Duration,
    /// Looking up a single product.
    pub by_id: Duration,
    /// Listing one category.
    pub by_category: Duration,
}

impl LatencyConfig {
    /// Create a new latency configuration.
    pub fn new(list: Duration, by_id: Duration, by_category: Duration) -> Self {
        Self {
            list,
            by_id,
            by_category,
        }
    }

    /// Same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self::new(delay, delay, delay)
    }

    /// No delay at all (tests, scripted runs).
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            by_id: Duration::from_millis(300),
            by_category: Duration::from_millis(500),
        }
    }
}

/// Sleep for `delay`, skipping the timer entirely when it is zero.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
