//! Request pacing toward the profile provider
//!
//! A fixed delay after every provider-backed lookup; cache hits cost
//! nothing. This is a politeness heuristic, not adaptive backoff.

use std::time::Duration;
use tracing::debug;

/// Fixed-interval pacer
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    intervals: u32,
}

impl Pacer {
    /// Create a pacer that waits `delay` after each provider call
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            intervals: 0,
        }
    }

    /// Wait before the next lookup unless the last result came from cache
    pub async fn wait(&mut self, served_from_cache: bool) {
        if served_from_cache {
            return;
        }

        debug!("Pacing for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        self.intervals += 1;
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of delay intervals observed so far
    pub fn intervals(&self) -> u32 {
        self.intervals
    }
}
