//! Artificial network latency
//!
//! The mock services sleep for a random duration before touching their data
//! so callers observe timing similar to a real backend.

use std::time::Duration;

use config::Config;
use rand::Rng;
use tracing::debug;

use crate::{error::StoreResult, settings::get_u64};

/// Simulated latency bounds in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Shortest delay
    pub min_ms: u64,
    /// Longest delay
    pub max_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            min_ms: 200,
            max_ms: 500,
        }
    }
}

impl Latency {
    /// Create latency bounds; the bounds are swapped when given in reverse order
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    /// No delay at all
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    /// Read `latency_min_ms` / `latency_max_ms` from the settings layer
    pub fn from_settings(settings: &Config) -> StoreResult<Self> {
        let min_ms = get_u64(settings, "latency_min_ms")?;
        let max_ms = get_u64(settings, "latency_max_ms")?;
        Ok(Self::new(min_ms, max_ms))
    }

    /// Pick a delay inside the bounds
    pub fn sample(&self) -> Duration {
        if self.max_ms == 0 {
            return Duration::ZERO;
        }
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }

    /// Sleep for a sampled delay
    pub async fn simulate(&self) {
        let delay = self.sample();
        if delay.is_zero() {
            return;
        }
        debug!("Simulating {} ms of latency", delay.as_millis());
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_within_bounds() {
        let latency = Latency::new(10, 20);
        for _ in 0..100 {
            let delay = latency.sample();
            assert!(delay >= Duration::from_millis(10));
            assert!(delay <= Duration::from_millis(20));
        }
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        assert_eq!(Latency::new(500, 200), Latency::default());
    }

    #[tokio::test]
    async fn test_none_does_not_sleep() {
        let latency = Latency::none();
        assert_eq!(latency.sample(), Duration::ZERO);

        let started = std::time::Instant::now();
        latency.simulate().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
