use anyhow::{anyhow, ensure, Result};
use rand::Rng;
use std::time::Duration;

/// Inclusive bounds for the simulated work done by the monitored service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyRange {
    min: Duration,
    max: Duration,
}

impl LatencyRange {
    // ---
    pub fn new(min: Duration, max: Duration) -> Result<Self> {
        // ---
        ensure!(
            min <= max,
            "Invalid latency range: min {:?} is greater than max {:?}",
            min,
            max
        );
        Ok(Self { min, max })
    }

    /// Builds a range from bounds given in (fractional) seconds.
    ///
    /// # Errors
    /// Fails on negative, non-finite or out-of-range bounds and when `min > max`.
    pub fn from_secs_f64(min: f64, max: f64) -> Result<Self> {
        // ---
        ensure!(
            min.is_finite() && min >= 0.0,
            "Invalid latency lower bound: {min}"
        );
        ensure!(
            max.is_finite() && max >= 0.0,
            "Invalid latency upper bound: {max}"
        );
        let min = Duration::try_from_secs_f64(min)
            .map_err(|err| anyhow!("Invalid latency lower bound: {min} ({err})"))?;
        let max = Duration::try_from_secs_f64(max)
            .map_err(|err| anyhow!("Invalid latency upper bound: {max} ({err})"))?;
        Self::new(min, max)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draws a duration uniformly from `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        // ---
        let secs = rng.gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

impl Default for LatencyRange {
    /// 10 ms to 500 ms.
    fn default() -> Self {
        Self {
            min: Duration::from_millis(10),
            max: Duration::from_millis(500),
        }
    }
}
