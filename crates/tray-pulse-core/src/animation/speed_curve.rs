//! Mapping from average CPU load to animation frame interval.
//!
//! `interval = base * e^(-decay * load)`, floored. With the defaults an idle
//! host animates at ~3 frames/sec (333ms) and a saturated one at ~30
//! frames/sec (33ms).

use std::time::Duration;

/// Interval at 0% load, in milliseconds.
pub const DEFAULT_BASE_MS: f64 = 333.0;

/// Exponential decay per percentage point of load.
pub const DEFAULT_DECAY: f64 = 0.023;

/// Shortest interval the curve will ever produce.
pub const DEFAULT_FLOOR: Duration = Duration::from_millis(33);

/// Exponential speed curve with a hard floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCurve {
    base_ms: f64,
    decay: f64,
    floor: Duration,
}

impl SpeedCurve {
    /// Build a curve. Monotonic (non-increasing) only when `decay >= 0`.
    pub fn new(base_ms: f64, decay: f64, floor: Duration) -> Self {
        Self {
            base_ms,
            decay,
            floor,
        }
    }

    /// Arithmetic mean of per-core percentages; 0 for an empty sample.
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }

        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Frame interval for a utilization sample.
    pub fn interval(&self, samples: &[f64]) -> Duration {
        self.interval_for(Self::mean(samples))
    }

    /// Frame interval for an average load percentage.
    ///
    /// Load is clamped to 0-100 and non-finite input counts as idle. The
    /// result is truncated to whole milliseconds and never below the floor.
    pub fn interval_for(&self, average: f64) -> Duration {
        let load = if average.is_finite() {
            average.clamp(0.0, 100.0)
        } else {
            0.0
        };

        let millis = self.base_ms * (-self.decay * load).exp();

        Duration::from_millis(millis as u64).max(self.floor)
    }

    /// The configured floor.
    pub fn floor(&self) -> Duration {
        self.floor
    }
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_MS, DEFAULT_DECAY, DEFAULT_FLOOR)
    }
}
