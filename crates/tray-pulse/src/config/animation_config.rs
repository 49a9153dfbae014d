use crate::config::{
    default_base_interval_ms, default_decay, default_initial_interval_ms,
    default_min_interval_ms, default_warmup_ms,
};

use std::time::Duration;

use serde::Deserialize;

/// Speed curve and timer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationConfig {
    /// Frame interval at 0% CPU, in milliseconds.
    #[serde(default = "default_base_interval_ms")]
    pub base_interval_ms: f64,

    /// Exponential decay per percentage point of CPU load.
    #[serde(default = "default_decay")]
    pub decay: f64,

    /// Shortest allowed frame interval, in milliseconds.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: f64,

    /// Delay before the first tick, in milliseconds.
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// Pause before the first CPU reading when no baseline exists.
    #[serde(default = "default_warmup_ms")]
    pub warmup_ms: u64,
}

impl AnimationConfig {
    /// Delay before the first tick.
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    /// Sampler warmup pause.
    pub fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }

    /// Speed curve floor, kept at microsecond precision.
    pub fn min_interval(&self) -> Duration {
        Duration::from_micros((self.min_interval_ms * 1000.0).round() as u64)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: default_base_interval_ms(),
            decay: default_decay(),
            min_interval_ms: default_min_interval_ms(),
            initial_interval_ms: default_initial_interval_ms(),
            warmup_ms: default_warmup_ms(),
        }
    }
}
