use crate::{
    CoreResult,
    cpu::{CpuSnapshot, CpuTimesSource},
};

use std::time::Duration;

use tracing::{debug, instrument, trace};

/// Derives per-core utilization by differencing consecutive snapshots.
///
/// Holds exactly one previous snapshot. All operations take `&mut self`, so
/// samples are strictly sequential.
pub struct CpuSampler<S> {
    source: S,
    previous: Option<CpuSnapshot>,
    warmup: Duration,
}

impl<S: CpuTimesSource> CpuSampler<S> {
    /// Create a sampler with no baseline.
    ///
    /// `warmup` is the pause taken when `sample` is called before any
    /// baseline exists.
    pub fn new(source: S, warmup: Duration) -> Self {
        Self {
            source,
            previous: None,
            warmup,
        }
    }

    /// Capture a baseline snapshot without pausing.
    ///
    /// On failure the existing baseline, if any, is kept.
    #[instrument(skip(self))]
    pub fn prime(&mut self) -> CoreResult<()> {
        let baseline = self.source.snapshot()?;
        debug!(cores = baseline.len(), "CPU baseline captured");
        self.previous = Some(baseline);
        Ok(())
    }

    /// Whether a previous snapshot is available for differencing.
    pub fn has_baseline(&self) -> bool {
        self.previous.is_some()
    }

    /// Per-core utilization percentages since the previous sample.
    ///
    /// Without a baseline, one is captured first and the sampler pauses for
    /// the warmup period so the first reading covers a meaningful delta.
    /// The previous snapshot is replaced only when the new read succeeds.
    pub async fn sample(&mut self) -> CoreResult<Vec<f64>> {
        if self.previous.is_none() {
            self.prime()?;
            tokio::time::sleep(self.warmup).await;
        }

        let current = self.source.snapshot()?;

        let utilization = self
            .previous
            .as_ref()
            .map_or_else(Vec::new, |previous| current.utilization_since(previous));

        trace!(?utilization, "CPU sampled");

        self.previous = Some(current);

        Ok(utilization)
    }
}
