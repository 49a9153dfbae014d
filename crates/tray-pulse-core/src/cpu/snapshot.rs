/// Cumulative CPU time counters for a single core, in platform ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    /// Time spent doing work (`total - idle`).
    pub busy: u64,
    /// Time spent idle.
    pub idle: u64,
    /// All accounted time.
    pub total: u64,
}

impl CpuTimes {
    /// Build counters from idle and total time; busy time is derived.
    pub fn new(idle: u64, total: u64) -> Self {
        Self {
            busy: total.saturating_sub(idle),
            idle,
            total,
        }
    }

    /// Utilization percentage (0-100) over the interval since `previous`.
    ///
    /// A core whose total time did not move reports 0. Counters that went
    /// backwards (e.g. after a wrap) are treated as no movement.
    pub fn utilization_since(&self, previous: &CpuTimes) -> f64 {
        let delta_total = self.total.saturating_sub(previous.total);
        if delta_total == 0 {
            return 0.0;
        }

        let delta_idle = self.idle.saturating_sub(previous.idle).min(delta_total);

        (1.0 - delta_idle as f64 / delta_total as f64) * 100.0
    }
}

/// Per-core counters captured at one sampling instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    cores: Vec<CpuTimes>,
}

impl CpuSnapshot {
    /// Wrap per-core counters, ordered by core number.
    pub fn new(cores: Vec<CpuTimes>) -> Self {
        Self { cores }
    }

    /// Per-core counters.
    pub fn cores(&self) -> &[CpuTimes] {
        &self.cores
    }

    /// Number of cores in this snapshot.
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// Whether the snapshot holds no cores at all.
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// Per-core utilization since `previous`.
    ///
    /// Cores that did not exist in `previous` report 0.
    pub fn utilization_since(&self, previous: &CpuSnapshot) -> Vec<f64> {
        self.cores
            .iter()
            .enumerate()
            .map(|(core, now)| {
                previous
                    .cores
                    .get(core)
                    .map_or(0.0, |before| now.utilization_since(before))
            })
            .collect()
    }
}
