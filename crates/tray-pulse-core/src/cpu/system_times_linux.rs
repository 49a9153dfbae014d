//! Linux host counters, backed by `/proc/stat`.

use crate::{
    CoreResult,
    cpu::{CpuSnapshot, CpuTimesSource, ProcStatSource},
};

/// Per-core counters for the running host.
#[derive(Debug, Clone, Default)]
pub struct SystemCpuTimes {
    inner: ProcStatSource,
}

impl SystemCpuTimes {
    /// Reader for the running host.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CpuTimesSource for SystemCpuTimes {
    fn snapshot(&mut self) -> CoreResult<CpuSnapshot> {
        self.inner.snapshot()
    }
}
