//! Stub counters for platforms without a native reader.
//!
//! An empty snapshot yields an empty utilization sample, which the speed
//! curve treats as an idle machine.

use crate::{
    CoreResult,
    cpu::{CpuSnapshot, CpuTimesSource},
};

use tracing::warn;

/// Placeholder reader; always reports zero cores.
#[derive(Debug, Clone, Default)]
pub struct SystemCpuTimes;

impl SystemCpuTimes {
    /// Reader for the running host.
    pub fn new() -> Self {
        warn!("CPU counters are not supported on this platform, animation runs at idle speed");
        Self
    }
}

impl CpuTimesSource for SystemCpuTimes {
    fn snapshot(&mut self) -> CoreResult<CpuSnapshot> {
        Ok(CpuSnapshot::default())
    }
}
