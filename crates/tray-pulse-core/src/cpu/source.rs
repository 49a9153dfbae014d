use crate::{CoreResult, cpu::CpuSnapshot};

/// Point-in-time reader of cumulative per-core CPU counters.
///
/// Implementations are polled on demand; there is no subscription. Each call
/// must return counters that are monotonic with respect to the previous call
/// on the same host.
pub trait CpuTimesSource: Send {
    /// Read the current cumulative counters for every core.
    fn snapshot(&mut self) -> CoreResult<CpuSnapshot>;
}
