mod proc_stat;
mod sampler;
mod snapshot;
mod source;

#[cfg(target_os = "linux")]
#[path = "system_times_linux.rs"]
mod platform;

#[cfg(target_os = "windows")]
#[path = "system_times_windows.rs"]
mod platform;

#[cfg(target_os = "macos")]
#[path = "system_times_macos.rs"]
mod platform;

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
#[path = "system_times_other.rs"]
mod platform;

pub use {
    platform::SystemCpuTimes,
    proc_stat::ProcStatSource,
    sampler::CpuSampler,
    snapshot::{CpuSnapshot, CpuTimes},
    source::CpuTimesSource,
};
