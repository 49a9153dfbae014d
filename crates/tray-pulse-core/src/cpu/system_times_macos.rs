//! macOS host counters via `host_processor_info`.
//!
//! The kernel reports per-core cumulative ticks for user, system, idle and
//! nice. The returned buffer is owned by this task and must be released with
//! `vm_deallocate`.

use crate::{
    CoreError, CoreResult,
    cpu::{CpuSnapshot, CpuTimes, CpuTimesSource},
};

use std::{mem::size_of, panic::Location, ptr, slice};

use error_location::ErrorLocation;

const KERN_SUCCESS: i32 = 0;
const PROCESSOR_CPU_LOAD_INFO: i32 = 2;
const CPU_STATE_IDLE: usize = 2;
const CPU_STATE_MAX: usize = 4;

unsafe extern "C" {
    fn mach_host_self() -> u32;
    fn mach_task_self() -> u32;
    fn host_processor_info(
        host: u32,
        flavor: i32,
        out_processor_count: *mut u32,
        out_processor_info: *mut *mut i32,
        out_processor_info_count: *mut u32,
    ) -> i32;
    fn vm_deallocate(target_task: u32, address: usize, size: usize) -> i32;
}

/// Per-core counters for the running host.
#[derive(Debug, Clone)]
pub struct SystemCpuTimes {
    host: u32,
}

impl SystemCpuTimes {
    /// Reader for the running host.
    pub fn new() -> Self {
        // SAFETY: returns a send right to the host port; no arguments.
        let host = unsafe { mach_host_self() };
        Self { host }
    }
}

impl Default for SystemCpuTimes {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuTimesSource for SystemCpuTimes {
    #[track_caller]
    fn snapshot(&mut self) -> CoreResult<CpuSnapshot> {
        let mut cpu_count: u32 = 0;
        let mut info: *mut i32 = ptr::null_mut();
        let mut info_count: u32 = 0;

        // SAFETY: all out-pointers reference live locals; on success the
        // kernel stores a buffer of `info_count` integers in `info`.
        let kr = unsafe {
            host_processor_info(
                self.host,
                PROCESSOR_CPU_LOAD_INFO,
                &mut cpu_count,
                &mut info,
                &mut info_count,
            )
        };

        if kr != KERN_SUCCESS || info.is_null() {
            return Err(CoreError::CpuQueryFailed {
                reason: format!("host_processor_info failed: kern_return {}", kr),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // SAFETY: `info` is non-null and points at `info_count` integers
        // that stay mapped until the `vm_deallocate` below.
        let ticks = unsafe { slice::from_raw_parts(info, info_count as usize) };

        let cores = ticks
            .chunks_exact(CPU_STATE_MAX)
            .take(cpu_count as usize)
            .map(core_times)
            .collect();

        // SAFETY: releases the buffer handed out above; `ticks` is not used
        // past this point.
        unsafe {
            vm_deallocate(
                mach_task_self(),
                info as usize,
                info_count as usize * size_of::<i32>(),
            );
        }

        Ok(CpuSnapshot::new(cores))
    }
}

/// Counters are `unsigned int` in the kernel struct.
fn core_times(states: &[i32]) -> CpuTimes {
    let idle = u64::from(states[CPU_STATE_IDLE] as u32);
    let total = states.iter().map(|&tick| u64::from(tick as u32)).sum();

    CpuTimes::new(idle, total)
}
