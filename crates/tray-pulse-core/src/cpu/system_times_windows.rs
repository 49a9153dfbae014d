//! Windows host counters.
//!
//! `GetSystemTimes` only reports machine-wide totals, so the snapshot holds a
//! single aggregate core. Kernel time already includes idle time.

use crate::{
    CoreError, CoreResult,
    cpu::{CpuSnapshot, CpuTimes, CpuTimesSource},
};

use std::panic::Location;

use error_location::ErrorLocation;
use windows_sys::Win32::{Foundation::FILETIME, System::Threading::GetSystemTimes};

/// Aggregate counters for the running host.
#[derive(Debug, Clone, Default)]
pub struct SystemCpuTimes;

impl SystemCpuTimes {
    /// Reader for the running host.
    pub fn new() -> Self {
        Self
    }
}

impl CpuTimesSource for SystemCpuTimes {
    #[track_caller]
    fn snapshot(&mut self) -> CoreResult<CpuSnapshot> {
        let mut idle = FILETIME {
            dwLowDateTime: 0,
            dwHighDateTime: 0,
        };
        let mut kernel = idle;
        let mut user = idle;

        // SAFETY: all three pointers reference live, writable FILETIME values
        // for the duration of the call.
        let ok = unsafe { GetSystemTimes(&mut idle, &mut kernel, &mut user) };

        if ok == 0 {
            return Err(CoreError::CpuQueryFailed {
                reason: format!("GetSystemTimes failed: {}", std::io::Error::last_os_error()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let idle = filetime_ticks(&idle);
        let total = filetime_ticks(&kernel).saturating_add(filetime_ticks(&user));

        Ok(CpuSnapshot::new(vec![CpuTimes::new(idle, total)]))
    }
}

fn filetime_ticks(time: &FILETIME) -> u64 {
    (u64::from(time.dwHighDateTime) << 32) | u64::from(time.dwLowDateTime)
}
