//! Linux `/proc/stat` counter reader.
//!
//! Each `cpuN` line carries cumulative jiffies in the column order
//! `user nice system idle iowait irq softirq steal guest guest_nice`.
//! Guest time is already folded into `user`/`nice`, so only the first eight
//! columns contribute to the total.

use crate::{
    CoreError, CoreResult,
    cpu::{CpuSnapshot, CpuTimes, CpuTimesSource},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;

const DEFAULT_PATH: &str = "/proc/stat";
const IDLE_COLUMN: usize = 3;
const ACCOUNTED_COLUMNS: usize = 8;

/// Reads per-core counters from a `/proc/stat` formatted file.
#[derive(Debug, Clone)]
pub struct ProcStatSource {
    path: PathBuf,
}

impl ProcStatSource {
    /// Reader for the live `/proc/stat`.
    pub fn new() -> Self {
        Self::with_path(DEFAULT_PATH)
    }

    /// Reader for an arbitrary file in `/proc/stat` format.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse the per-core lines of `/proc/stat` content.
    ///
    /// The aggregate `cpu` line is skipped. Content without any per-core
    /// line is rejected so a truncated read is never mistaken for a host
    /// with zero cores.
    #[track_caller]
    pub fn parse(contents: &str) -> CoreResult<CpuSnapshot> {
        let mut cores = Vec::new();

        for line in contents.lines() {
            let mut fields = line.split_whitespace();

            let Some(label) = fields.next() else {
                continue;
            };

            if !is_core_label(label) {
                continue;
            }

            let counters = fields
                .take(ACCOUNTED_COLUMNS)
                .map(str::parse::<u64>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| CoreError::CpuQueryFailed {
                    reason: format!("Malformed counters for {}: {}", label, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let Some(&idle) = counters.get(IDLE_COLUMN) else {
                return Err(CoreError::CpuQueryFailed {
                    reason: format!("Too few counters for {}", label),
                    location: ErrorLocation::from(Location::caller()),
                });
            };

            cores.push(CpuTimes::new(idle, counters.iter().sum()));
        }

        if cores.is_empty() {
            return Err(CoreError::CpuQueryFailed {
                reason: "No per-core lines in /proc/stat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(CpuSnapshot::new(cores))
    }
}

impl Default for ProcStatSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuTimesSource for ProcStatSource {
    #[track_caller]
    fn snapshot(&mut self) -> CoreResult<CpuSnapshot> {
        let contents = fs::read_to_string(&self.path).map_err(|e| CoreError::CpuQueryFailed {
            reason: format!("Failed to read {:?}: {}", self.path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::parse(&contents)
    }
}

fn is_core_label(label: &str) -> bool {
    label
        .strip_prefix("cpu")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
