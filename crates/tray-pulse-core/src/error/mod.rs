use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Animation and sampling errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading the host CPU counters failed.
    #[error("CPU query failed: {reason} {location}")]
    CpuQueryFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The frame directory could not be listed.
    #[error("Cannot read frame directory {path:?}: {source} {location}")]
    FramesDirUnreadable {
        /// Directory that was scanned.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A single frame file could not be read.
    #[error("Cannot read frame {path:?}: {source} {location}")]
    FrameReadFailed {
        /// Frame file that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The icon host no longer accepts updates.
    #[error("Icon host unavailable: {reason} {location}")]
    IconHostUnavailable {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
