//! Frame discovery and numeric ordering.
//!
//! Frames are files in one directory whose stem is an integer (`0.ico`,
//! `1.ico`, ... `10.ico`). They are ordered by that integer, not by name.

use crate::{CoreError, CoreResult};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Ordered, immutable list of animation frame files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSet {
    paths: Vec<PathBuf>,
}

impl FrameSet {
    /// Collect frames with the given extension from `dir`.
    ///
    /// Subdirectories and files with other extensions are ignored; the
    /// extension match is ASCII case-insensitive and may be given with or
    /// without the leading dot. An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns `FramesDirUnreadable` if the directory cannot be listed.
    #[track_caller]
    #[instrument(skip(dir), fields(dir = ?dir.as_ref()))]
    pub fn discover<P: AsRef<Path>>(dir: P, extension: &str) -> CoreResult<Self> {
        let dir = dir.as_ref();

        let entries = fs::read_dir(dir).map_err(|source| CoreError::FramesDirUnreadable {
            path: dir.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_extension(path, extension))
            .collect();

        // Directory listing order is platform dependent; name order makes
        // ties between equal frame numbers deterministic.
        paths.sort();

        let frames = Self::from_paths(paths);

        if frames.is_empty() {
            warn!(extension, "No animation frames found");
        } else {
            info!(count = frames.len(), "Animation frames loaded");
        }

        Ok(frames)
    }

    /// Order paths by their frame number, keeping input order for ties.
    pub fn from_paths(mut paths: Vec<PathBuf>) -> Self {
        for path in &paths {
            if parse_frame_number(path).is_none() {
                warn!(path = ?path, "Frame name is not a number, ordering it as 0");
            }
        }

        paths.sort_by_key(|path| frame_number(path));

        for pair in paths.windows(2) {
            if frame_number(&pair[0]) == frame_number(&pair[1]) {
                warn!(first = ?pair[0], second = ?pair[1], "Frames share a number");
            }
        }

        Self { paths }
    }

    /// Frame at `index`.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// First frame, used as the initial icon.
    pub fn first(&self) -> Option<&Path> {
        self.get(0)
    }

    /// All frames in display order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no frames were found.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Sort key of a frame file: its stem as an integer, or 0 if it is not one.
pub fn frame_number(path: &Path) -> i64 {
    parse_frame_number(path).unwrap_or(0)
}

fn parse_frame_number(path: &Path) -> Option<i64> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse().ok())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}
