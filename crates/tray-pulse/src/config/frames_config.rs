use crate::config::default_extension;

use serde::Deserialize;
use std::path::PathBuf;

/// Animation frame location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FramesConfig {
    /// Frame directory. Defaults to `icons` next to the executable.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File extension of frame images (e.g. `ico`).
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for FramesConfig {
    fn default() -> Self {
        Self {
            directory: None,
            extension: default_extension(),
        }
    }
}
