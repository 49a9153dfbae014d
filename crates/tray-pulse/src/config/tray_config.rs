use crate::config::{default_quit_label, default_tooltip};

use serde::Deserialize;

/// Tray icon presentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrayConfig {
    /// Hover text of the tray icon.
    #[serde(default = "default_tooltip")]
    pub tooltip: String,

    /// Label of the menu item that quits the application.
    #[serde(default = "default_quit_label")]
    pub quit_label: String,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            tooltip: default_tooltip(),
            quit_label: default_quit_label(),
        }
    }
}
