mod animation_config;
#[allow(clippy::module_inception)]
mod config;
mod frames_config;
mod tray_config;

pub(crate) use {
    animation_config::AnimationConfig, config::Config, frames_config::FramesConfig,
    tray_config::TrayConfig,
};

use tray_pulse_core::{DEFAULT_BASE_MS, DEFAULT_DECAY, DEFAULT_FLOOR};

pub(crate) const DEFAULT_INITIAL_INTERVAL_MS: u64 = 1000;
pub(crate) const DEFAULT_WARMUP_MS: u64 = 100;
pub(crate) const DEFAULT_FRAMES_DIR_NAME: &str = "icons";
pub(crate) const DEFAULT_EXTENSION: &str = "ico";
pub(crate) const DEFAULT_TOOLTIP: &str = "Tray Pulse";
pub(crate) const DEFAULT_QUIT_LABEL: &str = "Quit";

pub(crate) fn default_base_interval_ms() -> f64 {
    DEFAULT_BASE_MS
}

pub(crate) fn default_decay() -> f64 {
    DEFAULT_DECAY
}

pub(crate) fn default_min_interval_ms() -> f64 {
    DEFAULT_FLOOR.as_millis() as f64
}

pub(crate) fn default_initial_interval_ms() -> u64 {
    DEFAULT_INITIAL_INTERVAL_MS
}

pub(crate) fn default_warmup_ms() -> u64 {
    DEFAULT_WARMUP_MS
}

pub(crate) fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

pub(crate) fn default_tooltip() -> String {
    DEFAULT_TOOLTIP.to_string()
}

pub(crate) fn default_quit_label() -> String {
    DEFAULT_QUIT_LABEL.to_string()
}
