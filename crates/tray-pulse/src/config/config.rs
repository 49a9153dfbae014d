//! Configuration management for tray-pulse.
//!
//! Reads an optional TOML file from the platform config directory. Every
//! field has a default, so a missing file or a partial one is fine. The file
//! is never written.

use crate::{
    AppError, AppResult,
    config::{AnimationConfig, DEFAULT_FRAMES_DIR_NAME, FramesConfig, TrayConfig},
};

use std::{fs, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{info, instrument};
use tray_pulse_core::SpeedCurve;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Speed curve and timer settings.
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Frame discovery settings.
    #[serde(default)]
    pub frames: FramesConfig,
    /// Tray presentation settings.
    #[serde(default)]
    pub tray: TrayConfig,
}

impl Config {
    /// Load configuration from disk, falling back to defaults if absent.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!(config_path = ?config_path, "No config found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::from_toml(&contents)?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Reject settings that would make the speed curve or timer misbehave.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let animation = &self.animation;

        let problem = if !animation.base_interval_ms.is_finite()
            || !animation.decay.is_finite()
            || !animation.min_interval_ms.is_finite()
        {
            Some("base_interval_ms, decay and min_interval_ms must be finite".to_string())
        } else if animation.min_interval_ms <= 0.0 {
            Some(format!(
                "min_interval_ms ({}) must be greater than zero",
                animation.min_interval_ms
            ))
        } else if animation.base_interval_ms < animation.min_interval_ms {
            Some(format!(
                "base_interval_ms ({}) must not be below min_interval_ms ({})",
                animation.base_interval_ms, animation.min_interval_ms
            ))
        } else if animation.decay < 0.0 {
            Some(format!("decay ({}) must not be negative", animation.decay))
        } else if animation.initial_interval_ms == 0 {
            Some("initial_interval_ms must be greater than zero".to_string())
        } else if self.frames.extension.trim_start_matches('.').is_empty() {
            Some("frames.extension must not be empty".to_string())
        } else {
            None
        };

        match problem {
            Some(reason) => Err(AppError::ConfigError {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Speed curve described by the animation settings.
    pub fn speed_curve(&self) -> SpeedCurve {
        SpeedCurve::new(
            self.animation.base_interval_ms,
            self.animation.decay,
            self.animation.min_interval(),
        )
    }

    /// Directory holding the animation frames.
    ///
    /// Uses the configured directory if set, otherwise `icons` next to the
    /// running executable.
    #[track_caller]
    pub fn frames_dir(&self) -> AppResult<PathBuf> {
        if let Some(directory) = &self.frames.directory {
            return Ok(directory.clone());
        }

        let exe = std::env::current_exe()?;

        exe.parent()
            .map(|dir| dir.join(DEFAULT_FRAMES_DIR_NAME))
            .ok_or_else(|| AppError::ConfigError {
                reason: format!("Executable path has no parent: {:?}", exe),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "tray-pulse", "Tray-Pulse").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
