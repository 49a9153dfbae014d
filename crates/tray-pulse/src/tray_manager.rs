//! System tray icon whose image is driven by the animator.
//!
//! Owns the `TrayIcon` and its single-item context menu (Quit). Frame bytes
//! arrive from the async runtime and are decoded here on the UI thread.

use crate::{AppError, AppResult, config::TrayConfig};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};
use tray_icon::menu::{Menu, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon, showing `initial_frame` if there is one.
    ///
    /// A frame that fails to load is logged and the tray starts without an
    /// image; the first animation tick will replace it.
    #[track_caller]
    #[instrument(skip(config))]
    pub fn new(config: &TrayConfig, initial_frame: Option<&Path>) -> AppResult<Self> {
        let menu = Menu::new();

        let quit_item = MenuItem::new(&config.quit_label, true, None);
        let quit_id = quit_item.id().clone();

        menu.append(&quit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add quit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut builder = TrayIconBuilder::new()
            .with_tooltip(&config.tooltip)
            .with_menu(Box::new(menu));

        if let Some(path) = initial_frame {
            match Self::load_frame(path) {
                Ok(icon) => builder = builder.with_icon(icon),
                Err(e) => warn!(path = ?path, error = ?e, "Failed to load initial frame"),
            }
        }

        let tray_icon = builder.build().map_err(|e| AppError::TrayError {
            reason: format!("Failed to create tray icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("System tray icon ready");

        Ok(Self {
            tray_icon,
            quit_item_id: quit_id,
        })
    }

    /// Replace the tray image with an encoded frame.
    #[track_caller]
    pub fn set_icon(&mut self, bytes: &[u8]) -> AppResult<()> {
        let icon = Self::decode_icon(bytes)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn load_frame(path: &Path) -> AppResult<Icon> {
        let bytes = fs::read(path)?;
        Self::decode_icon(&bytes)
    }

    /// Decode ICO or PNG bytes into a tray icon.
    #[track_caller]
    pub(crate) fn decode_icon(bytes: &[u8]) -> AppResult<Icon> {
        let img = image::load_from_memory(bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode frame: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }
}
