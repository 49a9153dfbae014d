use crate::TrayCommand;

use std::panic::Location;

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tray_pulse_core::{CoreError, CoreResult, IconHost};

/// Forwards animation frames to the main thread's tray icon.
///
/// The event loop serializes the resulting updates with every other tray
/// event, so the animator never touches `TrayIcon` directly.
pub struct TrayHost {
    proxy: EventLoopProxy<TrayCommand>,
}

impl TrayHost {
    /// Host backed by the given event loop.
    pub fn new(proxy: EventLoopProxy<TrayCommand>) -> Self {
        Self { proxy }
    }
}

impl IconHost for TrayHost {
    fn set_icon(&self, image: Vec<u8>) -> CoreResult<()> {
        self.proxy
            .send_event(TrayCommand::SetIcon(image))
            .map_err(|_| CoreError::IconHostUnavailable {
                reason: "Tray event loop has exited".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
