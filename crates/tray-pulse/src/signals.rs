//! OS termination signals.
//!
//! Interrupt and terminate are treated exactly like the tray Quit item.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Wait for an interrupt or terminate request and return its name.
pub(crate) async fn termination() -> AppResult<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate()).map_err(|e| AppError::SignalError {
            reason: format!("Failed to register SIGTERM handler: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.map_err(|e| AppError::SignalError {
                    reason: format!("Failed to listen for SIGINT: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
                Ok("SIGINT")
            }
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.map_err(|e| AppError::SignalError {
            reason: format!("Failed to listen for Ctrl-C: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok("Ctrl-C")
    }
}
