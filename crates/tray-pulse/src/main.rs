//! Tray Pulse: a tray icon that animates faster the busier the CPU gets.

mod app;
mod config;
mod error;
mod signals;
mod tray_command;
mod tray_host;
mod tray_manager;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    tray_command::TrayCommand,
    tray_host::TrayHost,
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::runtime::Runtime;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tray_pulse_core::FrameSet;

const DEFAULT_LOG_FILTER: &str = "tray_pulse=info,tray_pulse_core=info";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // Frames are loaded before the tray exists; without them there is
    // nothing sensible to show.
    let (config, frames) = match load_startup() {
        Ok(startup) => startup,
        Err(e) => {
            error!("Startup failed: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(&config.tray, frames.first()) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut startup = Some((config, frames));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::SetIcon(bytes) => {
                    if let Err(e) = tray_manager.set_icon(&bytes) {
                        warn!(error = ?e, "Failed to update tray icon");
                    }
                }
                TrayCommand::Shutdown => {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(StartCause::Init) => {
                let Some((config, frames)) = startup.take() else {
                    return;
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let tray_proxy = tray_proxy.clone();
                let quit_menu_id = tray_manager.quit_item_id().clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match build_runtime() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Startup failed: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App::new(&config, frames, tray_proxy, quit_menu_id);

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            Event::LoopDestroyed => {
                info!("Tray Pulse exited");
            }
            _ => {}
        }
    });
}

/// Multi-threaded runtime for the animator and event forwarding.
#[track_caller]
fn build_runtime() -> AppResult<Runtime> {
    Runtime::new().map_err(|e| AppError::RuntimeError {
        reason: format!("Failed to create tokio runtime: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Load and validate configuration, then discover the animation frames.
fn load_startup() -> AppResult<(Config, FrameSet)> {
    let config = Config::load()?;
    config.validate()?;

    let frames_dir = config.frames_dir()?;
    let frames = FrameSet::discover(&frames_dir, &config.frames.extension)?;

    info!(
        frames_dir = ?frames_dir,
        frame_count = frames.len(),
        "Startup complete"
    );

    Ok((config, frames))
}
