use crate::{AppError, AppResult, TrayCommand, TrayHost, config::Config, signals};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use tray_icon::menu::{MenuEvent, MenuId};
use tray_pulse_core::{
    Animator, CpuSampler, FrameSequencer, FrameSet, ShutdownSignal, SystemCpuTimes,
};

/// Main application state.
///
/// Runs on the async runtime thread. Tray icon updates travel back to the
/// main thread through `tray_proxy` because `TrayIcon` is `!Send` and must
/// remain on the UI thread.
pub struct App {
    pub(crate) animator: Animator<SystemCpuTimes, TrayHost>,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) shutdown: ShutdownSignal,
    pub(crate) quit_menu_id: MenuId,
}

impl App {
    /// Wire the animator to the tray.
    pub(crate) fn new(
        config: &Config,
        frames: FrameSet,
        tray_proxy: EventLoopProxy<TrayCommand>,
        quit_menu_id: MenuId,
    ) -> Self {
        let sampler = CpuSampler::new(SystemCpuTimes::new(), config.animation.warmup());

        let animator = Animator::new(
            sampler,
            config.speed_curve(),
            FrameSequencer::new(frames),
            TrayHost::new(tray_proxy.clone()),
            config.animation.initial_interval(),
        );

        Self {
            animator,
            tray_proxy,
            shutdown: ShutdownSignal::new(),
            quit_menu_id,
        }
    }

    /// Run until the tray menu or an OS signal asks to quit.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Tray Pulse starting");

        let Self {
            mut animator,
            tray_proxy,
            shutdown,
            quit_menu_id,
        } = self;

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when tray_event_rx is dropped (main loop breaks),
        // tray_event_tx.blocking_send() fails, breaking the blocking loop.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let signal_shutdown = shutdown.clone();
        let signal_handle = tokio::spawn(async move {
            match signals::termination().await {
                Ok(signal) => {
                    info!(signal, "Termination signal received");
                    signal_shutdown.trigger();
                }
                Err(e) => error!(error = ?e, "Failed to listen for termination signals"),
            }
        });

        let animator_shutdown = shutdown.listener();
        let animator_handle = tokio::spawn(async move {
            animator.run(animator_shutdown).await;
        });

        let mut listener = shutdown.listener();

        loop {
            tokio::select! {
                _ = listener.wait() => {
                    info!("Shutdown requested");
                    break;
                }

                Some(event) = tray_event_rx.recv() => {
                    if event.id == quit_menu_id {
                        info!("Quit requested from tray menu");
                        shutdown.trigger();
                    }
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        if let Err(e) = animator_handle.await {
            error!(error = ?e, "Animation task panicked");
        }

        signal_handle.abort();

        tray_proxy
            .send_event(TrayCommand::Shutdown)
            .map_err(|_| AppError::TrayError {
                reason: "Tray event loop exited before shutdown".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Tray Pulse shut down successfully");

        Ok(())
    }
}
