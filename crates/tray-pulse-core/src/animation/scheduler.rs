//! The adaptive animation loop.
//!
//! Each tick samples CPU load, turns the average into the next frame
//! interval, re-arms the timer with it, and shows the next frame. The loop
//! runs on one task; ticks never overlap.

use crate::{
    CoreError, CoreResult, CpuSampler, CpuTimesSource, FrameSequencer, ShutdownListener,
    SpeedCurve,
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Display side of the animation: receives raw image bytes of one frame.
///
/// Implementations are expected to serialize display updates themselves.
pub trait IconHost: Send {
    /// Show the given encoded image as the tray icon.
    fn set_icon(&self, image: Vec<u8>) -> CoreResult<()>;
}

/// Lifecycle of an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// Constructed, loop not entered yet.
    Idle,
    /// Loop is running.
    Running,
    /// Shutdown observed; terminal.
    Stopped,
}

/// Outcome of one successful tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Mean utilization across cores, in percent.
    pub average: f64,
    /// Interval until the next tick.
    pub interval: Duration,
    /// Frame shown, or `None` when there are no frames.
    pub frame_index: Option<usize>,
}

/// CPU-driven tray animation scheduler.
pub struct Animator<S, H> {
    sampler: CpuSampler<S>,
    curve: SpeedCurve,
    sequencer: FrameSequencer,
    host: H,
    interval: Duration,
    state: AnimatorState,
}

impl<S: CpuTimesSource, H: IconHost> Animator<S, H> {
    /// Create an idle animator. The first tick fires `initial_interval`
    /// after [`run`](Self::run) is entered.
    pub fn new(
        sampler: CpuSampler<S>,
        curve: SpeedCurve,
        sequencer: FrameSequencer,
        host: H,
        initial_interval: Duration,
    ) -> Self {
        Self {
            sampler,
            curve,
            sequencer,
            host,
            interval: initial_interval,
            state: AnimatorState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Interval the timer is (or will be) armed with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Position of the frame currently shown.
    pub fn frame_index(&self) -> usize {
        self.sequencer.index()
    }

    /// Run until `shutdown` fires.
    ///
    /// Shutdown takes priority over a due tick, so once it has been observed
    /// no further sampling or icon update happens. A tick already in flight
    /// is allowed to finish.
    #[instrument(skip_all)]
    pub async fn run(&mut self, mut shutdown: ShutdownListener) {
        if self.state == AnimatorState::Stopped {
            return;
        }

        self.state = AnimatorState::Running;

        info!(
            frames = self.sequencer.len(),
            interval_ms = self.interval.as_millis(),
            "Animation started"
        );

        if let Err(e) = self.sampler.prime() {
            warn!(error = ?e, "Failed to capture CPU baseline");
        }

        let timer = tokio::time::sleep(self.interval);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => {
                    break;
                }

                _ = &mut timer => {
                    if let Err(e) = self.tick().await {
                        warn!(error = ?e, "Skipping animation tick");
                    }
                    timer.as_mut().reset(Instant::now() + self.interval);
                }
            }
        }

        self.state = AnimatorState::Stopped;
        info!("Animation stopped");
    }

    /// Perform one tick: sample, recompute the interval, show the next frame.
    ///
    /// # Errors
    ///
    /// Returns the sampler error when CPU counters cannot be read; in that
    /// case neither the interval nor the frame position changes.
    pub async fn tick(&mut self) -> CoreResult<TickReport> {
        let utilization = self.sampler.sample().await?;

        let average = SpeedCurve::mean(&utilization);
        self.interval = self.curve.interval_for(average);

        let frame = self.sequencer.advance().map(|path| path.to_path_buf());
        let frame_index = frame.as_ref().map(|_| self.sequencer.index());

        if let Some(path) = frame {
            let shown = match tokio::fs::read(&path).await {
                Ok(image) => self.host.set_icon(image),
                Err(source) => Err(CoreError::FrameReadFailed {
                    path,
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }),
            };

            if let Err(e) = shown {
                warn!(error = ?e, "Frame not displayed");
            }
        }

        debug!(
            average,
            interval_ms = self.interval.as_millis(),
            frame_index,
            "Animation tick"
        );

        Ok(TickReport {
            average,
            interval: self.interval,
            frame_index,
        })
    }
}
