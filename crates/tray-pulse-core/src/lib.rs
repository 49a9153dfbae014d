//! Tray Pulse Core Library
//!
//! Adaptive tray animation driven by host CPU load: a CPU sampler that
//! differences cumulative counters, a speed curve mapping load to a frame
//! interval, a frame sequencer, and the scheduler loop tying them together.
//!
//! # Example
//!
//! ```no_run
//! use tray_pulse_core::{
//!     Animator, CoreResult, CpuSampler, FrameSequencer, FrameSet, IconHost, ShutdownSignal,
//!     SpeedCurve, SystemCpuTimes,
//! };
//!
//! use std::time::Duration;
//!
//! struct StdoutHost;
//!
//! impl IconHost for StdoutHost {
//!     fn set_icon(&self, image: Vec<u8>) -> CoreResult<()> {
//!         println!("frame: {} bytes", image.len());
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let frames = FrameSet::discover("icons", "ico")?;
//!     let sampler = CpuSampler::new(SystemCpuTimes::new(), Duration::from_millis(100));
//!     let mut animator = Animator::new(
//!         sampler,
//!         SpeedCurve::default(),
//!         FrameSequencer::new(frames),
//!         StdoutHost,
//!         Duration::from_secs(1),
//!     );
//!
//!     let shutdown = ShutdownSignal::new();
//!     animator.run(shutdown.listener()).await;
//!     Ok(())
//! }
//! ```

mod animation;
mod cpu;
mod error;

pub use {
    animation::{
        Animator, AnimatorState, DEFAULT_BASE_MS, DEFAULT_DECAY, DEFAULT_FLOOR, FrameSequencer,
        FrameSet, IconHost, ShutdownListener, ShutdownSignal, SpeedCurve, TickReport,
        frame_number,
    },
    cpu::{CpuSampler, CpuSnapshot, CpuTimes, CpuTimesSource, ProcStatSource, SystemCpuTimes},
    error::{CoreError, Result as CoreResult},
};
