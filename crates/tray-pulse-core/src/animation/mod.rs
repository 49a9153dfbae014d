mod frames;
mod scheduler;
mod sequencer;
mod shutdown;
mod speed_curve;

pub use {
    frames::{FrameSet, frame_number},
    scheduler::{Animator, AnimatorState, IconHost, TickReport},
    sequencer::FrameSequencer,
    shutdown::{ShutdownListener, ShutdownSignal},
    speed_curve::{DEFAULT_BASE_MS, DEFAULT_DECAY, DEFAULT_FLOOR, SpeedCurve},
};
