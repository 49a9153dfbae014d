use crate::FrameSet;

use std::path::Path;

/// Cyclic cursor over a frame set.
///
/// Starts on frame 0, which is the icon shown before the first tick.
#[derive(Debug, Clone)]
pub struct FrameSequencer {
    frames: FrameSet,
    index: usize,
}

impl FrameSequencer {
    /// Cursor positioned on the first frame.
    pub fn new(frames: FrameSet) -> Self {
        Self { frames, index: 0 }
    }

    /// Move to the next frame, wrapping at the end, and return it.
    ///
    /// An empty sequencer never moves and returns `None`.
    pub fn advance(&mut self) -> Option<&Path> {
        if self.frames.is_empty() {
            return None;
        }

        self.index = (self.index + 1) % self.frames.len();
        self.frames.get(self.index)
    }

    /// Frame at the current position.
    pub fn current(&self) -> Option<&Path> {
        self.frames.get(self.index)
    }

    /// Current position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
