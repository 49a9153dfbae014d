use crate::{FrameSequencer, FrameSet};

use std::path::PathBuf;

fn frames(count: usize) -> FrameSet {
    FrameSet::from_paths((0..count).map(|i| PathBuf::from(format!("{}.ico", i))).collect())
}

/// WHAT: N advances over N frames return to the starting frame
/// WHY: The animation must loop seamlessly
#[test]
fn given_n_frames_when_advancing_n_times_then_back_at_start() {
    // Given: A sequencer over 5 frames
    let mut sequencer = FrameSequencer::new(frames(5));
    let start = sequencer.current().map(|p| p.to_path_buf());

    // When: Advancing 5 times
    for _ in 0..5 {
        sequencer.advance();
    }

    // Then: Back at the first frame
    assert_eq!(sequencer.index(), 0);
    assert_eq!(sequencer.current().map(|p| p.to_path_buf()), start);
}

/// WHAT: Advancing returns the frame at the new position
/// WHY: The scheduler shows exactly what advance returns
#[test]
fn given_frames_when_advancing_then_returns_next_frame() {
    // Given: A sequencer over 3 frames
    let mut sequencer = FrameSequencer::new(frames(3));

    // When: Advancing once
    let next = sequencer.advance().map(|p| p.to_path_buf());

    // Then: Frame 1
    assert_eq!(next, Some(PathBuf::from("1.ico")));
    assert_eq!(sequencer.index(), 1);
}

/// WHAT: An empty sequencer never moves
/// WHY: Zero frames makes animation a permanent no-op, not a crash
#[test]
fn given_no_frames_when_advancing_then_none_and_index_unchanged() {
    // Given: An empty sequencer
    let mut sequencer = FrameSequencer::new(FrameSet::default());

    // When: Advancing
    let next = sequencer.advance();

    // Then: Nothing to show
    assert!(next.is_none());
    assert!(sequencer.is_empty());
    assert_eq!(sequencer.index(), 0);
}

/// WHAT: A single frame wraps onto itself
/// WHY: Modulo arithmetic must hold for the smallest non-empty set
#[test]
fn given_single_frame_when_advancing_then_stays_on_it() {
    // Given: One frame
    let mut sequencer = FrameSequencer::new(frames(1));

    // When: Advancing
    let next = sequencer.advance().map(|p| p.to_path_buf());

    // Then: Same frame
    assert_eq!(next, Some(PathBuf::from("0.ico")));
    assert_eq!(sequencer.index(), 0);
}
