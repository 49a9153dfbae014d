use crate::{CoreError, FrameSet, frame_number, tests::support::write_frames};

use std::path::{Path, PathBuf};

fn names(frames: &FrameSet) -> Vec<String> {
    frames
        .paths()
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

/// WHAT: Frames are ordered numerically and other files are ignored
/// WHY: Lexicographic order would put 10.ico before 2.ico
#[test]
#[allow(clippy::unwrap_used)]
fn given_mixed_directory_when_discovering_then_numeric_order_and_only_icons() {
    // Given: Icon frames out of order plus an unrelated file
    let dir = tempfile::tempdir().unwrap();
    write_frames(dir.path(), &["3.ico", "1.ico", "10.ico", "2.ico", "notes.txt"]);

    // When: Discovering frames
    let frames = FrameSet::discover(dir.path(), "ico").unwrap();

    // Then: Numeric order, notes.txt excluded
    assert_eq!(names(&frames), vec!["1.ico", "2.ico", "3.ico", "10.ico"]);
}

/// WHAT: Subdirectories are ignored even if named like frames
/// WHY: Only regular files can be loaded as icons
#[test]
#[allow(clippy::unwrap_used)]
fn given_subdirectory_with_icon_name_when_discovering_then_ignored() {
    // Given: One frame and a directory called 2.ico
    let dir = tempfile::tempdir().unwrap();
    write_frames(dir.path(), &["1.ico"]);
    std::fs::create_dir(dir.path().join("2.ico")).unwrap();

    // When: Discovering frames
    let frames = FrameSet::discover(dir.path(), "ico").unwrap();

    // Then: Only the file
    assert_eq!(names(&frames), vec!["1.ico"]);
}

/// WHAT: Extension matching ignores case and a leading dot
/// WHY: Icon packs from Windows often use upper-case extensions
#[test]
#[allow(clippy::unwrap_used)]
fn given_upper_case_extension_when_discovering_then_included() {
    // Given: Frames with mixed-case extensions
    let dir = tempfile::tempdir().unwrap();
    write_frames(dir.path(), &["0.ICO", "1.ico"]);

    // When: Discovering with a dotted extension
    let frames = FrameSet::discover(dir.path(), ".ico").unwrap();

    // Then: Both frames found
    assert_eq!(frames.len(), 2);
}

/// WHAT: A directory with no frames yields an empty set, not an error
/// WHY: Empty frames degrade to a static icon rather than aborting
#[test]
#[allow(clippy::unwrap_used)]
fn given_directory_without_icons_when_discovering_then_empty_set() {
    // Given: A directory with only unrelated files
    let dir = tempfile::tempdir().unwrap();
    write_frames(dir.path(), &["readme.md"]);

    // When: Discovering frames
    let frames = FrameSet::discover(dir.path(), "ico").unwrap();

    // Then: Empty
    assert!(frames.is_empty());
}

/// WHAT: A missing directory is reported as unreadable
/// WHY: The binary treats this as fatal at startup
#[test]
fn given_missing_directory_when_discovering_then_frames_dir_unreadable() {
    // Given: A path that does not exist
    let dir = Path::new("/nonexistent/tray-pulse/icons");

    // When: Discovering frames
    let result = FrameSet::discover(dir, "ico");

    // Then: FramesDirUnreadable
    assert!(matches!(
        result,
        Err(CoreError::FramesDirUnreadable { .. })
    ));
}

/// WHAT: Non-numeric names sort as 0, ties keep input order
/// WHY: Malformed names are tolerated rather than rejected
#[test]
fn given_malformed_and_duplicate_names_when_ordering_then_zero_key_and_stable() {
    // Given: A malformed name, a zero frame and a later frame
    let paths = vec![
        PathBuf::from("icons/2.ico"),
        PathBuf::from("icons/cat.ico"),
        PathBuf::from("icons/0.ico"),
    ];

    // When: Ordering
    let frames = FrameSet::from_paths(paths);

    // Then: cat.ico keeps its place ahead of 0.ico, both before 2.ico
    assert_eq!(names(&frames), vec!["cat.ico", "0.ico", "2.ico"]);
    assert_eq!(frame_number(Path::new("cat.ico")), 0);
}

/// WHAT: Frame numbers parse from the file stem
/// WHY: The extension and directory must not affect the sort key
#[test]
fn given_path_when_reading_frame_number_then_uses_stem() {
    // Given/When/Then: Stems parse as integers
    assert_eq!(frame_number(Path::new("/tmp/icons/12.ico")), 12);
    assert_eq!(frame_number(Path::new("7.png")), 7);
    assert_eq!(frame_number(Path::new("icons/.ico")), 0);
}
