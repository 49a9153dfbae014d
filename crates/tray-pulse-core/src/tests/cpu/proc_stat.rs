use crate::{CoreError, CpuTimes, CpuTimesSource, ProcStatSource};

const SAMPLE: &str = "\
cpu  400 10 200 3000 50 5 5 0 0 0
cpu0 100 5 50 1500 25 0 5 0 7 0
cpu1 300 5 150 1500 25 5 0 0 0 0
intr 123456 0 0
ctxt 987654
btime 1700000000
";

/// WHAT: Per-core lines become one CpuTimes each, aggregate line skipped
/// WHY: The sampler works per core; the aggregate would double count
#[test]
#[allow(clippy::unwrap_used)]
fn given_proc_stat_when_parsing_then_one_entry_per_core() {
    // Given: /proc/stat content with two cores

    // When: Parsing
    let snapshot = ProcStatSource::parse(SAMPLE).unwrap();

    // Then: Two cores, idle is column 4, total excludes guest columns
    assert_eq!(
        snapshot.cores(),
        &[CpuTimes::new(1500, 1685), CpuTimes::new(1500, 1985)]
    );
}

/// WHAT: Content without per-core lines is rejected
/// WHY: A truncated read must not look like a zero-core host
#[test]
fn given_no_core_lines_when_parsing_then_cpu_query_failed() {
    // Given: Only the aggregate line
    let contents = "cpu  1 2 3 4 5 6 7 8\nintr 1\n";

    // When: Parsing
    let result = ProcStatSource::parse(contents);

    // Then: CpuQueryFailed
    assert!(matches!(result, Err(CoreError::CpuQueryFailed { .. })));
}

/// WHAT: Non-numeric counters are rejected
/// WHY: Garbage counters would corrupt every later delta
#[test]
fn given_malformed_counter_when_parsing_then_cpu_query_failed() {
    // Given: A core line with a bad field
    let contents = "cpu0 1 2 x 4 5 6 7 8\n";

    // When: Parsing
    let result = ProcStatSource::parse(contents);

    // Then: CpuQueryFailed
    assert!(matches!(result, Err(CoreError::CpuQueryFailed { .. })));
}

/// WHAT: Lines with fewer than four counters are rejected
/// WHY: The idle column must be present
#[test]
fn given_short_core_line_when_parsing_then_cpu_query_failed() {
    // Given: A core line with three counters
    let contents = "cpu0 1 2 3\n";

    // When: Parsing
    let result = ProcStatSource::parse(contents);

    // Then: CpuQueryFailed
    assert!(matches!(result, Err(CoreError::CpuQueryFailed { .. })));
}

/// WHAT: Reading a file in /proc/stat format yields a snapshot
/// WHY: The source must work against a configurable path
#[test]
#[allow(clippy::unwrap_used)]
fn given_stat_file_when_taking_snapshot_then_parsed_from_disk() {
    // Given: A temporary stat file
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stat");
    std::fs::write(&path, SAMPLE).unwrap();
    let mut source = ProcStatSource::with_path(&path);

    // When: Taking a snapshot
    let snapshot = source.snapshot().unwrap();

    // Then: Both cores are present
    assert_eq!(snapshot.len(), 2);
}

/// WHAT: A missing stat file is a CPU query failure
/// WHY: The scheduler treats this as a transient, skippable tick error
#[test]
fn given_missing_stat_file_when_taking_snapshot_then_cpu_query_failed() {
    // Given: A path that does not exist
    let mut source = ProcStatSource::with_path("/nonexistent/proc/stat");

    // When: Taking a snapshot
    let result = source.snapshot();

    // Then: CpuQueryFailed
    assert!(matches!(result, Err(CoreError::CpuQueryFailed { .. })));
}
