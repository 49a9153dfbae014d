use crate::{CpuSnapshot, CpuTimes};

/// WHAT: Utilization follows (1 - Δidle/Δtotal) * 100
/// WHY: This is the core differencing formula the speed curve depends on
#[test]
fn given_known_deltas_when_differencing_then_percentage_matches_formula() {
    // Given: Two snapshots with Δidle = 30 and Δtotal = 120
    let previous = CpuTimes::new(70, 200);
    let current = CpuTimes::new(100, 320);

    // When: Computing utilization
    let utilization = current.utilization_since(&previous);

    // Then: Result equals the formula exactly
    let expected = (1.0 - 30.0_f64 / 120.0) * 100.0;
    assert_eq!(utilization, expected);
}

/// WHAT: A core whose total did not move reports 0
/// WHY: Division by zero must not produce NaN or an error
#[test]
fn given_zero_total_delta_when_differencing_then_reports_zero() {
    // Given: Identical counters
    let previous = CpuTimes::new(500, 1000);
    let current = CpuTimes::new(500, 1000);

    // When: Computing utilization
    let utilization = current.utilization_since(&previous);

    // Then: Zero, not NaN
    assert_eq!(utilization, 0.0);
}

/// WHAT: Busy time is derived from idle and total
/// WHY: Keeps the three counters consistent
#[test]
fn given_idle_and_total_when_building_times_then_busy_is_difference() {
    // Given/When: Counters with idle 40 of total 100
    let times = CpuTimes::new(40, 100);

    // Then: Busy is 60
    assert_eq!(times.busy, 60);
}

/// WHAT: Each core is differenced against its own previous counters
/// WHY: Per-core readings must not bleed into each other
#[test]
fn given_multi_core_snapshots_when_differencing_then_each_core_independent() {
    // Given: Core 0 fully idle, core 1 fully busy, core 2 stalled
    let previous = CpuSnapshot::new(vec![
        CpuTimes::new(0, 0),
        CpuTimes::new(0, 0),
        CpuTimes::new(10, 10),
    ]);
    let current = CpuSnapshot::new(vec![
        CpuTimes::new(100, 100),
        CpuTimes::new(0, 100),
        CpuTimes::new(10, 10),
    ]);

    // When: Computing per-core utilization
    let utilization = current.utilization_since(&previous);

    // Then: 0%, 100%, 0%
    assert_eq!(utilization, vec![0.0, 100.0, 0.0]);
}

/// WHAT: Cores missing from the previous snapshot report 0
/// WHY: A core coming online has no baseline to difference against
#[test]
fn given_new_core_when_differencing_then_new_core_reports_zero() {
    // Given: Previous snapshot with one core, current with two
    let previous = CpuSnapshot::new(vec![CpuTimes::new(0, 0)]);
    let current = CpuSnapshot::new(vec![CpuTimes::new(50, 100), CpuTimes::new(0, 100)]);

    // When: Computing utilization
    let utilization = current.utilization_since(&previous);

    // Then: Known core is 50%, new core is 0
    assert_eq!(utilization, vec![50.0, 0.0]);
}

/// WHAT: Counters that go backwards do not produce negative load
/// WHY: A counter reset must not push the speed curve out of range
#[test]
fn given_regressed_counters_when_differencing_then_reports_zero() {
    // Given: Current counters lower than previous
    let previous = CpuTimes::new(900, 1000);
    let current = CpuTimes::new(10, 20);

    // When: Computing utilization
    let utilization = current.utilization_since(&previous);

    // Then: Treated as no movement
    assert_eq!(utilization, 0.0);
}
