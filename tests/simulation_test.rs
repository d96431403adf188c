//! Simulation scenario tests.
//!
//! Worked examples with known fault counts, checked for every policy.

use pagesim::common::pages;
use pagesim::sim::{fifo, lru, optimal, simulate};
use pagesim::{simulate_and_compare, Error, PageRef, Policy, SimulationTrace, Slot};

/// Check the bookkeeping every trace must satisfy.
fn assert_trace_consistent(trace: &SimulationTrace) {
    let capacity = trace.capacity.get();
    let mut running = 0;

    for step in &trace.steps {
        assert_eq!(step.frames.len(), capacity, "{}: snapshot width", trace.policy);
        assert!(step.resident().count() <= capacity);
        assert!(step.resident().any(|p| p == step.reference));

        if step.fault {
            running += 1;
            assert_eq!(step.cumulative_faults, Some(running));
        } else {
            assert_eq!(step.cumulative_faults, None);
            assert_eq!(step.evicted, None);
        }
    }

    assert_eq!(trace.total_faults(), running);
    assert_eq!(trace.stats.references(), trace.len() as u64);
}

// ============================================================================
// Worked scenarios
// ============================================================================

/// Four distinct pages through three frames: every reference faults.
#[test]
fn test_fifo_four_pages_three_frames() {
    let trace = fifo(&pages(&[1, 2, 3, 4, 1, 2, 5]), 3).unwrap();
    assert_trace_consistent(&trace);

    assert_eq!(trace.total_faults(), 7);
    let evicted: Vec<Option<PageRef>> = trace.steps.iter().map(|s| s.evicted).collect();
    assert_eq!(
        evicted,
        vec![
            None,
            None,
            None,
            Some(PageRef(1)),
            Some(PageRef(2)),
            Some(PageRef(3)),
            Some(PageRef(4)),
        ]
    );
}

/// Capacity forces an eviction before every repeat under FIFO and LRU.
#[test]
fn test_cycle_longer_than_capacity() {
    let refs = pages(&[1, 2, 3, 1, 2, 3]);

    assert_eq!(fifo(&refs, 2).unwrap().total_faults(), 6);
    assert_eq!(lru(&refs, 2).unwrap().total_faults(), 6);

    // Optimal keeps page 1 across the first eviction and hits twice
    let trace = optimal(&refs, 2).unwrap();
    assert_trace_consistent(&trace);
    assert_eq!(trace.total_faults(), 4);
}

/// Empty input is valid and produces empty traces.
#[test]
fn test_empty_reference_string() {
    let result = simulate_and_compare(&[], 3).unwrap();

    for trace in &result.traces {
        assert!(trace.is_empty());
        assert_eq!(trace.total_faults(), 0);
    }
    assert_eq!(result.best, Policy::Fifo);
    assert_eq!(result.best_policies(), Policy::ALL.to_vec());
}

/// Repeats of one page with one frame fault only once.
#[test]
fn test_single_frame_repeats() {
    let refs = pages(&[1, 1, 1, 1]);

    for policy in Policy::ALL {
        let trace = simulate(policy, &refs, 1).unwrap();
        assert_trace_consistent(&trace);
        assert_eq!(trace.total_faults(), 1, "{}", policy);
        assert_eq!(trace.stats.hits, 3);
    }
}

/// The classic 20-reference string from operating systems textbooks.
#[test]
fn test_textbook_reference_string() {
    let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
    let result = simulate_and_compare(&refs, 3).unwrap();

    assert_eq!(result.total_faults(Policy::Fifo), Some(15));
    assert_eq!(result.total_faults(Policy::Lru), Some(12));
    assert_eq!(result.total_faults(Policy::Optimal), Some(9));
    assert_eq!(result.best, Policy::Optimal);

    for trace in &result.traces {
        assert_trace_consistent(trace);
    }
}

/// FIFO ties with Optimal while LRU faults more: FIFO must win.
#[test]
fn test_comparator_prefers_fifo_on_tie() {
    let result = simulate_and_compare(&pages(&[1, 2, 1, 3, 2]), 2).unwrap();

    assert_eq!(result.total_faults(Policy::Fifo), Some(3));
    assert_eq!(result.total_faults(Policy::Lru), Some(4));
    assert_eq!(result.total_faults(Policy::Optimal), Some(3));
    assert_eq!(result.best, Policy::Fifo);
}

/// Belady's anomaly: FIFO faults more with four frames than with three.
#[test]
fn test_fifo_belady_anomaly() {
    let refs = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);

    assert_eq!(fifo(&refs, 3).unwrap().total_faults(), 9);
    assert_eq!(fifo(&refs, 4).unwrap().total_faults(), 10);
}

// ============================================================================
// Snapshots and errors
// ============================================================================

/// Frames fill left to right and pad with the empty marker.
#[test]
fn test_snapshot_padding() {
    let trace = lru(&pages(&[5, 6]), 3).unwrap();

    assert_eq!(
        trace.steps[0].frames,
        vec![Slot::Occupied(PageRef(5)), Slot::Empty, Slot::Empty]
    );
    assert_eq!(
        trace.steps[1].frames,
        vec![Slot::Occupied(PageRef(5)), Slot::Occupied(PageRef(6)), Slot::Empty]
    );
}

/// An evicted page's slot is closed up and the new page goes last.
#[test]
fn test_eviction_keeps_display_order() {
    let trace = lru(&pages(&[1, 2, 3, 1, 4]), 3).unwrap();

    let last: Vec<PageRef> = trace.steps[4].resident().collect();
    assert_eq!(last, pages(&[1, 3, 4]));
}

/// Zero frames is rejected by every entry point.
#[test]
fn test_zero_frames() {
    let refs = pages(&[1, 2, 3]);

    assert!(matches!(fifo(&refs, 0), Err(Error::InvalidCapacity(0))));
    assert!(matches!(lru(&refs, 0), Err(Error::InvalidCapacity(0))));
    assert!(matches!(optimal(&refs, 0), Err(Error::InvalidCapacity(0))));
    assert!(matches!(
        simulate_and_compare(&refs, 0),
        Err(Error::InvalidCapacity(0))
    ));
}

/// Enough frames for every distinct page: one fault per distinct page.
#[test]
fn test_capacity_covers_working_set() {
    let refs = pages(&[3, 1, 3, 2, 1, 2, 3, 4]);

    for policy in Policy::ALL {
        let trace = simulate(policy, &refs, 4).unwrap();
        assert_eq!(trace.total_faults(), 4, "{}", policy);
        assert_eq!(trace.stats.evictions, 0);
    }
}
