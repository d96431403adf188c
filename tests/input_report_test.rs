//! Integration tests for the input and output layers.
//!
//! These cover the path the CLI takes: text in, comparison, table or JSON out.

use std::fs;

use pagesim::input::{parse_capacity, parse_references, read_references};
use pagesim::report::render_comparison;
use pagesim::{simulate_and_compare, Error, PageRef, Policy};
use tempfile::tempdir;

/// Parse, compare and render a form-style input end to end.
#[test]
fn test_text_to_report() {
    let refs = parse_references("1 2 3 4 1 2 5").unwrap();
    let capacity = parse_capacity("3").unwrap();

    let result = simulate_and_compare(&refs, capacity.get()).unwrap();
    let report = render_comparison(&result);

    assert!(report.contains("References: 1 2 3 4 1 2 5"));
    assert!(report.contains("Frames: 3"));
    assert!(report.contains("FIFO (3 frames)"));
    assert!(report.contains("Best policy: "));
    assert_eq!(report.matches("Total faults: ").count(), 3);
}

/// References can be loaded from a file with mixed separators.
#[test]
fn test_read_references_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "7, 0, 1\n2 0 3\n").unwrap();

    let refs = read_references(&path).unwrap();
    assert_eq!(
        refs,
        vec![PageRef(7), PageRef(0), PageRef(1), PageRef(2), PageRef(0), PageRef(3)]
    );
}

/// A missing file surfaces as an I/O error.
#[test]
fn test_read_references_missing_file() {
    let dir = tempdir().unwrap();
    let result = read_references(dir.path().join("missing.txt"));

    assert!(matches!(result, Err(Error::Io(_))));
}

/// A bad token in a file reports its position.
#[test]
fn test_read_references_bad_token() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "1 2 three").unwrap();

    match read_references(&path) {
        Err(Error::InvalidReference { position, token }) => {
            assert_eq!(position, 3);
            assert_eq!(token, "three");
        }
        other => panic!("Expected InvalidReference, got {:?}", other),
    }
}

/// JSON output carries traces, totals and the winner with explicit markers.
#[test]
fn test_json_output_shape() {
    let refs = parse_references("1 2 1").unwrap();
    let result = simulate_and_compare(&refs, 2).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["capacity"], 2);
    assert_eq!(json["best"], "FIFO");
    assert_eq!(json["totals"]["FIFO"], 2);
    assert_eq!(json["totals"]["LRU"], 2);
    assert_eq!(json["totals"]["Optimal"], 2);

    let fifo = &json["traces"][0];
    assert_eq!(fifo["policy"], "FIFO");
    assert_eq!(fifo["steps"][0]["frames"], serde_json::json!([1, null]));
    assert_eq!(fifo["steps"][0]["cumulative_faults"], 1);
    assert_eq!(fifo["steps"][2]["fault"], false);
    assert!(fifo["steps"][2]["cumulative_faults"].is_null());
    assert_eq!(fifo["stats"]["hits"], 1);

    assert_eq!(
        result.trace(Policy::Optimal).map(|t| t.total_faults()),
        Some(2)
    );
}
