/*!
 * Tests for batch planning and count reconciliation
 */

use sublate::translation::batch::{join_entries, plan_batches, reconcile_counts, split_response, SPLITTER};

/// Test contiguous partitioning with a shorter last batch
#[test]
fn test_plan_batches_withUnevenSplit_shouldKeepOrderAndCoverage() {
    let items: Vec<usize> = (0..10).collect();
    let batches = plan_batches(&items, 3);

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 4);
    assert_eq!(batches[1].len(), 4);
    assert_eq!(batches[2].len(), 2);

    // Concatenation reproduces the input exactly
    let rejoined: Vec<usize> = batches.concat();
    assert_eq!(rejoined, items);
}

/// Test clamping when more batches are requested than items exist
#[test]
fn test_plan_batches_withRequestAboveLen_shouldClampToLen() {
    let items = vec!["a", "b", "c"];
    let batches = plan_batches(&items, 100);

    assert_eq!(batches.len(), 3);
    assert!(batches.iter().all(|b| b.len() == 1));
}

/// Test that a zero batch request is clamped up to one
#[test]
fn test_plan_batches_withZeroRequested_shouldUseSingleBatch() {
    let items = vec![1, 2, 3, 4];
    let batches = plan_batches(&items, 0);

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 4);
}

/// Test empty input produces no batches
#[test]
fn test_plan_batches_withEmptyInput_shouldReturnNoBatches() {
    let items: Vec<String> = Vec::new();
    assert!(plan_batches(&items, 5).is_empty());
}

/// Test batch coverage across a range of lengths and batch counts
#[test]
fn test_plan_batches_withManyCombinations_shouldAlwaysCoverAllItems() {
    for len in 1..=25 {
        let items: Vec<usize> = (0..len).collect();
        for requested in 1..=30 {
            let batches = plan_batches(&items, requested);
            assert!(batches.iter().all(|b| !b.is_empty()));
            let total: usize = batches.iter().map(|b| b.len()).sum();
            assert_eq!(total, len, "len={} requested={}", len, requested);
        }
    }
}

/// Test request joining and response splitting around the separator token
#[test]
fn test_split_response_withSeparatorToken_shouldTrimSegments() {
    let texts = vec!["one".to_string(), "two".to_string()];
    let joined = join_entries(&texts);
    assert_eq!(joined, format!("one\n{}\ntwo", SPLITTER));

    let segments = split_response(&joined);
    assert_eq!(segments, vec!["one", "two"]);
}

/// Test padding when the model returns too few segments
#[test]
fn test_reconcile_counts_withMissingTail_shouldPadWithOriginals() {
    let originals = vec![
        "first".to_string(),
        "second".to_string(),
        "third".to_string(),
        "fourth".to_string(),
    ];
    let segments = vec!["uno".to_string(), "dos".to_string()];

    let reconciled = reconcile_counts(segments, &originals);
    assert_eq!(reconciled.len(), 4);
    assert_eq!(reconciled[0], "uno");
    assert_eq!(reconciled[1], "dos");
    assert_eq!(reconciled[2], "third");
    assert_eq!(reconciled[3], "fourth");
}

/// Test truncation when the model returns too many segments
#[test]
fn test_reconcile_counts_withExtraSegments_shouldTruncate() {
    let originals = vec!["a".to_string(), "b".to_string()];
    let segments = vec!["x".to_string(), "y".to_string(), "z".to_string()];

    let reconciled = reconcile_counts(segments, &originals);
    assert_eq!(reconciled, vec!["x", "y"]);
}

/// Test the matching-count fast path leaves segments untouched
#[test]
fn test_reconcile_counts_withMatchingCounts_shouldPassThrough() {
    let originals = vec!["a".to_string(), "b".to_string()];
    let segments = vec!["x".to_string(), "y".to_string()];

    let reconciled = reconcile_counts(segments.clone(), &originals);
    assert_eq!(reconciled, segments);
}
