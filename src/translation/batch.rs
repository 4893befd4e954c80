/*!
 * Batch planning and response reconciliation.
 *
 * Dialogue lines are partitioned into contiguous batches, each batch
 * translated in one gateway round-trip with entries joined by a literal
 * separator token. The response is split back on the same token and padded or
 * truncated to the input count.
 */

use log::warn;

/// Literal separator token keeping translated segments aligned with sources
pub const SPLITTER: &str = "<splitter>";

/// Partition items into contiguous batches
///
/// The requested batch count is clamped to `1..=len`; each batch holds
/// `ceil(len / effective)` items with the last batch possibly shorter. The
/// concatenation of all batches reproduces the input order exactly, and no
/// batch is empty.
pub fn plan_batches<T>(items: &[T], requested_batch_count: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }

    let effective = requested_batch_count.clamp(1, items.len());
    let items_per_batch = items.len().div_ceil(effective);

    items.chunks(items_per_batch).collect()
}

/// Join batch entries for the request body
pub fn join_entries(texts: &[String]) -> String {
    texts.join(&format!("\n{}\n", SPLITTER))
}

/// Split a response back into per-entry segments
pub fn split_response(content: &str) -> Vec<String> {
    content
        .split(SPLITTER)
        .map(|segment| segment.trim().to_string())
        .collect()
}

/// Force the segment count to match the source count
///
/// Missing tail entries are padded with the corresponding original text,
/// extras are truncated. Best effort only: if the model merged or split
/// entries, every later segment may be misaligned and that is carried through
/// as-is.
pub fn reconcile_counts(mut segments: Vec<String>, originals: &[String]) -> Vec<String> {
    if segments.len() != originals.len() {
        warn!(
            "Translation count mismatch - sources: {}, segments: {}",
            originals.len(),
            segments.len()
        );

        while segments.len() < originals.len() {
            segments.push(originals[segments.len()].clone());
        }
        segments.truncate(originals.len());
    }

    segments
}
