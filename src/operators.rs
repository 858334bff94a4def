//! Dissimilarity scoring and K-nearest candidate selection
//!
//! - Dissimilarity is the L1 distance: `Σ |a_c - b_c|` over the feature columns
//! - Candidate rows include the scored item itself (distance 0)
//! - Deterministic ordering by (distance asc, position asc)

use std::cmp::Ordering;

/// Sum of absolute per-feature differences. Slices must have equal length.
#[inline]
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "feature vectors must have equal length");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Distances from item `i` to every item, itself included: `(position, diff)`.
pub fn dissimilarity_row(items: &[&[f64]], i: usize) -> Vec<(usize, f64)> {
    let target = items[i];
    items
        .iter()
        .enumerate()
        .map(|(j, other)| (j, l1_distance(target, other)))
        .collect()
}

/// The first `take` entries of `row` by (distance asc, position asc).
pub fn lowest(mut row: Vec<(usize, f64)>, take: usize) -> Vec<(usize, f64)> {
    row.sort_unstable_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    row.truncate(take);
    row
}

/// Candidate neighbours of item `i` among `items`: the `k + 1` lowest entries
/// of its dissimilarity row. The extra slot normally holds `i` itself.
pub fn nearest_candidates(items: &[&[f64]], i: usize, k: usize) -> Vec<(usize, f64)> {
    lowest(dissimilarity_row(items, i), k.saturating_add(1))
}
