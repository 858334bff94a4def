//! Nearest-neighbour ranking over a built graph.
//!
//! Neighbours are ordered by ascending edge weight (lowest dissimilarity
//! first). Equal weights are ordered by id ascending so results are stable
//! across runs despite the hash-map storage.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::WeightedGraph;

/// Neighbours of `id` with their weights, most similar first.
pub fn ranked_neighbours<K, P, W>(graph: &WeightedGraph<K, P, W>, id: &K) -> Result<Vec<(K, W)>>
where
    K: Eq + Hash + Clone + Debug + Ord,
    W: Copy + Default + Into<f64> + PartialOrd,
{
    let mut pairs = graph.neighbour_weights(id)?;
    pairs.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    Ok(pairs)
}

/// Ids of the neighbours of `id`, most similar first.
///
/// # Errors
///
/// `UnknownVertex` if `id` is not in the graph.
pub fn recommend<K, P, W>(graph: &WeightedGraph<K, P, W>, id: &K) -> Result<Vec<K>>
where
    K: Eq + Hash + Clone + Debug + Ord,
    W: Copy + Default + Into<f64> + PartialOrd,
{
    Ok(ranked_neighbours(graph, id)?
        .into_iter()
        .map(|(k, _)| k)
        .collect())
}

/// At most `n` recommendations for `id`.
pub fn recommend_top<K, P, W>(graph: &WeightedGraph<K, P, W>, id: &K, n: usize) -> Result<Vec<K>>
where
    K: Eq + Hash + Clone + Debug + Ord,
    W: Copy + Default + Into<f64> + PartialOrd,
{
    let mut ids = recommend(graph, id)?;
    ids.truncate(n);
    Ok(ids)
}
