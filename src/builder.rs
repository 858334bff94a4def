use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::operators::nearest_candidates;
use crate::record::FeatureRecord;

// Add logging
use log::{debug, info, trace};

/// Neighbours selected per record when no other value is configured.
pub const DEFAULT_NEIGHBOURS: usize = 15;

/// Graph of songs: payload is the category label, weights are L1 dissimilarities.
pub type SimilarityGraph<K> = WeightedGraph<K, String, f64>;

/// Build parameters. Derives serde so callers can keep them in their own
/// config files; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildParams {
    /// neighbours selected per record (excluding itself)
    pub k: usize,
    /// score records on the rayon pool
    pub parallel: bool,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            k: DEFAULT_NEIGHBOURS,
            parallel: true,
        }
    }
}

/// Builds K-nearest similarity graphs from feature records.
///
/// For every record R:
/// 1) score every record S (R included) with `Σ |R_c - S_c|`
/// 2) sort ascending by (score, position)
/// 3) take the first K+1 entries, skip the one whose id equals R's id and
///    connect R to the rest with the score as weight
///
/// Edges are symmetric, so a vertex can end up with more than K neighbours
/// when other records select it.
///
/// # Complexity
///
/// * **Time**: O(N² × F) for the score rows plus O(N² log N) for the per-record
///   sorts, N = records, F = features. Build one graph per category to keep N small.
/// * **Space**: O(N) per in-flight score row plus O(N × K) for the edges.
///
/// With `parallel` enabled the score rows are computed on the rayon pool into
/// per-record buffers; edges are then inserted by a single thread in record
/// order, so serial and parallel builds yield the same graph.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder {
    params: BuildParams,
}

impl SimilarityGraphBuilder {
    pub fn new() -> Self {
        debug!("Creating SimilarityGraphBuilder with default parameters");
        Self::default()
    }

    /// Neighbours selected per record.
    pub fn with_neighbours(mut self, k: usize) -> Self {
        info!("Setting neighbours per record: {}", k);
        self.params.k = k;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        info!("Setting parallel scoring: {}", parallel);
        self.params.parallel = parallel;
        self
    }

    pub fn with_params(mut self, params: BuildParams) -> Self {
        info!("Configuring builder: {:?}", params);
        self.params = params;
        self
    }

    pub fn params(&self) -> &BuildParams {
        &self.params
    }

    /// Build the graph of the records labelled `category`. Records with any
    /// other label are ignored; no matching record gives an empty graph.
    pub fn build<K>(
        &self,
        records: &[FeatureRecord<K>],
        category: &str,
    ) -> Result<SimilarityGraph<K>>
    where
        K: Eq + Hash + Clone + Debug,
    {
        let selected: Vec<&FeatureRecord<K>> =
            records.iter().filter(|r| r.category == category).collect();
        info!(
            "Building similarity graph for category {:?}: {} of {} records",
            category,
            selected.len(),
            records.len()
        );
        self.build_from(&selected)
    }

    /// Build one graph over every record given, regardless of category.
    pub fn build_all<K>(&self, records: &[FeatureRecord<K>]) -> Result<SimilarityGraph<K>>
    where
        K: Eq + Hash + Clone + Debug,
    {
        info!("Building similarity graph over all {} records", records.len());
        let selected: Vec<&FeatureRecord<K>> = records.iter().collect();
        self.build_from(&selected)
    }

    /// Build an independent graph per category label.
    pub fn build_partitioned<K>(
        &self,
        records: &[FeatureRecord<K>],
    ) -> Result<BTreeMap<String, SimilarityGraph<K>>>
    where
        K: Eq + Hash + Clone + Debug,
    {
        let mut partitions: BTreeMap<&str, Vec<&FeatureRecord<K>>> = BTreeMap::new();
        for record in records {
            partitions
                .entry(record.category.as_str())
                .or_default()
                .push(record);
        }
        info!(
            "Building {} category graphs from {} records",
            partitions.len(),
            records.len()
        );

        partitions
            .into_iter()
            .map(|(category, selected)| -> Result<(String, SimilarityGraph<K>)> {
                debug!("Category {:?}: {} records", category, selected.len());
                Ok((category.to_string(), self.build_from(&selected)?))
            })
            .collect()
    }

    fn build_from<K>(&self, records: &[&FeatureRecord<K>]) -> Result<SimilarityGraph<K>>
    where
        K: Eq + Hash + Clone + Debug,
    {
        let n = records.len();
        if n == 0 {
            debug!("No records, returning empty graph");
            return Ok(WeightedGraph::new());
        }

        let n_features = records[0].dimension();
        for record in records {
            record.validate(n_features)?;
        }
        debug!(
            "Build configuration: n={}, features={}, k={}, parallel={}",
            n, n_features, self.params.k, self.params.parallel
        );

        let mut graph = WeightedGraph::with_capacity(n);
        for record in records {
            graph.add_vertex(record.id.clone(), record.category.clone());
        }

        let items: Vec<&[f64]> = records.iter().map(|r| r.features.as_slice()).collect();
        let k = self.params.k;

        trace!("Scoring {} rows", n);
        let candidates: Vec<Vec<(usize, f64)>> = if self.params.parallel {
            (0..n)
                .into_par_iter()
                .map(|i| nearest_candidates(&items, i, k))
                .collect()
        } else {
            (0..n).map(|i| nearest_candidates(&items, i, k)).collect()
        };

        trace!("Merging candidate lists into graph");
        for (i, nbrs) in candidates.into_iter().enumerate() {
            let id = &records[i].id;
            for (j, diff) in nbrs {
                let other = &records[j].id;
                if other == id {
                    continue;
                }
                graph.add_edge(id.clone(), other.clone(), diff)?;
            }
        }

        let degree_stats = {
            let degrees: Vec<usize> = graph.iter().map(|v| v.degree()).collect();
            let min = degrees.iter().copied().min().unwrap_or(0);
            let max = degrees.iter().copied().max().unwrap_or(0);
            let mean = degrees.iter().sum::<usize>() as f64 / degrees.len().max(1) as f64;
            (min, max, mean)
        };
        debug!(
            "Degree stats - min: {}, max: {}, mean: {:.2}",
            degree_stats.0, degree_stats.1, degree_stats.2
        );

        info!(
            "Similarity graph built: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
