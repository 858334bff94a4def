//! # songspace
//!
//! K-nearest similarity graphs over catalog items (songs) described by numeric
//! feature vectors.
//!
//! - [`record`]: input rows (`FeatureRecord`) and the song feature columns.
//! - [`operators`]: the L1 dissimilarity metric and K-nearest selection.
//! - [`graph`]: an undirected weighted graph keyed by item id.
//! - [`builder`]: connects every record to its K lowest-dissimilarity peers.
//! - [`recommend`]: ranks a vertex's neighbours by ascending edge weight.
//! - [`cache`]: a caller-owned per-category graph cache.
//!
//! ```
//! use songspace::builder::SimilarityGraphBuilder;
//! use songspace::record::FeatureRecord;
//! use songspace::recommend::recommend;
//!
//! let records = vec![
//!     FeatureRecord::new(1u64, "rock", vec![0.0, 0.0]),
//!     FeatureRecord::new(2u64, "rock", vec![1.0, 0.0]),
//!     FeatureRecord::new(3u64, "rock", vec![0.0, 5.0]),
//! ];
//!
//! let graph = SimilarityGraphBuilder::new().build(&records, "rock").unwrap();
//! assert_eq!(recommend(&graph, &1).unwrap(), vec![2, 3]);
//! ```

pub mod builder;
pub mod cache;
pub mod error;
pub mod graph;
pub mod operators;
pub mod recommend;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{GraphError, Result};

/// Install `env_logger` for demos and tests. Safe to call more than once.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
