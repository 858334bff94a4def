//! Error types for graph construction and queries.
//!
//! Every failure is local to the call that violated a precondition; nothing is
//! retried. Vertex ids are carried Debug-formatted so the error type stays
//! independent of the graph's key type.
//!
//! ```rust
//! use songspace::graph::WeightedGraph;
//! use songspace::GraphError;
//!
//! let mut graph: WeightedGraph<u32> = WeightedGraph::new();
//! graph.add_vertex(1, ());
//!
//! match graph.add_edge(1, 2, 0.5) {
//!     Err(GraphError::UnknownVertex(id)) => assert_eq!(id, "2"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Errors returned by the graph, the builder and the ranking helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The referenced id is not a vertex of the graph
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// An edge was requested from a vertex to itself
    #[error("Invalid edge: {0} cannot be connected to itself")]
    InvalidEdge(String),

    /// Average weight requested for a vertex without neighbours
    #[error("Vertex {0} has no neighbours")]
    EmptyNeighbourhood(String),

    /// A record's feature count differs from the rest of the input
    #[error("Record {id} has {got} features, expected {expected}")]
    FeatureDimensionMismatch {
        id: String,
        expected: usize,
        got: usize,
    },

    /// NaN or infinite feature value
    #[error("Record {id} has a non-finite value in feature column {column}")]
    NonFiniteFeature { id: String, column: usize },

    /// A named feature column is missing from a source row
    #[error("Missing feature column: {0}")]
    MissingFeature(String),
}

impl GraphError {
    pub(crate) fn unknown<K: std::fmt::Debug>(id: &K) -> Self {
        GraphError::UnknownVertex(format!("{id:?}"))
    }

    /// True for errors caused by malformed input records rather than by
    /// queries against a built graph.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GraphError::FeatureDimensionMismatch { .. }
                | GraphError::NonFiniteFeature { .. }
                | GraphError::MissingFeature(_)
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
