//! Undirected weighted graph keyed by an opaque item id.
//!
//! - Vertices live in a `HashMap<K, Vertex>`; inserting an existing id is a no-op.
//! - Each vertex keeps a `neighbour id -> weight` map. Edges are written to
//!   both endpoints so adjacency stays symmetric with equal weights.
//! - Self-loops are rejected with `GraphError::InvalidEdge`.
//! - Re-adding an edge overwrites its weight (last write wins).

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

use crate::error::{GraphError, Result};

/// A single vertex: its id, a payload (the category label for songs) and the
/// weights of the edges to its neighbours.
#[derive(Debug, Clone)]
pub struct Vertex<K, P = (), W = f64> {
    pub id: K,
    pub payload: P,
    neighbours: HashMap<K, W>,
}

impl<K: Eq + Hash, P, W: Copy> Vertex<K, P, W> {
    fn new(id: K, payload: P) -> Self {
        Self {
            id,
            payload,
            neighbours: HashMap::new(),
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Weight of the edge to `other`, if the two are adjacent.
    #[inline]
    pub fn weight_to(&self, other: &K) -> Option<W> {
        self.neighbours.get(other).copied()
    }

    pub fn neighbours(&self) -> &HashMap<K, W> {
        &self.neighbours
    }
}

/// Weighted undirected graph.
///
/// `K` is the item id, `P` a per-vertex payload and `W` the edge weight.
/// Weights must convert to `f64` for averaging; `W::default()` is reported for
/// pairs of vertices that are not adjacent.
///
/// # Examples
///
/// ```
/// use songspace::graph::WeightedGraph;
///
/// let mut g: WeightedGraph<&str> = WeightedGraph::new();
/// g.add_vertex("a", ());
/// g.add_vertex("b", ());
/// g.add_edge("a", "b", 2.5).unwrap();
///
/// assert!(g.are_adjacent(&"b", &"a"));
/// assert_eq!(g.weight_between(&"a", &"b").unwrap(), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<K, P = (), W = f64> {
    vertices: HashMap<K, Vertex<K, P, W>>,
}

impl<K, P, W> Default for WeightedGraph<K, P, W> {
    fn default() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }
}

impl<K, P, W> WeightedGraph<K, P, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Copy + Default + Into<f64>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
        }
    }

    /// Add a vertex with no neighbours. Does nothing if `id` is already present.
    pub fn add_vertex(&mut self, id: K, payload: P) {
        if !self.vertices.contains_key(&id) {
            trace!("add_vertex {:?}", id);
            self.vertices.insert(id.clone(), Vertex::new(id, payload));
        }
    }

    /// Connect `id1` and `id2` with `weight`, overwriting any previous weight
    /// between the same pair.
    ///
    /// # Errors
    ///
    /// - `InvalidEdge` if `id1 == id2`
    /// - `UnknownVertex` if either id is not in the graph
    pub fn add_edge(&mut self, id1: K, id2: K, weight: W) -> Result<()> {
        if id1 == id2 {
            return Err(GraphError::InvalidEdge(format!("{id1:?}")));
        }
        if !self.vertices.contains_key(&id1) {
            return Err(GraphError::unknown(&id1));
        }
        if !self.vertices.contains_key(&id2) {
            return Err(GraphError::unknown(&id2));
        }

        if let Some(v1) = self.vertices.get_mut(&id1) {
            v1.neighbours.insert(id2.clone(), weight);
        }
        if let Some(v2) = self.vertices.get_mut(&id2) {
            v2.neighbours.insert(id1, weight);
        }
        Ok(())
    }

    /// Whether the two ids are adjacent. Unknown ids are simply not adjacent.
    pub fn are_adjacent(&self, id1: &K, id2: &K) -> bool {
        match (self.vertices.get(id1), self.vertices.contains_key(id2)) {
            (Some(v1), true) => v1.neighbours.contains_key(id2),
            _ => false,
        }
    }

    /// Ids of every vertex directly connected to `id`, unordered.
    pub fn neighbours_of(&self, id: &K) -> Result<HashSet<K>> {
        let v = self.vertex_or_err(id)?;
        Ok(v.neighbours.keys().cloned().collect())
    }

    /// Unordered `(neighbour, weight)` pairs of `id`.
    pub fn neighbour_weights(&self, id: &K) -> Result<Vec<(K, W)>> {
        let v = self.vertex_or_err(id)?;
        Ok(v.neighbours.iter().map(|(k, &w)| (k.clone(), w)).collect())
    }

    /// Weight of the edge between two vertices; `W::default()` when they are
    /// not adjacent.
    pub fn weight_between(&self, id1: &K, id2: &K) -> Result<W> {
        let v1 = self.vertex_or_err(id1)?;
        self.vertex_or_err(id2)?;
        Ok(v1.weight_to(id2).unwrap_or_default())
    }

    /// Mean weight of the edges incident to `id`.
    ///
    /// # Errors
    ///
    /// - `UnknownVertex` if `id` is not in the graph
    /// - `EmptyNeighbourhood` if the vertex has no neighbours
    pub fn average_edge_weight(&self, id: &K) -> Result<f64> {
        let v = self.vertex_or_err(id)?;
        if v.neighbours.is_empty() {
            return Err(GraphError::EmptyNeighbourhood(format!("{id:?}")));
        }
        let total: f64 = v.neighbours.values().map(|&w| w.into()).sum();
        Ok(total / v.neighbours.len() as f64)
    }

    pub fn degree(&self, id: &K) -> Result<usize> {
        Ok(self.vertex_or_err(id)?.degree())
    }

    #[inline]
    pub fn contains(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &K) -> Option<&Vertex<K, P, W>> {
        self.vertices.get(id)
    }

    pub fn payload(&self, id: &K) -> Option<&P> {
        self.vertices.get(id).map(|v| &v.payload)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.degree()).sum::<usize>() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex ids.
    pub fn vertices(&self) -> HashSet<K> {
        self.vertices.keys().cloned().collect()
    }

    /// Ids of the vertices whose payload equals `payload`.
    pub fn vertices_with(&self, payload: &P) -> HashSet<K>
    where
        P: PartialEq,
    {
        self.vertices
            .values()
            .filter(|v| &v.payload == payload)
            .map(|v| v.id.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex<K, P, W>> {
        self.vertices.values()
    }

    fn vertex_or_err(&self, id: &K) -> Result<&Vertex<K, P, W>> {
        self.vertices.get(id).ok_or_else(|| GraphError::unknown(id))
    }
}
