//! Per-category graph cache owned by the caller.
//!
//! Building a category graph is quadratic in its record count, so callers
//! answering several queries keep the graphs they already built here. The
//! cache holds no global state; dropping it drops the graphs.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info};

use crate::builder::{SimilarityGraph, SimilarityGraphBuilder};
use crate::error::Result;
use crate::record::FeatureRecord;

pub struct GraphCache<K> {
    builder: SimilarityGraphBuilder,
    graphs: HashMap<String, SimilarityGraph<K>>,
}

impl<K> GraphCache<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new(builder: SimilarityGraphBuilder) -> Self {
        Self {
            builder,
            graphs: HashMap::new(),
        }
    }

    /// Graph of `category`, built from `records` on first request.
    ///
    /// Later calls for the same category return the stored graph and ignore
    /// `records`.
    pub fn get_or_build(
        &mut self,
        records: &[FeatureRecord<K>],
        category: &str,
    ) -> Result<&SimilarityGraph<K>> {
        match self.graphs.entry(category.to_string()) {
            Entry::Occupied(entry) => {
                debug!("Graph cache hit for {:?}", category);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                info!("Graph cache miss for {:?}, building", category);
                let graph = self.builder.build(records, category)?;
                Ok(entry.insert(graph))
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&SimilarityGraph<K>> {
        self.graphs.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.graphs.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn clear(&mut self) {
        self.graphs.clear();
    }
}

impl<K> Default for GraphCache<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new(SimilarityGraphBuilder::default())
    }
}
