//! Input rows for the similarity builder.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::{GraphError, Result};

/// Feature columns of the song catalog, in scoring order.
pub const FEATURE_COLUMNS: [&str; 6] = [
    "acousticness",
    "danceability",
    "energy",
    "instrumentalness",
    "liveness",
    "valence",
];

/// One catalog item: id, category label and the ordered feature values used
/// for scoring. The builder only reads records.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord<K> {
    pub id: K,
    pub category: String,
    pub features: Vec<f64>,
}

impl<K> FeatureRecord<K> {
    pub fn new(id: K, category: impl Into<String>, features: Vec<f64>) -> Self {
        Self {
            id,
            category: category.into(),
            features,
        }
    }

    /// Build a record from a `column name -> value` row, picking the values of
    /// [`FEATURE_COLUMNS`] in order.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use songspace::record::{FeatureRecord, FEATURE_COLUMNS};
    ///
    /// let row: HashMap<String, f64> = FEATURE_COLUMNS
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, c)| (c.to_string(), i as f64 / 10.0))
    ///     .collect();
    ///
    /// let rec = FeatureRecord::from_columns(32894u64, "Electronic", &row).unwrap();
    /// assert_eq!(rec.features, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
    /// ```
    pub fn from_columns(
        id: K,
        category: impl Into<String>,
        row: &HashMap<String, f64>,
    ) -> Result<Self> {
        let features = FEATURE_COLUMNS
            .iter()
            .map(|&col| {
                row.get(col)
                    .copied()
                    .ok_or_else(|| GraphError::MissingFeature(col.to_string()))
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self::new(id, category, features))
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

impl<K: Debug> FeatureRecord<K> {
    /// Check the record has `expected` features and that all are finite.
    pub(crate) fn validate(&self, expected: usize) -> Result<()> {
        if self.features.len() != expected {
            return Err(GraphError::FeatureDimensionMismatch {
                id: format!("{:?}", self.id),
                expected,
                got: self.features.len(),
            });
        }
        if let Some(column) = self.features.iter().position(|v| !v.is_finite()) {
            return Err(GraphError::NonFiniteFeature {
                id: format!("{:?}", self.id),
                column,
            });
        }
        Ok(())
    }
}
