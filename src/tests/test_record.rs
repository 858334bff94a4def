use std::collections::HashMap;

use crate::error::GraphError;
use crate::record::{FeatureRecord, FEATURE_COLUMNS};

fn song_row() -> HashMap<String, f64> {
    HashMap::from([
        ("acousticness".to_string(), 0.00468),
        ("danceability".to_string(), 0.652),
        ("energy".to_string(), 0.941),
        ("instrumentalness".to_string(), 0.792),
        ("liveness".to_string(), 0.115),
        ("valence".to_string(), 0.759),
        ("popularity".to_string(), 27.0),
        ("tempo".to_string(), 100.889),
    ])
}

#[test]
fn test_feature_columns_order() {
    assert_eq!(FEATURE_COLUMNS.len(), 6);
    assert_eq!(FEATURE_COLUMNS[0], "acousticness");
    assert_eq!(FEATURE_COLUMNS[5], "valence");
}

#[test]
fn test_from_columns_picks_feature_columns() {
    let rec = FeatureRecord::from_columns(32894u64, "Electronic", &song_row()).unwrap();
    assert_eq!(rec.id, 32894);
    assert_eq!(rec.category, "Electronic");
    assert_eq!(rec.dimension(), 6);
    assert_eq!(rec.features, vec![0.00468, 0.652, 0.941, 0.792, 0.115, 0.759]);
}

#[test]
fn test_from_columns_missing_column() {
    let mut row = song_row();
    row.remove("liveness");
    let err = FeatureRecord::from_columns(1u64, "Rock", &row).unwrap_err();
    assert_eq!(err, GraphError::MissingFeature("liveness".to_string()));
    assert!(err.is_input_error());
}

#[test]
fn test_validate() {
    let rec = FeatureRecord::new("x", "Jazz", vec![0.1, 0.2]);
    assert!(rec.validate(2).is_ok());
    assert!(matches!(
        rec.validate(3),
        Err(GraphError::FeatureDimensionMismatch { expected: 3, got: 2, .. })
    ));

    let bad = FeatureRecord::new("y", "Jazz", vec![f64::NEG_INFINITY, 0.2]);
    assert_eq!(
        bad.validate(2),
        Err(GraphError::NonFiniteFeature {
            id: "\"y\"".to_string(),
            column: 0
        })
    );
}
