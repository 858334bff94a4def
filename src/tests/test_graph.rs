use std::collections::HashSet;

use approx::assert_relative_eq;

use crate::error::GraphError;
use crate::graph::WeightedGraph;

fn triangle() -> WeightedGraph<u32, &'static str> {
    let mut g = WeightedGraph::new();
    g.add_vertex(1, "rock");
    g.add_vertex(2, "rock");
    g.add_vertex(3, "jazz");
    g.add_edge(1, 2, 2.0).unwrap();
    g.add_edge(1, 3, 4.0).unwrap();
    g
}

#[test]
fn test_empty_graph() {
    let g: WeightedGraph<u32> = WeightedGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.are_adjacent(&1, &2));
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut g = triangle();
    let before = g.neighbours_of(&1).unwrap();

    g.add_vertex(1, "pop");

    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.neighbours_of(&1).unwrap(), before);
    // first payload wins
    assert_eq!(g.payload(&1), Some(&"rock"));
}

#[test]
fn test_add_edge_is_symmetric() {
    let g = triangle();
    assert!(g.are_adjacent(&1, &2));
    assert!(g.are_adjacent(&2, &1));
    assert_eq!(g.weight_between(&1, &2).unwrap(), 2.0);
    assert_eq!(g.weight_between(&2, &1).unwrap(), 2.0);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_add_edge_last_write_wins() {
    let mut g = triangle();
    g.add_edge(2, 1, 7.5).unwrap();

    assert_eq!(g.weight_between(&1, &2).unwrap(), 7.5);
    assert_eq!(g.weight_between(&2, &1).unwrap(), 7.5);
    assert_eq!(g.degree(&1).unwrap(), 2);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_self_loop_rejected() {
    let mut g = triangle();
    let err = g.add_edge(1, 1, 0.0).unwrap_err();
    assert_eq!(err, GraphError::InvalidEdge("1".to_string()));
    assert!(!g.neighbours_of(&1).unwrap().contains(&1));
}

#[test]
fn test_add_edge_unknown_vertex() {
    let mut g = triangle();
    assert_eq!(
        g.add_edge(1, 9, 1.0),
        Err(GraphError::UnknownVertex("9".to_string()))
    );
    assert_eq!(
        g.add_edge(9, 1, 1.0),
        Err(GraphError::UnknownVertex("9".to_string()))
    );
    // nothing was written on failure
    assert_eq!(g.degree(&1).unwrap(), 2);
}

#[test]
fn test_are_adjacent_unknown_is_false() {
    let g = triangle();
    assert!(!g.are_adjacent(&1, &42));
    assert!(!g.are_adjacent(&42, &1));
    assert!(!g.are_adjacent(&2, &3));
}

#[test]
fn test_neighbours_of() {
    let g = triangle();
    let expected = HashSet::from([2, 3]);
    assert_eq!(g.neighbours_of(&1).unwrap(), expected);
    assert_eq!(g.neighbours_of(&3).unwrap(), HashSet::from([1]));
    assert!(matches!(
        g.neighbours_of(&5),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_weight_between_not_adjacent_is_zero() {
    let g = triangle();
    assert_eq!(g.weight_between(&2, &3).unwrap(), 0.0);
    assert!(g.weight_between(&2, &99).is_err());
    assert!(g.weight_between(&99, &2).is_err());
}

#[test]
fn test_average_edge_weight() {
    let mut g = triangle();
    assert_relative_eq!(g.average_edge_weight(&1).unwrap(), 3.0);
    assert_relative_eq!(g.average_edge_weight(&2).unwrap(), 2.0);

    g.add_vertex(4, "blues");
    assert_eq!(
        g.average_edge_weight(&4),
        Err(GraphError::EmptyNeighbourhood("4".to_string()))
    );
    assert!(matches!(
        g.average_edge_weight(&10),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_integer_weights() {
    let mut g: WeightedGraph<&str, (), u8> = WeightedGraph::new();
    for id in ["u1", "b1", "b2"] {
        g.add_vertex(id, ());
    }
    g.add_edge("u1", "b1", 5).unwrap();
    g.add_edge("u1", "b2", 2).unwrap();

    assert_eq!(g.weight_between(&"u1", &"b1").unwrap(), 5u8);
    assert_eq!(g.weight_between(&"b1", &"b2").unwrap(), 0u8);
    assert_relative_eq!(g.average_edge_weight(&"u1").unwrap(), 3.5);
}

#[test]
fn test_vertices_with_payload() {
    let g = triangle();
    assert_eq!(g.vertices(), HashSet::from([1, 2, 3]));
    assert_eq!(g.vertices_with(&"rock"), HashSet::from([1, 2]));
    assert_eq!(g.vertices_with(&"jazz"), HashSet::from([3]));
    assert!(g.vertices_with(&"metal").is_empty());
}

#[test]
fn test_neighbour_weights() {
    let g = triangle();
    let mut pairs = g.neighbour_weights(&1).unwrap();
    pairs.sort_by_key(|p| p.0);
    assert_eq!(pairs, vec![(2, 2.0), (3, 4.0)]);

    let v = g.vertex(&3).unwrap();
    assert_eq!(v.degree(), 1);
    assert_eq!(v.weight_to(&1), Some(4.0));
    assert_eq!(v.weight_to(&2), None);
}
