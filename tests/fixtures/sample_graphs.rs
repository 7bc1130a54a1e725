// Helper functions to build test graphs with various configurations

use graph_matrix_editor::{AdjacencyRule, Direction, GraphModel, VertexId};

/// Vertices A(0, 0) and B(10, 10) under the default rule, nothing else
pub fn create_pair() -> (GraphModel, VertexId, VertexId) {
    create_pair_with_rule(AdjacencyRule::default())
}

pub fn create_pair_with_rule(rule: AdjacencyRule) -> (GraphModel, VertexId, VertexId) {
    let mut graph = GraphModel::with_rule(rule);
    let a = graph.create_vertex(0.0, 0.0).unwrap();
    let b = graph.create_vertex(10.0, 10.0).unwrap();
    (graph, a, b)
}

/// A triangle A -> B -> C -> A of directed edges with weights 1, 2, 3,
/// matched with the directional rule
pub fn create_directed_triangle() -> (GraphModel, [VertexId; 3]) {
    let mut graph = GraphModel::with_rule(AdjacencyRule::Directional);
    let a = graph.create_vertex(0.0, 0.0).unwrap();
    let b = graph.create_vertex(100.0, 0.0).unwrap();
    let c = graph.create_vertex(50.0, 90.0).unwrap();

    graph
        .create_edge(a, b, Some(1), Some(Direction::TowardSecond))
        .unwrap();
    graph
        .create_edge(b, c, Some(2), Some(Direction::TowardSecond))
        .unwrap();
    // Stored as (A, C) with the arrow at A, so it runs C -> A
    graph
        .create_edge(a, c, Some(3), Some(Direction::TowardFirst))
        .unwrap();

    (graph, [a, b, c])
}

/// A row of `n` vertices spaced far enough apart not to overlap
pub fn create_row(n: usize) -> GraphModel {
    let mut graph = GraphModel::new();
    for i in 0..n {
        graph.create_vertex(i as f64 * 40.0, 0.0).unwrap();
    }
    graph
}
