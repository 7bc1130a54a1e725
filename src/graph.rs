use crate::{AdjacencyMatrix, Direction, Edge, EventType, GraphEvent, Loop, Vertex, VertexId};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// How edges are matched when asking whether `v1` connects to `v2`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyRule {
    /// Undirected edges match both orientations, directed edges only match
    /// when the arrowhead faces the second vertex of the query
    Directional,

    /// Any edge stored as `(v1, v2)` matches regardless of its direction;
    /// the remaining branches are the same as `Directional`
    #[default]
    Legacy,
}

impl AdjacencyRule {
    /// Check whether `edge` answers the query "from `v1` to `v2`"
    pub fn matches(self, edge: &Edge, v1: VertexId, v2: VertexId) -> bool {
        let forward = edge.vertex1 == v1 && edge.vertex2 == v2;
        let reverse = edge.vertex2 == v1 && edge.vertex1 == v2;

        let directed = (forward && edge.direction == Direction::TowardSecond)
            || (reverse && edge.direction == Direction::TowardFirst);

        match self {
            Self::Directional => {
                ((forward || reverse) && edge.direction == Direction::Undirected) || directed
            }
            Self::Legacy => {
                forward || (reverse && edge.direction == Direction::Undirected) || directed
            }
        }
    }
}

/// Oldest events are dropped once the log holds this many
pub const MAX_EVENTS: usize = 10_000;

/// In-memory graph of vertices, self-loops and weighted edges
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    /// Vertices in creation order; position equals index
    vertices: Vec<Vertex>,

    /// At most one loop per vertex
    loops: Vec<Loop>,

    /// Edges in creation order, parallel edges allowed
    edges: Vec<Edge>,

    rule: AdjacencyRule,

    /// Event log for history tracking
    events: Vec<GraphEvent>,
}

impl GraphModel {
    /// Create a new empty graph using the legacy adjacency rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with a specific adjacency rule
    pub fn with_rule(rule: AdjacencyRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    pub fn rule(&self) -> AdjacencyRule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: AdjacencyRule) {
        self.rule = rule;
    }

    // ========== Vertices ==========

    /// Create a vertex at `(x, y)` unless an existing vertex already covers
    /// that point. Returns the new vertex id, or None if nothing was created.
    pub fn create_vertex(&mut self, x: f64, y: f64) -> Option<VertexId> {
        if let Some(existing) = self.find_current_vertex(x, y) {
            log::debug!("point ({x}, {y}) already covered by vertex {}", existing.index());
            return None;
        }

        let vertex = Vertex::new(self.vertices.len(), x, y);
        let id = vertex.id();
        self.vertices.push(vertex);

        self.log_event(EventType::VertexCreated { id, x, y });
        log::debug!("created vertex {id} at ({x}, {y})");

        Some(id)
    }

    /// Move a vertex to a new position
    pub fn move_vertex(&mut self, id: VertexId, x: f64, y: f64) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(id.index())
            .ok_or_else(|| anyhow!("Vertex not found: {}", id))?;

        if vertex.x == x && vertex.y == y {
            return Ok(());
        }
        vertex.set_position(x, y);

        // A drag produces one event per vertex, updated as the vertex travels
        let same_drag = matches!(
            self.events.last(),
            Some(GraphEvent { event: EventType::VertexMoved { id: moved, .. }, .. }) if *moved == id
        );
        if same_drag {
            self.events.pop();
        }
        self.log_event(EventType::VertexMoved { id, x, y });

        Ok(())
    }

    /// Get a vertex by id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Get all vertices in creation order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// First vertex (in creation order) whose hit region contains `(x, y)`
    pub fn find_current_vertex(&self, x: f64, y: f64) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.contains_point(x, y))
    }

    // ========== Loops ==========

    /// Toggle the loop on the vertex under `(x, y)`, if any.
    /// Returns the vertex whose loop was toggled.
    pub fn create_loop(&mut self, x: f64, y: f64) -> Option<VertexId> {
        let id = self.find_current_vertex(x, y)?.id();
        // The id came from our own vertex list, so the toggle cannot fail
        self.toggle_loop(id, true).ok()?;
        Some(id)
    }

    /// Add a loop to `vertex`, or remove the existing one when
    /// `remove_if_exists` is set. An existing loop is kept otherwise.
    pub fn toggle_loop(&mut self, vertex: VertexId, remove_if_exists: bool) -> Result<()> {
        self.ensure_vertex(vertex)?;

        match self.loops.iter().position(|l| l.vertex == vertex) {
            Some(pos) if remove_if_exists => {
                self.loops.remove(pos);
                self.log_event(EventType::LoopRemoved { vertex });
            }
            Some(_) => {}
            None => {
                self.loops.push(Loop::new(vertex));
                self.log_event(EventType::LoopCreated { vertex });
            }
        }

        Ok(())
    }

    /// Get the loop on a vertex
    pub fn loop_on_vertex(&self, vertex: VertexId) -> Option<&Loop> {
        self.loops.iter().find(|l| l.vertex == vertex)
    }

    /// Get all loops in creation order
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    // ========== Edges ==========

    /// Append an edge between two vertices. Returns its position in the
    /// edge list. Parallel edges are kept.
    pub fn create_edge(
        &mut self,
        vertex1: VertexId,
        vertex2: VertexId,
        weight: Option<i64>,
        direction: Option<Direction>,
    ) -> Result<usize> {
        self.ensure_vertex(vertex1)?;
        self.ensure_vertex(vertex2)?;

        if vertex1 == vertex2 {
            log::warn!("edge from vertex {vertex1} to itself; loops are the usual way to model this");
        }

        let edge = Edge::new(vertex1, vertex2, weight, direction);

        self.log_event(EventType::EdgeCreated {
            vertex1,
            vertex2,
            weight: edge.weight,
            direction: edge.direction,
        });

        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    /// First edge, in creation order, that connects `vertex1` to `vertex2`
    /// under the model's adjacency rule
    pub fn edge_vertexes_connected(&self, vertex1: VertexId, vertex2: VertexId) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| self.rule.matches(e, vertex1, vertex2))
    }

    /// Advance an edge's direction one step (undirected, toward first, toward second)
    pub fn cycle_edge_direction(&mut self, edge: usize) -> Result<Direction> {
        let direction = self
            .edges
            .get_mut(edge)
            .ok_or_else(|| anyhow!("Edge not found: {}", edge))?
            .cycle_direction();

        self.log_event(EventType::EdgeDirectionChanged { edge, direction });

        Ok(direction)
    }

    /// Get all edges in creation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get all edges touching a vertex
    pub fn edges_of(&self, vertex: VertexId) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.involves(vertex)).collect()
    }

    // ========== Matrix Export ==========

    /// Build the adjacency matrix: loops on the diagonal as 1, edge weights
    /// off the diagonal, 0 where nothing connects
    pub fn create_matrix(&self) -> AdjacencyMatrix {
        let n = self.vertices.len();
        let mut matrix = AdjacencyMatrix::zeros(n);

        for (i, from) in self.vertices.iter().enumerate() {
            if self.loop_on_vertex(from.id()).is_some() {
                matrix.set(i, i, 1);
            }

            for (j, to) in self.vertices.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(edge) = self.edge_vertexes_connected(from.id(), to.id()) {
                    matrix.set(i, j, edge.weight);
                }
            }
        }

        matrix
    }

    // ========== Reset ==========

    /// Discard every vertex, loop and edge. Vertex numbering restarts at 0.
    pub fn reset(&mut self) {
        let (vertices, loops, edges) = (self.vertices.len(), self.loops.len(), self.edges.len());

        self.vertices.clear();
        self.loops.clear();
        self.edges.clear();

        self.log_event(EventType::GraphReset {
            vertices,
            loops,
            edges,
        });
        log::info!("graph reset ({vertices} vertices, {loops} loops, {edges} edges discarded)");
    }

    // ========== Event Logging ==========

    fn log_event(&mut self, event: EventType) {
        self.events.push(GraphEvent::new(event));

        if self.events.len() > MAX_EVENTS {
            let excess = self.events.len() - MAX_EVENTS;
            self.events.drain(..excess);
        }
    }

    /// Get all events
    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    /// Clear event log
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    // ========== Utility Methods ==========

    fn ensure_vertex(&self, id: VertexId) -> Result<()> {
        if id.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(anyhow!("Vertex not found: {}", id))
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn directed_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.direction.is_directed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn two_vertices(rule: AdjacencyRule) -> (GraphModel, VertexId, VertexId) {
        let mut graph = GraphModel::with_rule(rule);
        let a = graph.create_vertex(0.0, 0.0).unwrap();
        let b = graph.create_vertex(100.0, 100.0).unwrap();
        (graph, a, b)
    }

    #[test]
    fn test_graph_creation() {
        let graph = GraphModel::new();
        assert!(graph.is_empty());
        assert_eq!(graph.loop_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.rule(), AdjacencyRule::Legacy);
    }

    #[test]
    fn test_default_rule_fills_both_cells_for_toward_first() {
        let mut graph = GraphModel::new();
        let a = graph.create_vertex(0.0, 0.0).unwrap();
        let b = graph.create_vertex(100.0, 100.0).unwrap();
        graph
            .create_edge(a, b, Some(2), Some(Direction::TowardFirst))
            .unwrap();

        assert_eq!(graph.create_matrix().rows(), &[vec![0, 2], vec![2, 0]]);
    }

    #[test]
    fn test_vertex_indices_follow_creation_order() {
        let mut graph = GraphModel::new();
        let ids: Vec<VertexId> = (0..5)
            .map(|i| graph.create_vertex(i as f64 * 50.0, 0.0).unwrap())
            .collect();

        assert_eq!(ids, (0..5).map(VertexId).collect::<Vec<_>>());
        for (i, vertex) in graph.vertices().iter().enumerate() {
            assert_eq!(vertex.index(), i);
        }
    }

    #[test]
    fn test_create_vertex_on_occupied_point() {
        let mut graph = GraphModel::new();
        graph.create_vertex(10.0, 10.0).unwrap();

        assert_eq!(graph.create_vertex(10.0, 10.0), None);
        assert_eq!(graph.create_vertex(15.0, 12.0), None);
        assert_eq!(graph.vertex_count(), 1);

        // Just outside the hit region
        assert_eq!(graph.create_vertex(20.0, 10.0), Some(VertexId(1)));
    }

    #[test]
    fn test_move_vertex() {
        let (mut graph, a, _) = two_vertices(AdjacencyRule::Directional);

        graph.move_vertex(a, 300.0, 40.0).unwrap();
        let vertex = graph.vertex(a).unwrap();
        assert_eq!((vertex.x, vertex.y), (300.0, 40.0));
        assert_eq!(graph.find_current_vertex(300.0, 40.0).map(Vertex::id), Some(a));
        assert!(graph.find_current_vertex(0.0, 0.0).is_none());

        assert!(graph.move_vertex(VertexId(9), 0.0, 0.0).is_err());
    }

    #[test]
    fn test_overlapping_vertices_after_move() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph.move_vertex(b, 0.0, 0.0).unwrap();

        // Shared positions are allowed; the first vertex wins hit tests
        assert_eq!(graph.find_current_vertex(0.0, 0.0).map(Vertex::id), Some(a));
        assert_ne!(graph.vertex(a), graph.vertex(b));
    }

    #[test]
    fn test_toggle_loop() {
        let (mut graph, a, _) = two_vertices(AdjacencyRule::Directional);

        graph.toggle_loop(a, true).unwrap();
        assert_matches!(graph.loop_on_vertex(a), Some(l) if l.vertex == a);

        // Keeping an existing loop
        graph.toggle_loop(a, false).unwrap();
        assert_eq!(graph.loop_count(), 1);

        graph.toggle_loop(a, true).unwrap();
        assert_matches!(graph.loop_on_vertex(a), None);

        // No loop yet: created even when removal is disabled
        graph.toggle_loop(a, false).unwrap();
        assert_eq!(graph.loop_count(), 1);

        assert!(graph.toggle_loop(VertexId(7), true).is_err());
    }

    #[test]
    fn test_create_loop_by_position() {
        let (mut graph, _, b) = two_vertices(AdjacencyRule::Directional);

        assert_eq!(graph.create_loop(500.0, 500.0), None);
        assert_eq!(graph.loop_count(), 0);

        assert_eq!(graph.create_loop(103.0, 98.0), Some(b));
        assert!(graph.loop_on_vertex(b).is_some());

        assert_eq!(graph.create_loop(100.0, 100.0), Some(b));
        assert!(graph.loop_on_vertex(b).is_none());
    }

    #[test]
    fn test_create_edge() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);

        assert_eq!(graph.create_edge(a, b, Some(3), None).unwrap(), 0);
        assert_eq!(graph.create_edge(a, b, Some(3), None).unwrap(), 1);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_of(a).len(), 2);

        assert!(graph.create_edge(a, VertexId(5), None, None).is_err());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_edge_is_not_rejected() {
        let (mut graph, a, _) = two_vertices(AdjacencyRule::Directional);
        graph.create_edge(a, a, None, None).unwrap();
        assert_eq!(graph.edge_count(), 1);
        // Diagonal only reflects loops
        assert_eq!(graph.create_matrix().get(0, 0), Some(0));
    }

    #[test]
    fn test_directed_edge_matching() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph
            .create_edge(a, b, Some(5), Some(Direction::TowardSecond))
            .unwrap();

        assert_matches!(graph.edge_vertexes_connected(a, b), Some(e) if e.weight == 5);
        assert_matches!(graph.edge_vertexes_connected(b, a), None);
    }

    #[test]
    fn test_toward_first_matching() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph
            .create_edge(a, b, Some(2), Some(Direction::TowardFirst))
            .unwrap();

        assert!(graph.edge_vertexes_connected(a, b).is_none());
        assert!(graph.edge_vertexes_connected(b, a).is_some());
        assert_eq!(graph.create_matrix().rows(), &[vec![0, 0], vec![2, 0]]);
    }

    #[test]
    fn test_legacy_rule_matches_stored_order() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Legacy);
        graph
            .create_edge(a, b, Some(2), Some(Direction::TowardFirst))
            .unwrap();

        assert!(graph.edge_vertexes_connected(a, b).is_some());
        assert!(graph.edge_vertexes_connected(b, a).is_some());
        assert_eq!(graph.create_matrix().rows(), &[vec![0, 2], vec![2, 0]]);
    }

    #[test]
    fn test_first_matching_edge_wins() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph.create_edge(a, b, Some(7), None).unwrap();
        graph.create_edge(b, a, Some(9), None).unwrap();

        assert_eq!(graph.edge_vertexes_connected(a, b).unwrap().weight, 7);
        assert_eq!(graph.edge_vertexes_connected(b, a).unwrap().weight, 7);
    }

    #[test]
    fn test_undirected_matrix() {
        let mut graph = GraphModel::new();
        let a = graph.create_vertex(0.0, 0.0).unwrap();
        let b = graph.create_vertex(10.0, 10.0).unwrap();
        graph.create_edge(a, b, Some(3), Some(Direction::Undirected)).unwrap();

        let matrix = graph.create_matrix();
        assert_eq!(matrix.rows(), &[vec![0, 3], vec![3, 0]]);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn test_loop_matrix() {
        let (mut graph, a, _) = two_vertices(AdjacencyRule::Directional);
        graph.toggle_loop(a, true).unwrap();

        assert_eq!(graph.create_matrix().rows(), &[vec![1, 0], vec![0, 0]]);
    }

    #[test]
    fn test_cycle_edge_direction() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        let edge = graph.create_edge(a, b, None, None).unwrap();

        assert_eq!(graph.cycle_edge_direction(edge).unwrap(), Direction::TowardFirst);
        assert_eq!(graph.edges()[edge].direction, Direction::TowardFirst);
        assert!(graph.cycle_edge_direction(4).is_err());
    }

    #[test]
    fn test_directed_edge_count() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        let edge = graph.create_edge(a, b, None, None).unwrap();
        graph
            .create_edge(b, a, None, Some(Direction::TowardSecond))
            .unwrap();
        assert_eq!(graph.directed_edge_count(), 1);

        graph.cycle_edge_direction(edge).unwrap();
        assert_eq!(graph.directed_edge_count(), 2);
    }

    #[test]
    fn test_reset() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph.toggle_loop(a, true).unwrap();
        graph.create_edge(a, b, None, None).unwrap();

        graph.reset();

        assert!(graph.is_empty());
        assert_eq!(graph.loop_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.create_matrix().is_empty());
        assert!(graph.find_current_vertex(0.0, 0.0).is_none());

        // Numbering restarts
        assert_eq!(graph.create_vertex(50.0, 50.0), Some(VertexId(0)));
    }

    #[test]
    fn test_event_logging() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph.create_edge(a, b, Some(4), None).unwrap();
        graph.reset();

        let kinds: Vec<&EventType> = graph.events().iter().map(|e| &e.event).collect();
        assert_eq!(kinds.len(), 4);
        assert_matches!(kinds[0], EventType::VertexCreated { id, .. } if *id == a);
        assert_matches!(kinds[2], EventType::EdgeCreated { weight: 4, .. });
        assert_matches!(
            kinds[3],
            EventType::GraphReset {
                vertices: 2,
                loops: 0,
                edges: 1
            }
        );

        graph.clear_events();
        assert!(graph.events().is_empty());
    }

    #[test]
    fn test_moves_collapse_into_one_event() {
        let (mut graph, a, b) = two_vertices(AdjacencyRule::Directional);
        graph.clear_events();

        for _ in 0..1000 {
            graph.move_vertex(a, 10.0, 10.0).unwrap();
        }
        for step in 0..50 {
            graph.move_vertex(a, 20.0 + step as f64, 10.0).unwrap();
        }
        assert_eq!(graph.events().len(), 1);
        assert_matches!(
            graph.events()[0].event,
            EventType::VertexMoved { id, x, .. } if id == a && x == 69.0
        );

        // A different vertex starts a new entry
        graph.move_vertex(b, 300.0, 300.0).unwrap();
        graph.move_vertex(a, 0.0, 0.0).unwrap();
        assert_eq!(graph.events().len(), 3);
    }

    #[test]
    fn test_stationary_move_logs_nothing() {
        let (mut graph, a, _) = two_vertices(AdjacencyRule::Directional);
        let before = graph.events().len();

        graph.move_vertex(a, 0.0, 0.0).unwrap();
        assert_eq!(graph.events().len(), before);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut graph = GraphModel::new();
        let a = graph.create_vertex(0.0, 0.0).unwrap();
        for _ in 0..MAX_EVENTS + 10 {
            graph.toggle_loop(a, true).unwrap();
        }

        assert_eq!(graph.events().len(), MAX_EVENTS);
        // The creation event was the oldest and is gone
        assert!(!matches!(graph.events()[0].event, EventType::VertexCreated { .. }));
    }
}
