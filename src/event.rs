use crate::{Direction, VertexId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A graph event with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEvent {
    pub timestamp: DateTime<Utc>,
    pub event: EventType,
}

impl GraphEvent {
    /// Create a new event with the current timestamp
    pub fn new(event: EventType) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Types of events that can occur in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventType {
    VertexCreated {
        id: VertexId,
        x: f64,
        y: f64,
    },

    VertexMoved {
        id: VertexId,
        x: f64,
        y: f64,
    },

    LoopCreated {
        vertex: VertexId,
    },

    LoopRemoved {
        vertex: VertexId,
    },

    EdgeCreated {
        vertex1: VertexId,
        vertex2: VertexId,
        weight: i64,
        direction: Direction,
    },

    EdgeDirectionChanged {
        edge: usize,
        direction: Direction,
    },

    /// All vertices, loops and edges were discarded
    GraphReset {
        vertices: usize,
        loops: usize,
        edges: usize,
    },
}
