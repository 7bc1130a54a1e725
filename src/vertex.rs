use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawn radius of a vertex marker (pixels)
pub const VERTEX_RADIUS: f64 = 5.0;

/// Extra slack around the marker that still counts as a hit
pub const HIT_TOLERANCE: f64 = 5.0;

/// Identity of a vertex: its creation-order index within the model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Index of the vertex in creation order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex on the drawing surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    /// Creation-order index, never reassigned
    index: usize,

    /// Center position (pixels)
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// Create a new vertex at the given position
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> VertexId {
        VertexId(self.index)
    }

    /// Update the vertex position
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Euclidean distance from the vertex center to a point
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.x).hypot(y - self.y)
    }

    /// Check whether a point falls inside the clickable region
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) < VERTEX_RADIUS + HIT_TOLERANCE
    }
}
