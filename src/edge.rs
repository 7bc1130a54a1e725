use crate::VertexId;
use serde::{Deserialize, Serialize};

/// Where an edge's arrowhead points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Direction {
    /// No arrowhead
    #[default]
    Undirected = 0,
    /// Arrowhead at `vertex1`
    TowardFirst = 1,
    /// Arrowhead at `vertex2`
    TowardSecond = 2,
}

impl Direction {
    /// Convert a direction code to a Direction, returning None for invalid codes
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Undirected),
            1 => Some(Self::TowardFirst),
            2 => Some(Self::TowardSecond),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Next direction in the cycle Undirected -> TowardFirst -> TowardSecond -> Undirected
    pub fn rotate(self) -> Self {
        match self {
            Self::Undirected => Self::TowardFirst,
            Self::TowardFirst => Self::TowardSecond,
            Self::TowardSecond => Self::Undirected,
        }
    }

    pub fn is_directed(self) -> bool {
        self != Self::Undirected
    }

    /// Human-readable label for UI
    pub fn label(self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::TowardFirst => "toward first",
            Self::TowardSecond => "toward second",
        }
    }
}

/// Parse weight text typed by the user.
///
/// Anything that is not an integer coerces to 0.
pub fn parse_weight(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// A weighted, optionally directed connection between two vertices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub vertex1: VertexId,
    pub vertex2: VertexId,
    pub weight: i64,
    pub direction: Direction,
}

impl Edge {
    /// Create a new edge. A missing or zero weight becomes 1 and a missing
    /// direction becomes undirected.
    pub fn new(
        vertex1: VertexId,
        vertex2: VertexId,
        weight: Option<i64>,
        direction: Option<Direction>,
    ) -> Self {
        Self {
            vertex1,
            vertex2,
            weight: weight.filter(|w| *w != 0).unwrap_or(1),
            direction: direction.unwrap_or_default(),
        }
    }

    /// Check if this edge touches a given vertex
    pub fn involves(&self, vertex: VertexId) -> bool {
        self.vertex1 == vertex || self.vertex2 == vertex
    }

    /// Endpoints ordered (tail, head) for a directed edge
    pub fn oriented(&self) -> Option<(VertexId, VertexId)> {
        match self.direction {
            Direction::Undirected => None,
            Direction::TowardFirst => Some((self.vertex2, self.vertex1)),
            Direction::TowardSecond => Some((self.vertex1, self.vertex2)),
        }
    }

    /// Advance the direction one step through its cycle
    pub fn cycle_direction(&mut self) -> Direction {
        self.direction = self.direction.rotate();
        self.direction
    }
}
