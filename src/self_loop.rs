use crate::VertexId;
use serde::{Deserialize, Serialize};

/// A self-connection decorating a single vertex
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Loop {
    pub vertex: VertexId,
}

impl Loop {
    pub fn new(vertex: VertexId) -> Self {
        Self { vertex }
    }
}
