// Graph Matrix Editor - Core Library

pub mod config;
pub mod edge;
pub mod event;
pub mod graph;
pub mod input;
pub mod matrix;
pub mod render;
pub mod self_loop;
pub mod style;
pub mod ui;
pub mod vertex;

// Re-export main types for convenience
pub use config::EditorConfig;
pub use edge::{parse_weight, Direction, Edge};
pub use event::{EventType, GraphEvent};
pub use graph::{AdjacencyRule, GraphModel, MAX_EVENTS};
pub use input::{EditorMode, InputController, PendingEdge, PointerOutcome};
pub use matrix::AdjacencyMatrix;
pub use render::Renderer;
pub use self_loop::Loop;
pub use style::{EdgeStyle, LoopStyle, VertexStyle};
pub use ui::GraphEditorApp;
pub use vertex::{Vertex, VertexId, HIT_TOLERANCE, VERTEX_RADIUS};
