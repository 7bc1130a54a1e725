use crate::{parse_weight, Direction, GraphModel, VertexId};
use anyhow::Result;

/// What a click on the drawing surface does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Create vertices, or drag an existing one
    #[default]
    Vertex,
    /// Toggle loops
    Loop,
    /// Connect two vertices
    Edge,
}

impl EditorMode {
    pub const ALL: [EditorMode; 3] = [EditorMode::Vertex, EditorMode::Loop, EditorMode::Edge];

    pub fn label(self) -> &'static str {
        match self {
            EditorMode::Vertex => "Vertex",
            EditorMode::Loop => "Loop",
            EditorMode::Edge => "Edge",
        }
    }
}

/// Two vertices picked in edge mode, waiting for weight and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEdge {
    pub from: VertexId,
    pub to: VertexId,
}

/// Result of a pointer press, used for status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Nothing,
    VertexCreated(VertexId),
    DragStarted(VertexId),
    LoopToggled(VertexId),
    EdgeSourceSelected(VertexId),
    /// Second click landed on the edge source: ensure it has a loop
    LoopKept(VertexId),
    EdgeRequested(PendingEdge),
}

/// Turns pointer events into graph mutations according to the current mode
#[derive(Debug, Default)]
pub struct InputController {
    mode: EditorMode,

    /// Vertex being dragged in vertex mode
    dragging: Option<VertexId>,

    /// First vertex picked in edge mode
    edge_source: Option<VertexId>,

    /// Edge waiting for the weight/direction dialog
    pending_edge: Option<PendingEdge>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switch modes, dropping any half-finished interaction
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode != mode {
            log::debug!("editor mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.clear();
    }

    /// Forget drag and edge state (after a graph reset)
    pub fn clear(&mut self) {
        self.dragging = None;
        self.edge_source = None;
        self.pending_edge = None;
    }

    pub fn dragging(&self) -> Option<VertexId> {
        self.dragging
    }

    pub fn edge_source(&self) -> Option<VertexId> {
        self.edge_source
    }

    pub fn pending_edge(&self) -> Option<PendingEdge> {
        self.pending_edge
    }

    /// Handle a primary button press at graph coordinates `(x, y)`
    pub fn pointer_down(&mut self, graph: &mut GraphModel, x: f64, y: f64) -> Result<PointerOutcome> {
        let hit = graph.find_current_vertex(x, y).map(|v| v.id());

        let outcome = match self.mode {
            EditorMode::Vertex => match hit {
                Some(id) => {
                    self.dragging = Some(id);
                    PointerOutcome::DragStarted(id)
                }
                None => graph
                    .create_vertex(x, y)
                    .map_or(PointerOutcome::Nothing, PointerOutcome::VertexCreated),
            },
            EditorMode::Loop => graph
                .create_loop(x, y)
                .map_or(PointerOutcome::Nothing, PointerOutcome::LoopToggled),
            EditorMode::Edge => match (self.edge_source, hit) {
                (_, None) => PointerOutcome::Nothing,
                (None, Some(id)) => {
                    self.edge_source = Some(id);
                    PointerOutcome::EdgeSourceSelected(id)
                }
                (Some(source), Some(id)) if source == id => {
                    self.edge_source = None;
                    graph.toggle_loop(id, false)?;
                    PointerOutcome::LoopKept(id)
                }
                (Some(source), Some(id)) => {
                    self.edge_source = None;
                    let pending = PendingEdge { from: source, to: id };
                    self.pending_edge = Some(pending);
                    PointerOutcome::EdgeRequested(pending)
                }
            },
        };

        Ok(outcome)
    }

    /// Handle pointer motion; moves the dragged vertex if there is one.
    /// Returns whether anything moved.
    pub fn pointer_move(&mut self, graph: &mut GraphModel, x: f64, y: f64) -> Result<bool> {
        match self.dragging {
            Some(id) => {
                graph.move_vertex(id, x, y)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Button released or pointer left the surface
    pub fn pointer_up(&mut self) {
        self.dragging = None;
    }

    /// Create the pending edge from dialog input. Weight text that is not an
    /// integer counts as 0 (stored as 1); unknown direction codes mean undirected.
    pub fn confirm_edge(
        &mut self,
        graph: &mut GraphModel,
        weight_text: &str,
        direction_code: u8,
    ) -> Result<Option<usize>> {
        let Some(PendingEdge { from, to }) = self.pending_edge.take() else {
            return Ok(None);
        };

        let direction = Direction::from_code(direction_code);
        if direction.is_none() {
            log::warn!("unknown direction code {direction_code}, using undirected");
        }

        let edge = graph.create_edge(from, to, Some(parse_weight(weight_text)), direction)?;
        Ok(Some(edge))
    }

    pub fn cancel_edge(&mut self) {
        self.pending_edge = None;
    }
}
