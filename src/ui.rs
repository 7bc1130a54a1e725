use crate::{
    Direction, EditorConfig, EditorMode, GraphModel, InputController, PointerOutcome, Renderer,
};
use anyhow::Result;
use egui::{Color32, RichText, Sense};

/// Main application state
pub struct GraphEditorApp {
    /// The graph being edited
    graph: GraphModel,

    /// Mode and pointer state
    input: InputController,

    renderer: Renderer,

    /// Edge dialog fields
    weight_text: String,
    direction_code: u8,

    /// Text of the last exported matrix, shown while Some
    matrix_text: Option<String>,

    /// Whether the side panel is visible
    show_side_panel: bool,

    /// Status message
    status_message: String,
}

impl Default for GraphEditorApp {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl GraphEditorApp {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            graph: GraphModel::with_rule(config.adjacency_rule),
            input: InputController::new(),
            renderer: Renderer::new(config),
            weight_text: "1".to_string(),
            direction_code: Direction::Undirected.code(),
            matrix_text: None,
            show_side_panel: true,
            status_message: "Click the canvas to place vertices".to_string(),
        }
    }

    /// Render the entire UI
    fn render_ui(&mut self, ctx: &egui::Context) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_side_panel, "Show Graph Panel");
                });

                ui.menu_button("Help", |ui| {
                    ui.label("Vertex: click to add, drag to move");
                    ui.label("Loop: click a vertex to toggle its loop");
                    ui.label("Edge: click two vertices, then set weight and direction");
                    ui.label("Matrix: show the adjacency matrix");
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut mode = self.input.mode();
                for candidate in EditorMode::ALL {
                    ui.radio_value(&mut mode, candidate, candidate.label());
                }
                if mode != self.input.mode() {
                    self.input.set_mode(mode);
                    self.status_message = format!("Mode: {}", mode.label());
                }

                ui.separator();

                if ui.button("🗑 Clear").clicked() {
                    self.reset_graph();
                }
                if ui.button("▦ Matrix").clicked() {
                    self.show_matrix();
                }

                ui.separator();

                // Stats
                ui.label(format!("Vertices: {}", self.graph.vertex_count()));
                ui.label(format!("Loops: {}", self.graph.loop_count()));
                ui.label(format!(
                    "Edges: {} ({} directed)",
                    self.graph.edge_count(),
                    self.graph.directed_edge_count()
                ));
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        if self.show_side_panel {
            egui::SidePanel::right("graph_panel")
                .default_width(240.0)
                .show(ctx, |ui| {
                    self.render_graph_panel(ui);
                });
        }

        // Central panel (canvas)
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_canvas(ui);
        });

        self.render_edge_dialog(ctx);
        self.render_matrix_window(ctx);
    }

    /// List vertices and edges; edges get a button to cycle their direction
    fn render_graph_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Graph");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("Vertices").strong());
            if self.graph.is_empty() {
                ui.label("  (none)");
            }
            for vertex in self.graph.vertices() {
                let marker = if self.graph.loop_on_vertex(vertex.id()).is_some() {
                    " ⟲"
                } else {
                    ""
                };
                ui.label(format!(
                    "  {} at ({:.0}, {:.0}), {} edges{}",
                    vertex.index(),
                    vertex.x,
                    vertex.y,
                    self.graph.edges_of(vertex.id()).len(),
                    marker
                ));
            }

            ui.separator();
            ui.label(RichText::new("Edges").strong());

            let mut cycle = None;
            for (i, edge) in self.graph.edges().iter().enumerate() {
                ui.horizontal(|ui| {
                    let arrow = match edge.direction {
                        Direction::Undirected => "-",
                        Direction::TowardFirst => "←",
                        Direction::TowardSecond => "→",
                    };
                    ui.label(format!(
                        "  {} {} {}  w={}",
                        edge.vertex1, arrow, edge.vertex2, edge.weight
                    ));
                    if ui
                        .small_button("⟳")
                        .on_hover_text("Cycle direction")
                        .clicked()
                    {
                        cycle = Some(i);
                    }
                });
            }
            if self.graph.edge_count() == 0 {
                ui.label("  (none)");
            }

            if let Some(edge) = cycle {
                match self.graph.cycle_edge_direction(edge) {
                    Ok(direction) => {
                        self.status_message = format!("Edge {} is now {}", edge, direction.label());
                    }
                    Err(e) => {
                        self.status_message = format!("❌ {}", e);
                    }
                }
            }
        });
    }

    /// Render the drawing surface and route pointer input
    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas_rect = response.rect;
        let origin = canvas_rect.left_top();

        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);

        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        // Pointer down; ignored while the edge dialog is open
        if pressed && response.hovered() && self.input.pending_edge().is_none() {
            if let Some(pos) = pointer {
                let local = pos - origin;
                self.handle_pointer_down(local.x as f64, local.y as f64);
            }
        }

        // Pointer move / up / leave
        if self.input.dragging().is_some() {
            match pointer {
                Some(pos) if canvas_rect.contains(pos) && !released => {
                    let local = pos - origin;
                    if let Err(e) = self
                        .input
                        .pointer_move(&mut self.graph, local.x as f64, local.y as f64)
                    {
                        self.status_message = format!("❌ {}", e);
                        self.input.pointer_up();
                    }
                }
                _ => self.input.pointer_up(),
            }
        }

        self.renderer
            .paint(&painter, origin, &self.graph, self.input.edge_source());
    }

    fn handle_pointer_down(&mut self, x: f64, y: f64) {
        match self.input.pointer_down(&mut self.graph, x, y) {
            Ok(outcome) => {
                let message = match outcome {
                    PointerOutcome::Nothing => return,
                    PointerOutcome::VertexCreated(id) => format!("✓ Vertex {} created", id),
                    PointerOutcome::DragStarted(id) => format!("Moving vertex {}", id),
                    PointerOutcome::LoopToggled(id) => format!("✓ Loop toggled on vertex {}", id),
                    PointerOutcome::EdgeSourceSelected(id) => {
                        format!("Vertex {} selected, now pick the second vertex", id)
                    }
                    PointerOutcome::LoopKept(id) => format!("✓ Loop kept on vertex {}", id),
                    PointerOutcome::EdgeRequested(pending) => {
                        self.weight_text = "1".to_string();
                        self.direction_code = Direction::Undirected.code();
                        format!("Set weight and direction for edge {} to {}", pending.from, pending.to)
                    }
                };
                self.status_message = message;
            }
            Err(e) => {
                self.status_message = format!("❌ Error: {}", e);
            }
        }
    }

    /// Weight/direction dialog for a pending edge
    fn render_edge_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.input.pending_edge() else {
            return;
        };

        let mut create = false;
        let mut cancel = false;

        egui::Window::new("New edge")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("From vertex {} to vertex {}", pending.from, pending.to));
                ui.horizontal(|ui| {
                    ui.label("Weight:");
                    ui.text_edit_singleline(&mut self.weight_text);
                });

                ui.label("Direction:");
                for direction in [
                    Direction::Undirected,
                    Direction::TowardFirst,
                    Direction::TowardSecond,
                ] {
                    ui.radio_value(&mut self.direction_code, direction.code(), direction.label());
                }

                ui.horizontal(|ui| {
                    create = ui.button("Create").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });

        if create {
            match self
                .input
                .confirm_edge(&mut self.graph, &self.weight_text, self.direction_code)
            {
                Ok(_) => self.status_message = "✓ Edge created".to_string(),
                Err(e) => self.status_message = format!("❌ Error: {}", e),
            }
        } else if cancel {
            self.input.cancel_edge();
            self.status_message = "Edge creation cancelled".to_string();
        }
    }

    fn render_matrix_window(&mut self, ctx: &egui::Context) {
        let Some(text) = self.matrix_text.clone() else {
            return;
        };

        let mut open = true;
        let mut copy = false;

        egui::Window::new("Adjacency matrix")
            .open(&mut open)
            .show(ctx, |ui| {
                if text.is_empty() {
                    ui.label("(empty graph)");
                } else {
                    ui.label(RichText::new(&text).monospace());
                }
                ui.separator();
                copy = ui.button("📋 Copy").clicked();
            });

        if copy {
            self.status_message = match copy_to_clipboard(&text) {
                Ok(()) => "✓ Matrix copied to clipboard".to_string(),
                Err(e) => format!("❌ Failed to copy: {}", e),
            };
        }
        if !open {
            self.matrix_text = None;
        }
    }

    fn show_matrix(&mut self) {
        let matrix = self.graph.create_matrix();
        log::info!("exported {0}×{0} adjacency matrix", matrix.size());
        self.matrix_text = Some(matrix.to_string());
    }

    fn reset_graph(&mut self) {
        self.graph.reset();
        self.input.clear();
        self.matrix_text = None;
        self.status_message = "✓ Graph cleared".to_string();
    }
}

/// Copy text to clipboard
fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

impl eframe::App for GraphEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_ui(ctx);
    }
}
