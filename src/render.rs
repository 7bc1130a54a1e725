use crate::{EdgeStyle, EditorConfig, GraphModel, LoopStyle, VertexId, VertexStyle};
use egui::{epaint::PathShape, pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Stroke, Vec2};

const LABEL_COLOR: Color32 = Color32::BLACK;
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 140, 0);

fn color([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// The two barb points of an arrowhead at `tip` for a line coming from `tail`.
/// None when the endpoints coincide.
pub fn arrow_head(tail: Pos2, tip: Pos2, width: f32, angle_deg: f32) -> Option<[Pos2; 2]> {
    let along = tip - tail;
    if along.length() <= f32::EPSILON {
        return None;
    }
    let back = -along.normalized() * width;
    let angle = angle_deg.to_radians();
    Some([tip + rotate(back, angle), tip + rotate(back, -angle)])
}

/// Closed polyline approximating a rotated ellipse around `center`
pub fn loop_outline(center: Pos2, style: &LoopStyle) -> Vec<Pos2> {
    let segments = style.segments.max(3);
    let rotation = style.rotation_deg.to_radians();

    (0..segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * std::f32::consts::TAU;
            let local = vec2(style.radius_x * t.cos(), style.radius_y * t.sin());
            center + rotate(local, rotation)
        })
        .collect()
}

/// Draws a graph: loops first, then edges, then vertices on top
#[derive(Debug, Clone)]
pub struct Renderer {
    vertex: VertexStyle,
    loops: LoopStyle,
    edge: EdgeStyle,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            vertex: config.vertex.clone(),
            loops: config.loops.clone(),
            edge: config.edge.clone(),
        }
    }

    /// Paint the whole graph. `origin` is the screen position of graph
    /// coordinate (0, 0); `highlight` marks a vertex (e.g. a pending edge source).
    pub fn paint(
        &self,
        painter: &Painter,
        origin: Pos2,
        graph: &GraphModel,
        highlight: Option<VertexId>,
    ) {
        let to_screen = |id: VertexId| {
            graph
                .vertex(id)
                .map(|v| origin + vec2(v.x as f32, v.y as f32))
        };

        // Loops
        let loop_stroke = Stroke::new(self.loops.stroke_width, color(self.loops.stroke_rgb));
        for l in graph.loops() {
            let Some(center) = to_screen(l.vertex) else {
                continue;
            };
            let center = center + vec2(self.vertex.radius, self.vertex.radius);
            painter.add(PathShape::closed_line(
                loop_outline(center, &self.loops),
                loop_stroke,
            ));
        }

        // Edges
        let edge_stroke = Stroke::new(self.edge.stroke_width, color(self.edge.stroke_rgb));
        for edge in graph.edges() {
            let (Some(p1), Some(p2)) = (to_screen(edge.vertex1), to_screen(edge.vertex2)) else {
                continue;
            };
            painter.line_segment([p1, p2], edge_stroke);

            if let Some((tail, tip)) = edge.oriented() {
                if let (Some(tail), Some(tip)) = (to_screen(tail), to_screen(tip)) {
                    if let Some([left, right]) =
                        arrow_head(tail, tip, self.edge.arrow_width, self.edge.arrow_angle_deg)
                    {
                        painter.add(PathShape::line(vec![left, tip, right], edge_stroke));
                    }
                }
            }

            let mid = pos2((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
            painter.text(
                mid + vec2(self.edge.label_offset_x, 0.0),
                Align2::LEFT_BOTTOM,
                edge.weight.to_string(),
                FontId::proportional(self.edge.label_size),
                LABEL_COLOR,
            );
        }

        // Vertices
        for vertex in graph.vertices() {
            let center = origin + vec2(vertex.x as f32, vertex.y as f32);
            let stroke_color = if highlight == Some(vertex.id()) {
                HIGHLIGHT_COLOR
            } else {
                color(self.vertex.stroke_rgb)
            };

            painter.circle_stroke(
                center,
                self.vertex.radius,
                Stroke::new(self.vertex.stroke_width, stroke_color),
            );
            painter.text(
                center + Vec2::from(self.vertex.label_offset),
                Align2::LEFT_BOTTOM,
                vertex.index().to_string(),
                FontId::proportional(self.vertex.label_size),
                LABEL_COLOR,
            );
        }
    }
}
