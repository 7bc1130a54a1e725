use serde::{Deserialize, Serialize};

/// Drawing style for vertex markers and their index labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VertexStyle {
    /// Drawn circle radius. Hit testing always uses `VERTEX_RADIUS`.
    pub radius: f32,
    pub stroke_rgb: [u8; 3],
    pub stroke_width: f32,
    pub label_size: f32,
    /// Label position relative to the vertex center
    pub label_offset: [f32; 2],
}

impl Default for VertexStyle {
    fn default() -> Self {
        Self {
            radius: crate::VERTEX_RADIUS as f32,
            stroke_rgb: [0, 0, 0],
            stroke_width: 5.0,
            label_size: 14.0,
            label_offset: [-4.0, 20.0],
        }
    }
}

/// Drawing style for self-loops (a tilted ellipse beside the vertex)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoopStyle {
    pub stroke_rgb: [u8; 3],
    pub stroke_width: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotation_deg: f32,
    /// Number of segments used to approximate the ellipse
    pub segments: usize,
}

impl Default for LoopStyle {
    fn default() -> Self {
        Self {
            stroke_rgb: [0x21, 0x96, 0xF3],
            stroke_width: 2.0,
            radius_x: 8.0,
            radius_y: 10.0,
            rotation_deg: 45.0,
            segments: 32,
        }
    }
}

/// Drawing style for edges, arrowheads and weight labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EdgeStyle {
    pub stroke_rgb: [u8; 3],
    pub stroke_width: f32,
    pub label_size: f32,
    /// Horizontal shift of the weight label from the edge midpoint
    pub label_offset_x: f32,
    pub arrow_width: f32,
    pub arrow_angle_deg: f32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke_rgb: [0x21, 0x96, 0xF3],
            stroke_width: 4.0,
            label_size: 14.0,
            label_offset_x: 10.0,
            arrow_width: 10.0,
            arrow_angle_deg: 30.0,
        }
    }
}
