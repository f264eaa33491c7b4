use crate::operations::creation::DEFAULT_QUADRANT_SEGMENTS;

/// Parameters shared by every symbol a renderer draws.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Radius of the label clearance hole, in screen pixels.
    pub clearance_px: f64,
    /// Segments per quarter circle of point buffers.
    pub buffer_quadrant_segments: u32,
    /// Font of ordinary labels.
    pub font: String,
    /// Font of the single-letter task labels.
    pub bigger_font: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clearance_px: 10.0,
            buffer_quadrant_segments: DEFAULT_QUADRANT_SEGMENTS,
            font: "14px sans-serif".to_owned(),
            bigger_font: "bold 18px sans-serif".to_owned(),
        }
    }
}
