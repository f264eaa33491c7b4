mod factory;
mod fallback;
mod palette;

pub use factory::StyleFactory;
pub use fallback::default_style;
pub use palette::{Color, Mode, Palette};

use crate::geometry::Geometry;
use crate::math::Point2;

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Label parameters requested by a generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub text: String,
    /// Font override; `None` uses the renderer's default font.
    pub font: Option<String>,
    /// Rotation in radians.
    pub rotation: f64,
    /// Whether the renderer may flip the label to keep it readable.
    pub flip: bool,
    pub align: TextAlign,
}

impl TextOptions {
    /// Creates upright, centered, non-flipping label options.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            rotation: 0.0,
            flip: false,
            align: TextAlign::Center,
        }
    }

    #[must_use]
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A renderable primitive.
///
/// Geometry and anchors are expressed in the output frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    SolidLine {
        geometry: Geometry,
        stroke: Color,
        fill: Option<Color>,
    },
    FilledPolygon {
        geometry: Geometry,
        fill: Color,
    },
    WireFrame {
        geometry: Geometry,
        stroke: Color,
    },
    Text {
        anchor: Point2,
        text: String,
        font: String,
        rotation: f64,
        flip: bool,
        align: TextAlign,
    },
    Handles {
        points: Vec<Point2>,
    },
}

impl Style {
    /// Returns the geometry of line and polygon primitives.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Self::SolidLine { geometry, .. }
            | Self::FilledPolygon { geometry, .. }
            | Self::WireFrame { geometry, .. } => Some(geometry),
            Self::Text { .. } | Self::Handles { .. } => None,
        }
    }

    /// Returns the label of a text primitive.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
