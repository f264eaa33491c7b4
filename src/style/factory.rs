use crate::config::RenderConfig;
use crate::frame::CoordinateAdapter;
use crate::geometry::Geometry;
use crate::math::Point2;

use super::{Color, Mode, Palette, Style, TextOptions};

/// Builds renderable primitives for one feature at one resolution.
///
/// Generators hand working-frame geometry to the factory; every primitive it
/// returns is already converted to the output frame.
pub struct StyleFactory<'a> {
    mode: Mode,
    palette: Palette,
    resolution: f64,
    adapter: &'a dyn CoordinateAdapter,
    config: &'a RenderConfig,
}

impl<'a> StyleFactory<'a> {
    /// Creates a factory for a single draw call.
    #[must_use]
    pub fn new(
        mode: Mode,
        palette: Palette,
        resolution: f64,
        adapter: &'a dyn CoordinateAdapter,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            mode,
            palette,
            resolution,
            adapter,
            config,
        }
    }

    /// Returns the rendering mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the map resolution (working units per screen pixel).
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Returns the renderer configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Resolves a fill color against the current palette.
    pub fn fill(&self, resolver: impl Fn(&Palette) -> Color) -> Color {
        resolver(&self.palette)
    }

    /// A stroked line (or outline) in the affiliation color.
    #[must_use]
    pub fn solid_line(&self, geometry: &Geometry, fill: Option<Color>) -> Style {
        Style::SolidLine {
            geometry: self.adapter.write(geometry),
            stroke: self.palette.primary,
            fill,
        }
    }

    /// A polygon filled with the affiliation color.
    #[must_use]
    pub fn filled_polygon(&self, geometry: &Geometry) -> Style {
        Style::FilledPolygon {
            geometry: self.adapter.write(geometry),
            fill: self.palette.primary,
        }
    }

    /// A thin reference line.
    #[must_use]
    pub fn wire_frame(&self, geometry: &Geometry) -> Style {
        Style::WireFrame {
            geometry: self.adapter.write(geometry),
            stroke: self.palette.accent,
        }
    }

    /// A label at `anchor`.
    #[must_use]
    pub fn text(&self, anchor: Point2, options: TextOptions) -> Style {
        Style::Text {
            anchor: self.adapter.to_output(anchor),
            text: options.text,
            font: options.font.unwrap_or_else(|| self.config.font.clone()),
            rotation: options.rotation,
            flip: options.flip,
            align: options.align,
        }
    }

    /// Interaction handles at the raw anchor points, if the mode shows them.
    #[must_use]
    pub fn handles(&self, points: &[Point2]) -> Vec<Style> {
        if !self.mode.shows_handles() || points.is_empty() {
            return Vec::new();
        }
        vec![Style::Handles {
            points: points.iter().map(|p| self.adapter.to_output(*p)).collect(),
        }]
    }
}
