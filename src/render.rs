use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::error::{GeometryError, Result};
use crate::feature::Feature;
use crate::frame::{CoordinateAdapter, Planar, Projection};
use crate::math::Point2;
use crate::sidc::{normalize, standard_identity};
use crate::style::{default_style, Mode, Palette, Style, StyleFactory};
use crate::symbols::{lookup, Context};

/// Turns features into renderable primitives.
///
/// A renderer is immutable once built and can be shared between threads.
/// Each [`Renderer::render`] call is independent of every other call.
#[derive(Debug, Clone)]
pub struct Renderer<P = Planar> {
    mode: Mode,
    projection: P,
    config: RenderConfig,
}

impl Renderer<Planar> {
    /// Creates a renderer for planar coordinates with the default
    /// configuration.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            projection: Planar,
            config: RenderConfig::default(),
        }
    }
}

impl<P: Projection> Renderer<P> {
    /// Replaces the projection between feature coordinates and the working
    /// frame.
    #[must_use]
    pub fn with_projection<Q: Projection>(self, projection: Q) -> Renderer<Q> {
        Renderer {
            mode: self.mode,
            projection,
            config: self.config,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the rendering mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders one feature at `resolution` (working units per screen pixel).
    ///
    /// Features with an unregistered code are drawn as a plain line through
    /// their anchors. Interaction handles are appended when the mode shows
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if a registered symbol is
    /// asked for a resolution that is not a positive finite number, a `PreconditionError` if the feature's
    /// anchors do not satisfy its symbol, or a `ToolkitError` if a boolean
    /// operation fails. Nothing is returned for the feature in any case.
    pub fn render(&self, feature: &Feature, resolution: f64) -> Result<Vec<Style>> {
        let sidc = normalize(feature.sidc());
        let reference = feature
            .coordinates()
            .first()
            .copied()
            .unwrap_or_else(Point2::origin);
        let adapter = self.projection.adapt(reference);
        let points = adapter.read(feature.coordinates());

        let palette = Palette::new(self.mode, standard_identity(feature.sidc()));
        let styles = StyleFactory::new(self.mode, palette, resolution, &adapter, &self.config);

        let mut out = match lookup(&sidc) {
            Some(spec) => {
                if !resolution.is_finite() || resolution <= 0.0 {
                    return Err(GeometryError::ParameterOutOfRange {
                        parameter: "resolution",
                        value: resolution,
                        min: 0.0,
                        max: f64::INFINITY,
                    }
                    .into());
                }
                debug!(code = spec.code, name = spec.name, points = points.len(), "dispatch");
                let ctx = Context {
                    code: spec.code,
                    feature,
                    resolution,
                    points: &points,
                    styles: &styles,
                };
                (spec.generate)(&ctx).inspect_err(|err| {
                    warn!(code = spec.code, error = %err, "generator rejected feature");
                })?
            }
            None => {
                debug!(sidc = %sidc, "no generator registered, using default style");
                default_style(&points, &styles)
            }
        };
        out.extend(styles.handles(&points));
        Ok(out)
    }
}
