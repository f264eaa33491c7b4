use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;
use crate::math::arc_2d::arc_point_at;
use crate::math::Point2;

/// Default number of segments per quarter circle.
pub const DEFAULT_QUADRANT_SEGMENTS: u32 = 8;

/// Creates a filled circular region around a point.
///
/// The region is a regular polygon circumscribing the circle: every edge
/// touches the circle at its midpoint, so the polygon covers every point
/// within `radius` of the center.
pub struct PointBuffer {
    center: Point2,
    radius: f64,
    quadrant_segments: u32,
}

impl PointBuffer {
    /// Creates a new `PointBuffer` operation with the default resolution.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            quadrant_segments: DEFAULT_QUADRANT_SEGMENTS,
        }
    }

    /// Sets the number of segments per quarter circle (minimum 1).
    #[must_use]
    pub fn with_quadrant_segments(mut self, quadrant_segments: u32) -> Self {
        self.quadrant_segments = quadrant_segments.max(1);
        self
    }

    /// Executes the operation, returning a polygon geometry.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the radius is not a positive
    /// finite number.
    pub fn execute(&self) -> Result<Geometry> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "buffer radius must be positive, got {}",
                self.radius
            ))
            .into());
        }
        let segments = 4 * self.quadrant_segments;
        let step = 2.0 * PI / f64::from(segments);
        let vertex_radius = self.radius / (step / 2.0).cos();
        let ring: Vec<Point2> = (0..segments)
            .map(|i| arc_point_at(&self.center, vertex_radius, step * f64::from(i)))
            .collect();
        Ok(Geometry::polygon(&ring))
    }
}
