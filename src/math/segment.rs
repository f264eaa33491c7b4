use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// An ordered pair of working-frame points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the direction vector `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the angle of the segment in radians, measured counter-clockwise
    /// from the frame's x axis.
    ///
    /// A zero-length segment yields `0.0`; use [`Segment::bearing`] when the
    /// direction must be well defined.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let d = self.vector();
        d.y.atan2(d.x)
    }

    /// Returns the angle of the segment, failing for a zero-length segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if start and end coincide.
    pub fn bearing(&self) -> Result<f64> {
        if self.is_degenerate() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.angle())
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns `true` if the segment is shorter than [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Linear interpolation along the segment.
    ///
    /// `t = 0` is the start, `t = 1` the end. Values outside `[0, 1]`
    /// extrapolate along the supporting line.
    #[must_use]
    pub fn point_along(&self, t: f64) -> Point2 {
        self.start + self.vector() * t
    }

    /// Returns the segment as a two-point coordinate list.
    #[must_use]
    pub fn to_points(&self) -> Vec<Point2> {
        vec![self.start, self.end]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angle_follows_atan2() {
        let east = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0));
        let north = Segment::new(Point2::new(0.0, 0.0), Point2::new(0.0, 2.0));
        let west = Segment::new(Point2::new(1.0, 1.0), Point2::new(-1.0, 1.0));
        assert_relative_eq!(east.angle(), 0.0);
        assert_relative_eq!(north.angle(), FRAC_PI_2);
        assert_relative_eq!(west.angle(), PI);
    }

    #[test]
    fn length_3_4_5() {
        let seg = Segment::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_relative_eq!(seg.length(), 5.0);
    }

    #[test]
    fn point_along_interpolates_and_extrapolates() {
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert_relative_eq!(seg.point_along(0.45).x, 4.5);
        assert_relative_eq!(seg.point_along(1.5).x, 15.0);
        assert_relative_eq!(seg.point_along(-0.2).x, -2.0);
    }

    #[test]
    fn bearing_of_zero_length_segment_fails() {
        let p = Point2::new(2.0, 2.0);
        let seg = Segment::new(p, p);
        assert!(seg.is_degenerate());
        assert!(seg.bearing().is_err());
    }

    #[test]
    fn bearing_matches_angle() {
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert_relative_eq!(seg.bearing().unwrap(), seg.angle());
    }
}
