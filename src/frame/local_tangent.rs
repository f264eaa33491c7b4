use crate::math::Point2;

use super::{CoordinateAdapter, Projection};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Smallest meridian scale factor, keeps the frame invertible near the poles.
const MIN_PARALLEL_SCALE: f64 = 1e-9;

/// Projection for longitude/latitude coordinates in degrees.
///
/// Each feature gets an equirectangular frame in meters centered on its first
/// coordinate, which is accurate at the scale of a single tactical symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTangent;

/// Equirectangular working frame around a geographic reference.
#[derive(Debug, Clone, Copy)]
pub struct LocalTangentFrame {
    reference: Point2,
    parallel_scale: f64,
}

impl LocalTangentFrame {
    /// Returns the reference coordinate (longitude, latitude in degrees).
    #[must_use]
    pub fn reference(&self) -> Point2 {
        self.reference
    }
}

impl Projection for LocalTangent {
    type Adapter = LocalTangentFrame;

    fn adapt(&self, reference: Point2) -> LocalTangentFrame {
        LocalTangentFrame {
            reference,
            parallel_scale: reference.y.to_radians().cos().max(MIN_PARALLEL_SCALE),
        }
    }
}

impl CoordinateAdapter for LocalTangentFrame {
    fn to_working(&self, coordinate: Point2) -> Point2 {
        Point2::new(
            EARTH_RADIUS * (coordinate.x - self.reference.x).to_radians() * self.parallel_scale,
            EARTH_RADIUS * (coordinate.y - self.reference.y).to_radians(),
        )
    }

    fn to_output(&self, point: Point2) -> Point2 {
        Point2::new(
            self.reference.x + (point.x / (EARTH_RADIUS * self.parallel_scale)).to_degrees(),
            self.reference.y + (point.y / EARTH_RADIUS).to_degrees(),
        )
    }
}
