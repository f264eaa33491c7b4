//! Conversion between a feature's anchor coordinates and the planar working
//! frame the generators build geometry in.
//!
//! A [`Projection`] is chosen once per renderer; for every feature it yields a
//! [`CoordinateAdapter`] anchored at the feature's first coordinate.

mod local_tangent;
mod planar;

pub use local_tangent::{LocalTangent, LocalTangentFrame, EARTH_RADIUS};
pub use planar::{Planar, PlanarFrame};

use crate::geometry::Geometry;
use crate::math::Point2;

/// Converts coordinates to and from a working frame anchored at a reference.
pub trait CoordinateAdapter {
    /// Converts an output-frame coordinate to a working-frame point.
    fn to_working(&self, coordinate: Point2) -> Point2;

    /// Converts a working-frame point back to the output frame.
    fn to_output(&self, point: Point2) -> Point2;

    /// Converts a list of coordinates to working-frame points.
    fn read(&self, coordinates: &[Point2]) -> Vec<Point2> {
        coordinates.iter().map(|c| self.to_working(*c)).collect()
    }

    /// Converts a working-frame geometry to the output frame.
    fn write(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(&|p| self.to_output(p))
    }
}

/// Builds a [`CoordinateAdapter`] for a reference coordinate.
pub trait Projection {
    type Adapter: CoordinateAdapter;

    /// Returns an adapter whose working-frame origin is `reference`.
    fn adapt(&self, reference: Point2) -> Self::Adapter;
}
