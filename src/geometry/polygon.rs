use crate::math::polygon_2d::{close_ring, signed_area_2d};
use crate::math::Point2;

/// A planar polygon: a closed exterior ring and zero or more hole rings.
///
/// Rings are stored closed (first vertex repeated at the end).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
}

impl Polygon {
    /// Creates a polygon without holes, closing the ring if needed.
    #[must_use]
    pub fn new(exterior: &[Point2]) -> Self {
        Self {
            exterior: close_ring(exterior),
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes, closing every ring if needed.
    #[must_use]
    pub fn with_holes(exterior: &[Point2], holes: &[Vec<Point2>]) -> Self {
        Self {
            exterior: close_ring(exterior),
            holes: holes.iter().map(|h| close_ring(h)).collect(),
        }
    }

    /// Returns the closed exterior ring.
    #[must_use]
    pub fn exterior(&self) -> &[Point2] {
        &self.exterior
    }

    /// Returns the closed hole rings.
    #[must_use]
    pub fn holes(&self) -> &[Vec<Point2>] {
        &self.holes
    }

    /// Returns the unsigned area enclosed by the exterior minus the holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| signed_area_2d(h).abs()).sum();
        signed_area_2d(&self.exterior).abs() - holes
    }

    /// Iterates over the exterior and hole rings.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Applies `f` to every vertex.
    #[must_use]
    pub fn map_points(&self, f: &impl Fn(Point2) -> Point2) -> Self {
        Self {
            exterior: self.exterior.iter().copied().map(f).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().copied().map(f).collect())
                .collect(),
        }
    }
}
