mod polygon;

pub use polygon::Polygon;

use crate::math::{Point2, Segment};

/// A geometry primitive in the working frame.
///
/// Boolean operations over these values live in
/// [`crate::operations::boolean`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point2),
    LineString(Vec<Point2>),
    Polygon(Polygon),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Creates a line string from an ordered list of points.
    #[must_use]
    pub fn line_string(points: &[Point2]) -> Self {
        Self::LineString(points.to_vec())
    }

    /// Creates a polygon from a ring, closing it if needed.
    #[must_use]
    pub fn polygon(ring: &[Point2]) -> Self {
        Self::Polygon(Polygon::new(ring))
    }

    /// Collects geometries without any boolean composition.
    #[must_use]
    pub fn collect(parts: Vec<Geometry>) -> Self {
        Self::Collection(parts)
    }

    /// Returns an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::Collection(Vec::new())
    }

    /// Returns `true` if the geometry holds no primitive at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(_) | Self::Polygon(_) => false,
            Self::LineString(points) => points.is_empty(),
            Self::Collection(parts) => parts.iter().all(Geometry::is_empty),
        }
    }

    /// Flattens nested collections into a list of non-collection primitives.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Geometry> {
        match self {
            Self::Collection(parts) => parts.iter().flat_map(Geometry::flatten).collect(),
            other => vec![other],
        }
    }

    /// Iterates over every line string in the geometry.
    pub fn line_strings(&self) -> impl Iterator<Item = &[Point2]> {
        self.flatten().into_iter().filter_map(|g| match g {
            Self::LineString(points) => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Iterates over every polygon in the geometry.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.flatten().into_iter().filter_map(|g| match g {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    /// Iterates over every vertex of the geometry.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        match self {
            Self::Point(p) => vec![*p],
            Self::LineString(points) => points.clone(),
            Self::Polygon(polygon) => polygon.rings().flatten().copied().collect(),
            Self::Collection(parts) => parts.iter().flat_map(Geometry::vertices).collect(),
        }
    }

    /// Applies `f` to every vertex, keeping the structure.
    #[must_use]
    pub fn map_points(&self, f: &impl Fn(Point2) -> Point2) -> Self {
        match self {
            Self::Point(p) => Self::Point(f(*p)),
            Self::LineString(points) => Self::LineString(points.iter().copied().map(f).collect()),
            Self::Polygon(polygon) => Self::Polygon(polygon.map_points(f)),
            Self::Collection(parts) => {
                Self::Collection(parts.iter().map(|g| g.map_points(f)).collect())
            }
        }
    }

    /// Total length of every line string in the geometry.
    #[must_use]
    pub fn line_length(&self) -> f64 {
        self.line_strings()
            .flat_map(|points| points.windows(2))
            .map(|w| Segment::new(w[0], w[1]).length())
            .sum()
    }

    /// Total area of every polygon in the geometry.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygons().map(Polygon::area).sum()
    }
}

impl From<Segment> for Geometry {
    fn from(segment: Segment) -> Self {
        Self::LineString(segment.to_points())
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
