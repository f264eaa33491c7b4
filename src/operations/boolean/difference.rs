use crate::error::Result;
use crate::geometry::Geometry;

use super::parts::{Parts, ON_TRACE};
use super::trace::{subtract_traces, traces_cover};

/// Computes `a − b`: removes from `a` every portion covered by `b`.
///
/// Both operands are treated as planar point sets, whatever their kind:
/// an area operand removes area, length and points; a trace operand removes
/// collinear length and points lying on it; a point removes an equal point.
/// The result is always contained in `a`.
pub struct Difference {
    a: Geometry,
    b: Geometry,
}

impl Difference {
    /// Creates a new `Difference` operation (`a − b`).
    #[must_use]
    pub fn new(a: Geometry, b: Geometry) -> Self {
        Self { a, b }
    }

    /// Executes the difference.
    ///
    /// # Errors
    ///
    /// Returns `ToolkitError::Degenerate` if either operand holds a non-finite
    /// coordinate or a ring without area.
    pub fn execute(&self) -> Result<Geometry> {
        let subject = Parts::decompose([&self.a])?;
        let cutter = Parts::decompose([&self.b])?;

        let cut_area = cutter.area()?;

        let polygons = if subject.polygons.is_empty() {
            Vec::new()
        } else {
            cut_area.subtract_from(&subject.area()?)?.polygons
        };

        let lines = cut_area.clip_outside(&subject.lines);
        let lines = subtract_traces(&lines, &cutter.lines);

        let points = subject
            .points
            .into_iter()
            .filter(|p| {
                !cut_area.covers(p)
                    && !traces_cover(&cutter.lines, p)
                    && !cutter.points.iter().any(|q| (p - q).norm() < ON_TRACE)
            })
            .collect();

        Ok(Parts {
            points,
            lines,
            polygons,
        }
        .into_geometry())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::PointBuffer;

    fn square(x: f64, y: f64, size: f64) -> Geometry {
        Geometry::polygon(&[
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    #[test]
    fn line_minus_buffer_leaves_a_gap() {
        let line = Geometry::line_string(&[Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0)]);
        let hole = PointBuffer::new(Point2::origin(), 2.0).execute().unwrap();
        let result = Difference::new(line, hole).execute().unwrap();

        assert_eq!(result.line_strings().count(), 2);
        for p in result.vertices() {
            assert!(p.coords.norm() >= 2.0 - 1e-9, "vertex {p} inside clearance");
        }
        assert!(result.line_length() < 20.0 - 4.0 + 1e-9);
    }

    #[test]
    fn difference_never_extends_shape() {
        let a = square(0.0, 0.0, 4.0);
        let b = square(2.0, 2.0, 4.0);
        let result = Difference::new(a.clone(), b).execute().unwrap();
        assert!((result.area() - 12.0).abs() < 1e-9);
        assert!(result.area() <= a.area());
        for p in result.vertices() {
            assert!((0.0..=4.0).contains(&p.x) && (0.0..=4.0).contains(&p.y));
        }
    }

    #[test]
    fn subtracting_a_trace_keeps_area() {
        let a = square(0.0, 0.0, 4.0);
        let b = Geometry::line_string(&[Point2::new(-1.0, 2.0), Point2::new(5.0, 2.0)]);
        let result = Difference::new(a, b).execute().unwrap();
        assert!((result.area() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn line_minus_overlapping_line() {
        let a = Geometry::line_string(&[Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)]);
        let b = Geometry::line_string(&[Point2::new(2.0, 0.0), Point2::new(6.0, 0.0)]);
        let result = Difference::new(a, b).execute().unwrap();
        assert!((result.line_length() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn points_inside_area_are_removed() {
        let a = Geometry::collect(vec![
            Geometry::Point(Point2::new(1.0, 1.0)),
            Geometry::Point(Point2::new(9.0, 9.0)),
        ]);
        let result = Difference::new(a, square(0.0, 0.0, 2.0)).execute().unwrap();
        assert_eq!(result, Geometry::Point(Point2::new(9.0, 9.0)));
    }

    #[test]
    fn polygon_minus_disjoint_polygon_is_unchanged_in_area() {
        let a = square(0.0, 0.0, 1.0);
        let result = Difference::new(a, square(5.0, 5.0, 1.0)).execute().unwrap();
        assert!((result.area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn arrow_notch_in_line() {
        let line = Geometry::line_string(&[Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let arrow = Geometry::polygon(&[
            Point2::new(8.0, -1.0),
            Point2::new(10.0, 0.0),
            Point2::new(8.0, 1.0),
        ]);
        let result = Difference::new(line, arrow).execute().unwrap();
        assert!(!result.is_empty());
        for ls in result.line_strings() {
            for w in ls.windows(2) {
                let mid = Point2::from((w[0].coords + w[1].coords) / 2.0);
                assert!(mid.x <= 8.0 + 1e-9);
            }
        }
    }

    #[test]
    fn degenerate_operand_fails() {
        let line = Geometry::line_string(&[Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let flat = Geometry::polygon(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(Difference::new(line, flat).execute().is_err());
    }
}
