use geo::{BooleanOps, Coord, LineString, MultiPolygon};

use crate::error::{Result, TacgeoError, ToolkitError};
use crate::geometry::{Geometry, Polygon};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::polygon_2d::{all_finite, distinct_vertex_count, signed_area_2d};
use crate::math::{Point2, Segment, TOLERANCE};

use super::trace::split_lines;

/// Distance under which a point counts as lying on a trace or boundary.
pub(super) const ON_TRACE: f64 = 1e-9;

/// A geometry decomposed by dimension.
#[derive(Debug, Default)]
pub(super) struct Parts {
    pub points: Vec<Point2>,
    pub lines: Vec<Vec<Point2>>,
    pub polygons: Vec<Polygon>,
}

impl Parts {
    /// Splits geometries into points, line strings and polygons, rejecting
    /// operands the polygon clipper cannot handle.
    pub fn decompose<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> Result<Self> {
        let mut parts = Self::default();
        for geometry in geometries {
            for primitive in geometry.flatten() {
                match primitive {
                    Geometry::Point(p) => {
                        if !all_finite(&[*p]) {
                            return Err(degenerate("non-finite point"));
                        }
                        parts.points.push(*p);
                    }
                    Geometry::LineString(points) => {
                        if !all_finite(points) {
                            return Err(degenerate("non-finite line string vertex"));
                        }
                        if !points.is_empty() {
                            parts.lines.push(points.clone());
                        }
                    }
                    Geometry::Polygon(polygon) => {
                        validate_polygon(polygon)?;
                        parts.polygons.push(polygon.clone());
                    }
                    Geometry::Collection(_) => {}
                }
            }
        }
        Ok(parts)
    }

    /// Merges every polygon into a single non-overlapping area.
    ///
    /// A lone polygon is taken as is; the polygon clipper only runs when
    /// there is something to merge.
    pub fn area(&self) -> Result<Area> {
        if self.polygons.len() < 2 {
            return Ok(Area {
                polygons: self.polygons.clone(),
            });
        }
        let merged = self
            .polygons
            .iter()
            .fold(MultiPolygon::new(Vec::new()), |acc, polygon| {
                acc.union(&MultiPolygon::new(vec![to_geo_polygon(polygon)]))
            });
        Area::from_geo(&merged)
    }

    /// Reassembles the parts into a geometry of the narrowest variant.
    pub fn into_geometry(self) -> Geometry {
        let mut all: Vec<Geometry> = self
            .points
            .into_iter()
            .map(Geometry::Point)
            .chain(self.lines.into_iter().map(Geometry::LineString))
            .chain(self.polygons.into_iter().map(Geometry::Polygon))
            .collect();
        if all.len() == 1 {
            all.remove(0)
        } else {
            Geometry::Collection(all)
        }
    }
}

/// A region made of non-overlapping polygons.
#[derive(Debug, Default)]
pub(super) struct Area {
    pub polygons: Vec<Polygon>,
}

impl Area {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns `true` if `point` lies inside the area or on its boundary.
    pub fn covers(&self, point: &Point2) -> bool {
        let on_boundary = self.edges().any(|(a, b)| point_to_segment_dist(point, &a, &b) < ON_TRACE);
        if on_boundary {
            return true;
        }
        // Even-odd crossing count over every ring.
        self.edges()
            .filter(|(a, b)| {
                (a.y > point.y) != (b.y > point.y)
                    && point.x < a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y)
            })
            .count()
            % 2
            == 1
    }

    /// Keeps the parts of each line string lying outside the area.
    ///
    /// Surviving vertices are the input vertices themselves; new vertices are
    /// only introduced where a trace crosses the boundary.
    pub fn clip_outside(&self, lines: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
        if self.is_empty() {
            return lines.to_vec();
        }
        split_lines(lines, |seg| {
            let mut cuts = vec![0.0, 1.0];
            for (a, b) in self.edges() {
                crossing_params(seg, &Segment::new(a, b), &mut cuts);
            }
            cuts.sort_by(f64::total_cmp);
            cuts.dedup_by(|x, y| (*x - *y).abs() < 1e-12);
            cuts.windows(2)
                .filter(|w| !self.covers(&seg.point_along((w[0] + w[1]) / 2.0)))
                .map(|w| (w[0], w[1]))
                .collect()
        })
    }

    /// Removes this area from `subject`.
    pub fn subtract_from(&self, subject: &Area) -> Result<Area> {
        if self.is_empty() || subject.is_empty() {
            return Ok(Area {
                polygons: subject.polygons.clone(),
            });
        }
        let rest = subject.to_geo().difference(&self.to_geo());
        Area::from_geo(&rest)
    }

    fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.polygons
            .iter()
            .flat_map(Polygon::rings)
            .flat_map(|ring| ring.windows(2).map(|w| (w[0], w[1])))
    }

    fn to_geo(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.polygons.iter().map(to_geo_polygon).collect())
    }

    fn from_geo(area: &MultiPolygon<f64>) -> Result<Self> {
        let finite = area.0.iter().all(|p| {
            std::iter::once(p.exterior())
                .chain(p.interiors())
                .all(|ring| ring.0.iter().all(|c| c.x.is_finite() && c.y.is_finite()))
        });
        if !finite {
            return Err(ToolkitError::Failed(
                "polygon clipper produced non-finite coordinates".to_owned(),
            )
            .into());
        }
        let polygons = area
            .0
            .iter()
            .filter(|p| p.exterior().0.len() >= 4)
            .map(|p| {
                let holes: Vec<Vec<Point2>> = p.interiors().iter().map(from_geo_line).collect();
                Polygon::with_holes(&from_geo_line(p.exterior()), &holes)
            })
            .collect();
        Ok(Self { polygons })
    }
}

/// Appends the parameters along `seg` where it meets `edge`.
fn crossing_params(seg: &Segment, edge: &Segment, cuts: &mut Vec<f64>) {
    let r = seg.vector();
    let s = edge.vector();
    let qp = edge.start() - seg.start();
    let denom = r.perp(&s);
    let scale = r.norm() * s.norm();
    if scale < TOLERANCE * TOLERANCE {
        return;
    }
    if denom.abs() > 1e-12 * scale {
        let t = qp.perp(&s) / denom;
        let u = qp.perp(&r) / denom;
        if (-1e-12..=1.0 + 1e-12).contains(&u) && t > 0.0 && t < 1.0 {
            cuts.push(t);
        }
    } else if qp.perp(&r).abs() < ON_TRACE * r.norm() {
        // Collinear: the edge endpoints bound the shared stretch.
        let len_sq = r.norm_squared();
        for p in [edge.start(), edge.end()] {
            let t = (p - seg.start()).dot(&r) / len_sq;
            if t > 0.0 && t < 1.0 {
                cuts.push(t);
            }
        }
    }
}

fn validate_polygon(polygon: &Polygon) -> Result<()> {
    for ring in polygon.rings() {
        if !all_finite(ring) {
            return Err(degenerate("non-finite polygon vertex"));
        }
        if distinct_vertex_count(ring) < 3 {
            return Err(degenerate("polygon ring with fewer than 3 distinct vertices"));
        }
        if signed_area_2d(ring).abs() < TOLERANCE {
            return Err(degenerate("polygon ring with zero area"));
        }
    }
    Ok(())
}

fn degenerate(reason: &str) -> TacgeoError {
    ToolkitError::Degenerate(reason.to_owned()).into()
}

fn to_geo_line(points: &[Point2]) -> LineString<f64> {
    LineString::new(points.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

fn from_geo_line(line: &LineString<f64>) -> Vec<Point2> {
    line.0.iter().map(|c| Point2::new(c.x, c.y)).collect()
}

fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon<f64> {
    geo::Polygon::new(
        to_geo_line(polygon.exterior()),
        polygon.holes().iter().map(|h| to_geo_line(h)).collect(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Geometry {
        Geometry::polygon(&[
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    fn total_length(lines: &[Vec<Point2>]) -> f64 {
        lines
            .iter()
            .flat_map(|l| l.windows(2))
            .map(|w| (w[1] - w[0]).norm())
            .sum()
    }

    #[test]
    fn decompose_sorts_by_dimension() {
        let g = Geometry::collect(vec![
            Geometry::Point(Point2::origin()),
            square(0.0, 0.0, 1.0),
            Geometry::line_string(&[Point2::origin(), Point2::new(1.0, 1.0)]),
        ]);
        let parts = Parts::decompose([&g]).unwrap();
        assert_eq!(parts.points.len(), 1);
        assert_eq!(parts.lines.len(), 1);
        assert_eq!(parts.polygons.len(), 1);
    }

    #[test]
    fn decompose_rejects_flat_ring() {
        let flat = Geometry::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(Parts::decompose([&flat]).is_err());
    }

    #[test]
    fn decompose_rejects_nan() {
        let bad = Geometry::line_string(&[Point2::new(f64::NAN, 0.0), Point2::origin()]);
        assert!(Parts::decompose([&bad]).is_err());
    }

    #[test]
    fn overlapping_squares_merge_into_one_area() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let area = Parts::decompose([&a, &b]).unwrap().area().unwrap();
        assert_eq!(area.polygons.len(), 1);
        assert!((area.polygons[0].area() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn clip_outside_removes_covered_span() {
        let area = Parts::decompose([&square(1.0, -1.0, 2.0)]).unwrap().area().unwrap();
        let line = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
        let kept = area.clip_outside(&[line]);
        assert_eq!(kept.len(), 2);
        assert!((total_length(&kept) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clip_outside_keeps_vertices_exact() {
        let area = Parts::decompose([&square(10.0, 10.0, 1.0)]).unwrap().area().unwrap();
        let line = vec![Point2::new(0.1, 0.2), Point2::new(3.3, 0.7), Point2::new(5.0, 9.0)];
        assert_eq!(area.clip_outside(&[line.clone()]), vec![line]);
    }

    #[test]
    fn clip_through_a_hole_keeps_the_hole_part() {
        let outer = [
            Point2::new(0.0, -4.0),
            Point2::new(8.0, -4.0),
            Point2::new(8.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let hole = vec![
            Point2::new(3.0, -1.0),
            Point2::new(3.0, 1.0),
            Point2::new(5.0, 1.0),
            Point2::new(5.0, -1.0),
        ];
        let area = Area {
            polygons: vec![Polygon::with_holes(&outer, &[hole])],
        };
        let kept = area.clip_outside(&[vec![Point2::new(-2.0, 0.0), Point2::new(10.0, 0.0)]]);
        assert_eq!(kept.len(), 3);
        assert!((total_length(&kept) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn covers_interior_and_boundary() {
        let area = Parts::decompose([&square(0.0, 0.0, 2.0)]).unwrap().area().unwrap();
        assert!(area.covers(&Point2::new(1.0, 1.0)));
        assert!(area.covers(&Point2::new(2.0, 1.0)));
        assert!(!area.covers(&Point2::new(3.0, 1.0)));
    }

    #[test]
    fn subtract_from_removes_overlap() {
        let a = Parts::decompose([&square(0.0, 0.0, 4.0)]).unwrap().area().unwrap();
        let b = Parts::decompose([&square(2.0, 2.0, 4.0)]).unwrap().area().unwrap();
        let rest = b.subtract_from(&a).unwrap();
        let total: f64 = rest.polygons.iter().map(Polygon::area).sum();
        assert!((total - 12.0).abs() < 1e-9);
    }
}
