use super::{Point2, TOLERANCE};

/// Returns the point of segment `a`–`b` nearest to `p`.
///
/// A segment shorter than [`TOLERANCE`] collapses to `a`.
#[must_use]
pub fn closest_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return *a;
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    a + d * t
}

/// Returns the distance from `p` to segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_on_segment(p, a, b)).norm()
}

/// Returns the distance from `p` to the nearest vertex or edge of a
/// polyline. An empty polyline is infinitely far away.
#[must_use]
pub fn point_to_polyline_dist(p: &Point2, points: &[Point2]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => (p - only).norm(),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(p, &w[0], &w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}
