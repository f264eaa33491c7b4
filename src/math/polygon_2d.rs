use super::{Point2, TOLERANCE};

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A closing vertex
/// equal to the first one contributes nothing, so open and closed rings give
/// the same result.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let next = points.iter().cycle().skip(1);
    points
        .iter()
        .zip(next)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum::<f64>()
        / 2.0
}

/// Counts the distinct consecutive vertices of a ring, ignoring the closing
/// vertex and repeated points.
#[must_use]
pub fn distinct_vertex_count(points: &[Point2]) -> usize {
    let mut count = 0;
    let mut last: Option<&Point2> = None;
    for p in points {
        if last.is_none_or(|l| (p - l).norm() > TOLERANCE) {
            count += 1;
            last = Some(p);
        }
    }
    if count > 1 && points.first().zip(points.last()).is_some_and(|(a, b)| (a - b).norm() <= TOLERANCE) {
        count -= 1;
    }
    count
}

/// Returns `true` if every coordinate is finite.
#[must_use]
pub fn all_finite(points: &[Point2]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

/// Closes a ring by appending its first vertex if needed.
#[must_use]
pub fn close_ring(points: &[Point2]) -> Vec<Point2> {
    let mut ring = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if (first - last).norm() > TOLERANCE {
            ring.push(*first);
        }
    }
    ring
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn counter_clockwise_ring_is_positive() {
        assert!((signed_area_2d(&square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn clockwise_ring_is_negative() {
        let pts: Vec<Point2> = square().into_iter().rev().collect();
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn closing_vertex_adds_no_area() {
        let closed = close_ring(&square());
        assert_eq!(closed.len(), 5);
        assert!((signed_area_2d(&closed) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn too_few_vertices_have_no_area() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn distinct_vertices_skip_repeats_and_closure() {
        let mut ring = close_ring(&square());
        ring.insert(1, Point2::new(0.0, 0.0));
        assert_eq!(distinct_vertex_count(&ring), 4);
        assert_eq!(distinct_vertex_count(&[Point2::new(1.0, 1.0); 3]), 1);
    }

    #[test]
    fn close_ring_is_idempotent() {
        let once = close_ring(&square());
        let twice = close_ring(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn nan_vertex_is_not_finite() {
        assert!(all_finite(&square()));
        assert!(!all_finite(&[Point2::new(f64::NAN, 0.0)]));
    }
}
