//! 2D arc sampling and bearing-relative projection.
//!
//! Angle convention: radians, `0` along the frame's x axis, counter-clockwise
//! positive. Arc sweeps are clockwise-positive: an arc starting at `θ` with
//! sweep `δ` ends at `θ - δ`.
use nalgebra::Rotation2;

use super::{Point2, Vector2};

/// Evaluates a point on a circle of `radius` around `center` at `angle`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, angle: f64) -> Point2 {
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Samples a circular arc as `quads + 1` points.
///
/// Sample `i` lies at angle `start_angle - sweep * i / quads`. Each angle is
/// computed from its index directly, so equal inputs always produce the same
/// sampling.
#[must_use]
pub fn arc(center: &Point2, radius: f64, start_angle: f64, sweep: f64, quads: u32) -> Vec<Point2> {
    if quads == 0 {
        return vec![arc_point_at(center, radius, start_angle)];
    }
    let n = f64::from(quads);
    (0..=quads)
        .map(|i| {
            let angle = start_angle - sweep * f64::from(i) / n;
            arc_point_at(center, radius, angle)
        })
        .collect()
}

/// Projects `(along, perp)` offsets into the working frame.
///
/// Each offset is scaled by `distance`, rotated by `bearing` and translated
/// to `origin`. With `bearing = 0`, `along` follows the x axis and `perp` the
/// y axis.
#[must_use]
pub fn project_coordinates(
    distance: f64,
    bearing: f64,
    origin: &Point2,
    offsets: &[[f64; 2]],
) -> Vec<Point2> {
    let rotation = Rotation2::new(bearing);
    offsets
        .iter()
        .map(|&[along, perp]| *origin + rotation * Vector2::new(along * distance, perp * distance))
        .collect()
}
