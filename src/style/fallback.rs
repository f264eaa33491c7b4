use crate::geometry::Geometry;
use crate::math::Point2;

use super::{Style, StyleFactory};

/// Draws a feature without a registered generator.
///
/// A single anchor becomes a point, several anchors a line string through
/// them in order. No anchors, no primitive.
#[must_use]
pub fn default_style(points: &[Point2], styles: &StyleFactory<'_>) -> Vec<Style> {
    let geometry = match points {
        [] => return Vec::new(),
        [only] => Geometry::Point(*only),
        _ => Geometry::line_string(points),
    };
    vec![styles.solid_line(&geometry, None)]
}
