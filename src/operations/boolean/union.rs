use crate::error::Result;
use crate::geometry::Geometry;
use crate::math::Point2;

use super::parts::Parts;
use super::trace::{subtract_traces, traces_cover};

/// Computes the set-theoretic union of several geometries.
///
/// Polygons are merged into a non-overlapping area. Line strings keep only
/// the parts lying outside that area, and a stretch already traced by an
/// earlier line string is dropped from later ones. Points covered by the area
/// or by a line string are absorbed.
pub struct Union {
    parts: Vec<Geometry>,
}

impl Union {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(parts: Vec<Geometry>) -> Self {
        Self { parts }
    }

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns `ToolkitError::Degenerate` if an operand holds a non-finite
    /// coordinate or a ring without area.
    pub fn execute(&self) -> Result<Geometry> {
        let parts = Parts::decompose(&self.parts)?;
        let area = parts.area()?;
        let mut lines: Vec<Vec<Point2>> = Vec::new();
        for line in area.clip_outside(&parts.lines) {
            let fresh = subtract_traces(&[line], &lines);
            lines.extend(fresh);
        }
        let points = parts
            .points
            .into_iter()
            .filter(|p| !area.covers(p) && !traces_cover(&lines, p))
            .collect();
        Ok(Parts {
            points,
            lines,
            polygons: area.polygons,
        }
        .into_geometry())
    }
}
