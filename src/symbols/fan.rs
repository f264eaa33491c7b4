//! Two-legged fan graphics: screen, guard, cover and search area.
//!
//! The first anchor is the apex; the second and third are the leg tips. Each
//! leg carries a small zigzag around its middle and an arrowhead at its tip.

use std::f64::consts::PI;

use tracing::trace;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::math::{project_coordinates, Point2, Segment};
use crate::operations::boolean::Union;
use crate::style::{Style, TextOptions};

use super::Context;

/// Zigzag amplitude in screen pixels.
const ZIGZAG_PX: f64 = 4.0;

const OPEN_ARROW: [[f64; 2]; 3] = [[-0.08, -0.08], [0.0, 0.0], [-0.08, 0.08]];
const SOLID_ARROW: [[f64; 2]; 5] = [
    [-0.06, -0.03],
    [0.0, 0.0],
    [-0.06, 0.03],
    [-0.06, 0.0],
    [-0.06, -0.03],
];

struct Leg {
    segment: Segment,
    angle: f64,
    zigzag: [Point2; 2],
}

impl Leg {
    /// Builds a leg from the apex to anchor `tip`. The zigzag of the first
    /// leg kinks to the right, the second to the left.
    fn new(ctx: &Context<'_>, tip: usize, side: f64) -> Result<Self> {
        let (segment, angle) = ctx.leg(0, tip)?;
        let distance = ctx.resolution * ZIGZAG_PX;
        let near = offset(distance, angle, segment.point_along(0.55), [0.0, -side]);
        let far = offset(distance, angle, segment.point_along(0.45), [0.0, side]);
        Ok(Self {
            segment,
            angle,
            zigzag: [near, far],
        })
    }

    fn arrow(&self, offsets: &[[f64; 2]]) -> Vec<Point2> {
        project_coordinates(self.segment.length(), self.angle, &self.segment.end(), offsets)
    }

    /// Apex, zigzag and `end` as one trace.
    fn trace(&self, end: Point2) -> Geometry {
        Geometry::line_string(&[self.segment.start(), self.zigzag[0], self.zigzag[1], end])
    }
}

fn offset(distance: f64, bearing: f64, origin: Point2, along_perp: [f64; 2]) -> Point2 {
    project_coordinates(distance, bearing, &origin, &[along_perp])[0]
}

fn legs(ctx: &Context<'_>) -> Result<[Leg; 2]> {
    ctx.anchors::<3>()?;
    Ok([Leg::new(ctx, 1, 1.0)?, Leg::new(ctx, 2, -1.0)?])
}

/// Shared body of the security tasks. A `label` is set on both legs,
/// between the apex and the zigzag.
fn fan_like(ctx: &Context<'_>, label: Option<&str>) -> Result<Vec<Style>> {
    let legs = legs(ctx)?;
    trace!(code = ctx.code, label, "fan");

    let mut parts: Vec<Geometry> = legs.iter().map(|leg| leg.trace(leg.segment.end())).collect();
    parts.extend(legs.iter().map(|leg| Geometry::line_string(&leg.arrow(&OPEN_ARROW))));

    let mut styles = vec![ctx.styles.solid_line(&Geometry::collect(parts), None)];
    if let Some(label) = label {
        for leg in &legs {
            let toward = Segment::new(leg.segment.start(), leg.zigzag[0]);
            let text = TextOptions::new(label)
                .rotation(PI - toward.angle())
                .flip(true);
            styles.push(ctx.styles.text(toward.point_along(0.3), text));
        }
    }
    Ok(styles)
}

/// TASKS / SECURITY / SCREEN
pub(super) fn screen(ctx: &Context<'_>) -> Result<Vec<Style>> {
    fan_like(ctx, Some("S"))
}

/// TASKS / SECURITY / GUARD
pub(super) fn guard(ctx: &Context<'_>) -> Result<Vec<Style>> {
    fan_like(ctx, Some("G"))
}

/// TASKS / SECURITY / COVER
pub(super) fn cover(ctx: &Context<'_>) -> Result<Vec<Style>> {
    fan_like(ctx, Some("C"))
}

/// SEARCH AREA / RECONNAISSANCE AREA: legs end at the base of filled
/// arrowheads, no labels.
pub(super) fn search_area(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let legs = legs(ctx)?;
    let arrows: Vec<Vec<Point2>> = legs.iter().map(|leg| leg.arrow(&SOLID_ARROW)).collect();

    let traces = legs
        .iter()
        .zip(&arrows)
        .map(|(leg, arrow)| leg.trace(arrow[3]))
        .collect();
    let heads = Union::new(arrows.iter().map(|a| Geometry::polygon(a)).collect()).execute()?;
    trace!(code = ctx.code, heads = heads.polygons().count(), "search area");

    Ok(vec![
        ctx.styles.solid_line(&Geometry::collect(traces), None),
        ctx.styles.filled_polygon(&heads),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::super::testing::{count, run};
    use super::*;
    use crate::error::{PreconditionError, TacgeoError};
    use crate::feature::Feature;

    fn feature(points: Vec<Point2>) -> Feature {
        Feature::new("GFTPUS----", points)
    }

    fn right_angle() -> Feature {
        feature(vec![Point2::origin(), Point2::new(10.0, 0.0), Point2::new(0.0, 10.0)])
    }

    #[test]
    fn search_area_has_traces_and_heads_without_text() {
        let styles = run(search_area, &right_angle(), 1.0).unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(count(&styles, |s| matches!(s, Style::SolidLine { .. })), 1);
        assert_eq!(count(&styles, |s| matches!(s, Style::FilledPolygon { .. })), 1);
        assert_eq!(count(&styles, |s| matches!(s, Style::Text { .. })), 0);
    }

    #[test]
    fn search_area_traces_stop_at_arrow_base() {
        let styles = run(search_area, &right_angle(), 1.0).unwrap();
        let traces: Vec<&[Point2]> = styles[0].geometry().unwrap().line_strings().collect();
        assert_eq!(traces.len(), 2);
        let end = traces[0][3];
        assert_abs_diff_eq!(end.x, 10.0 - 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = 1e-9);
        assert!(styles[1].geometry().unwrap().area() > 0.0);
    }

    #[test]
    fn zigzag_kinks_across_the_leg() {
        let styles = run(screen, &right_angle(), 1.0).unwrap();
        let first = styles[0].geometry().unwrap().line_strings().next().unwrap().to_vec();
        assert_abs_diff_eq!(first[1].x, 5.5, epsilon = 1e-9);
        assert_abs_diff_eq!(first[1].y, -4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first[2].x, 4.5, epsilon = 1e-9);
        assert_abs_diff_eq!(first[2].y, 4.0, epsilon = 1e-9);
        assert_eq!(first[3], Point2::new(10.0, 0.0));
    }

    #[test]
    fn security_tasks_label_both_legs() {
        for (generate, letter) in [
            (screen as super::super::GenerateFn, "S"),
            (guard, "G"),
            (cover, "C"),
        ] {
            let styles = run(generate, &right_angle(), 1.0).unwrap();
            assert_eq!(styles.len(), 3);
            for style in &styles[1..] {
                let Style::Text { text, flip, .. } = style else {
                    panic!("expected text");
                };
                assert_eq!(text, letter);
                assert!(*flip);
            }
        }
    }

    #[test]
    fn fan_without_label_is_a_single_line() {
        let styles = run(|ctx| fan_like(ctx, None), &right_angle(), 1.0).unwrap();
        assert_eq!(styles.len(), 1);
        // Two legs plus two open arrowheads.
        assert_eq!(styles[0].geometry().unwrap().line_strings().count(), 4);
    }

    #[test]
    fn zero_length_leg_is_rejected() {
        let f = feature(vec![Point2::origin(), Point2::origin(), Point2::new(0.0, 10.0)]);
        let err = run(cover, &f, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TacgeoError::Precondition(PreconditionError::CoincidentPoints {
                first: 0,
                second: 1,
                ..
            })
        ));
    }

    #[test]
    fn two_anchors_are_not_enough() {
        let f = feature(vec![Point2::origin(), Point2::new(10.0, 0.0)]);
        let err = run(search_area, &f, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TacgeoError::Precondition(PreconditionError::TooFewPoints { required: 3, .. })
        ));
    }
}
