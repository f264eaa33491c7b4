//! Center-and-radius graphics: minimum safe distance, turn and seize.

use std::f64::consts::FRAC_PI_2;

use tracing::trace;

use crate::error::{PreconditionError, Result};
use crate::geometry::Geometry;
use crate::math::{arc, project_coordinates};
use crate::operations::boolean::{Difference, Union};
use crate::style::{Style, TextOptions};

use super::Context;

const QUARTER_QUADS: u32 = 32;

const TURN_ARROW: [[f64; 2]; 4] = [[0.2, -0.1], [0.0, 0.0], [0.2, 0.1], [0.2, -0.1]];
const SEIZE_ARROW: [[f64; 2]; 3] = [[0.1, -0.1], [0.0, 0.0], [0.1, 0.1]];

/// MINIMUM SAFE DISTANCE ZONES: a ring through the second anchor, with the
/// feature's text at that anchor.
pub(super) fn minimum_safe_distance(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let [center, edge] = ctx.anchors::<2>()?;
    let (segment, _) = ctx.leg(0, 1)?;
    let ring = ctx.buffer(center, segment.length())?;

    let mut styles = vec![ctx.styles.solid_line(&ring, None)];
    if let Some(text) = ctx.feature.text() {
        styles.push(ctx.styles.text(edge, TextOptions::new(text).flip(false)));
    }
    Ok(styles)
}

/// OBSTACLE EFFECT / TURN: a filled arrowhead on a clockwise quarter arc.
pub(super) fn turn(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let [center, _] = ctx.anchors::<2>()?;
    let (segment, angle) = ctx.leg(0, 1)?;
    let radius = segment.length();

    let arc_points = arc(&center, radius, angle, FRAC_PI_2, QUARTER_QUADS);
    let tip = arc_points[arc_points.len() - 1];
    let arrow = Geometry::polygon(&project_coordinates(radius, angle, &tip, &TURN_ARROW));

    let shaft = Difference::new(Geometry::line_string(&arc_points), arrow.clone()).execute()?;
    let body = Union::new(vec![shaft, arrow]).execute()?;

    Ok(vec![
        ctx.styles.solid_line(&body, Some(ctx.styles.fill(|p| p.primary))),
        ctx.styles.wire_frame(&segment.into()),
    ])
}

/// TASKS / SEIZE: a quarter arc from the third anchor's radius, with a circle
/// marking the object and an "S" in an arc gap.
pub(super) fn seize(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let [center, object, _] = ctx.anchors::<3>()?;
    let (to_object, angle_o) = ctx.leg(0, 1)?;
    let (to_start, angle_s) = ctx.leg(0, 2)?;

    let radius = to_object.length() - to_start.length();
    if radius <= 0.0 {
        return Err(PreconditionError::InvalidGeometry {
            code: ctx.code,
            reason: format!("object circle radius {radius} is not positive"),
        }
        .into());
    }

    let circle_center = project_coordinates(radius, angle_o, &object, &[[-1.0, -1.0]])[0];
    let arc_points = arc(&center, to_start.length(), angle_o, FRAC_PI_2, QUARTER_QUADS);
    let anchor = arc_points[arc_points.len() / 2];
    let tip = arc_points[arc_points.len() - 1];
    trace!(code = ctx.code, radius, "seize");

    let shaft = Difference::new(Geometry::line_string(&arc_points), ctx.clearance(anchor)?).execute()?;
    let head = project_coordinates(to_start.length(), angle_s + FRAC_PI_2, &tip, &SEIZE_ARROW);
    let line = Geometry::collect(vec![
        shaft,
        ctx.buffer(circle_center, radius)?,
        Geometry::line_string(&head),
    ]);
    let frame = Union::new(vec![to_object.into(), to_start.into()]).execute()?;

    Ok(vec![
        ctx.styles.solid_line(&line, None),
        ctx.styles.wire_frame(&frame),
        ctx.styles.text(anchor, TextOptions::new("S").flip(false)),
    ])
}
