//! Arc-family task graphics: isolate, occupy, retain and secure.
//!
//! All four draw a 330° clockwise arc around the first anchor, through the
//! second, with an end cap at the far end and a single-letter label set into
//! a gap in the arc.

use std::f64::consts::PI;

use tracing::trace;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::math::{arc, project_coordinates, Point2};
use crate::operations::boolean::{Difference, Union};
use crate::style::{Style, TextAlign, TextOptions};

use super::Context;

const QUADS: u32 = 64;
const SWEEP: f64 = 330.0 * PI / 180.0;
const INNER_RATIO: f64 = 0.8;

const CHEVRON: [[f64; 2]; 3] = [[0.2, -0.2], [0.0, 0.0], [0.2, 0.2]];
const CROSS: [[f64; 2]; 4] = [[0.2, -0.2], [-0.2, 0.2], [0.2, 0.2], [-0.2, -0.2]];

/// Center, radius and start bearing shared by the arc family.
struct ArcFrame {
    center: Point2,
    radius: f64,
    angle: f64,
}

impl ArcFrame {
    fn new(ctx: &Context<'_>) -> Result<Self> {
        let [center, _] = ctx.anchors::<2>()?;
        let (segment, angle) = ctx.leg(0, 1)?;
        Ok(Self {
            center,
            radius: segment.length(),
            angle,
        })
    }

    fn outer(&self) -> Vec<Point2> {
        arc(&self.center, self.radius, self.angle, SWEEP, QUADS)
    }

    fn inner(&self) -> Vec<Point2> {
        arc(&self.center, INNER_RATIO * self.radius, self.angle, SWEEP, QUADS)
    }

    /// End-cap marks at `end`, oriented against the direction of travel.
    fn end_cap(&self, end: &Point2, offsets: &[[f64; 2]]) -> Vec<Point2> {
        project_coordinates(self.radius, self.angle - SWEEP + PI / 2.0, end, offsets)
    }
}

fn last(points: &[Point2]) -> Point2 {
    points[points.len() - 1]
}

fn middle(points: &[Point2]) -> Point2 {
    points[points.len() / 2]
}

/// Cuts the label gap into `body`, adds `marks` and emits line and label.
fn finish(
    ctx: &Context<'_>,
    frame: &ArcFrame,
    body: Vec<Geometry>,
    marks: Vec<Geometry>,
    anchor: Point2,
    label: &str,
) -> Result<Vec<Style>> {
    let body = Union::new(body).execute()?;
    let clipped = Difference::new(body, ctx.clearance(anchor)?).execute()?;

    let mut parts = vec![clipped];
    parts.extend(marks);
    let line = Union::new(parts).execute()?;

    let text = TextOptions::new(label)
        .font(ctx.styles.config().bigger_font.clone())
        .flip(true)
        .align(TextAlign::Center)
        .rotation(PI - frame.angle + SWEEP / 2.0);

    Ok(vec![
        ctx.styles.solid_line(&line, None),
        ctx.styles.text(anchor, text),
    ])
}

/// TASKS / ISOLATE: sawtooth arc with teeth reaching the inner guide arc.
pub(super) fn isolate(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let frame = ArcFrame::new(ctx)?;
    let outer = frame.outer();
    let inner = frame.inner();

    let teeth: Vec<Geometry> = (1..outer.len() - 1)
        .filter(|i| i % 5 == 0)
        .map(|i| Geometry::line_string(&[outer[i - 1], inner[i], outer[i + 1]]))
        .collect();
    trace!(code = ctx.code, teeth = teeth.len(), radius = frame.radius, "isolate");

    let cap = frame.end_cap(&last(&outer), &CHEVRON);
    let anchor = middle(&outer);
    let mut body = teeth;
    body.push(Geometry::line_string(&outer));
    finish(ctx, &frame, body, vec![Geometry::line_string(&cap)], anchor, "I")
}

/// TASKS / OCCUPY: plain arc closed off by an X.
pub(super) fn occupy(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let frame = ArcFrame::new(ctx)?;
    let outer = frame.outer();
    let xs = frame.end_cap(&last(&outer), &CROSS);
    let anchor = middle(&outer);
    finish(
        ctx,
        &frame,
        vec![Geometry::line_string(&outer)],
        vec![
            Geometry::line_string(&[xs[0], xs[1]]),
            Geometry::line_string(&[xs[2], xs[3]]),
        ],
        anchor,
        "O",
    )
}

/// TASKS / RETAIN: inner arc with outward spikes.
pub(super) fn retain(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let frame = ArcFrame::new(ctx)?;
    let outer = frame.outer();
    let inner = frame.inner();

    let spikes: Vec<Geometry> = (1..outer.len() - 2)
        .filter(|i| i % 2 == 0)
        .map(|i| Geometry::line_string(&[outer[i], inner[i]]))
        .collect();
    trace!(code = ctx.code, spikes = spikes.len(), radius = frame.radius, "retain");

    let cap = frame.end_cap(&last(&inner), &CHEVRON);
    let anchor = middle(&inner);
    let mut body = spikes;
    body.push(Geometry::line_string(&inner));
    finish(ctx, &frame, body, vec![Geometry::line_string(&cap)], anchor, "R")
}

/// TASKS / SECURE: plain arc with an arrowhead.
pub(super) fn secure(ctx: &Context<'_>) -> Result<Vec<Style>> {
    let frame = ArcFrame::new(ctx)?;
    let outer = frame.outer();
    let cap = frame.end_cap(&last(&outer), &CHEVRON);
    let anchor = middle(&outer);
    finish(
        ctx,
        &frame,
        vec![Geometry::line_string(&outer)],
        vec![Geometry::line_string(&cap)],
        anchor,
        "S",
    )
}
