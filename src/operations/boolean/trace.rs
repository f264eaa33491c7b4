use crate::math::distance_2d::point_to_polyline_dist;
use crate::math::{Point2, Segment, TOLERANCE};

use super::parts::ON_TRACE;

/// Parameter tolerance along a segment.
const T_EPS: f64 = 1e-12;

/// Removes from each line string the length it shares with `cutters`.
///
/// Only collinear overlap removes length; crossings leave the trace intact.
/// Pieces that remain contiguous across vertices stay in one line string.
pub(super) fn subtract_traces(lines: &[Vec<Point2>], cutters: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
    if cutters.is_empty() {
        return lines.to_vec();
    }
    let cutter_segments: Vec<Segment> = cutters
        .iter()
        .flat_map(|c| c.windows(2).map(|w| Segment::new(w[0], w[1])))
        .filter(|s| !s.is_degenerate())
        .collect();
    split_lines(lines, |seg| uncovered(seg, &cutter_segments))
}

/// Returns `true` if `point` lies on any of `lines`.
pub(super) fn traces_cover(lines: &[Vec<Point2>], point: &Point2) -> bool {
    lines
        .iter()
        .any(|line| point_to_polyline_dist(point, line) < ON_TRACE)
}

/// Rebuilds line strings from the parameter intervals `keep` selects on
/// each of their segments.
///
/// Intervals must be sorted. Adjacent intervals, within a segment or across
/// a vertex, are joined into one line string.
pub(super) fn split_lines<F>(lines: &[Vec<Point2>], keep: F) -> Vec<Vec<Point2>>
where
    F: Fn(&Segment) -> Vec<(f64, f64)>,
{
    let mut out = Vec::new();
    for line in lines {
        let mut current: Vec<Point2> = Vec::new();
        for w in line.windows(2) {
            let seg = Segment::new(w[0], w[1]);
            if seg.is_degenerate() {
                continue;
            }
            let kept = merge(keep(&seg));
            if kept.is_empty() {
                flush(&mut current, &mut out);
            }
            for (t0, t1) in kept {
                if t0 > T_EPS || current.is_empty() {
                    flush(&mut current, &mut out);
                    current.push(seg.point_along(t0));
                }
                current.push(if t1 >= 1.0 - T_EPS { seg.end() } else { seg.point_along(t1) });
                if t1 < 1.0 - T_EPS {
                    flush(&mut current, &mut out);
                }
            }
        }
        flush(&mut current, &mut out);
    }
    out
}

fn merge(intervals: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(intervals.len());
    for (lo, hi) in intervals {
        match merged.last_mut() {
            Some(last) if lo - last.1 < T_EPS => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn flush(current: &mut Vec<Point2>, out: &mut Vec<Vec<Point2>>) {
    if current.len() >= 2 {
        out.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Returns the parameter intervals of `seg` not covered by any cutter.
fn uncovered(seg: &Segment, cutters: &[Segment]) -> Vec<(f64, f64)> {
    let d = seg.vector();
    let len_sq = d.norm_squared();
    let len = len_sq.sqrt();

    let mut covered: Vec<(f64, f64)> = cutters
        .iter()
        .filter(|c| {
            let off = |p: Point2| (d.x * (p.y - seg.start().y) - d.y * (p.x - seg.start().x)).abs() / len;
            off(c.start()) < ON_TRACE && off(c.end()) < ON_TRACE
        })
        .filter_map(|c| {
            let t = |p: Point2| (p - seg.start()).dot(&d) / len_sq;
            let (a, b) = (t(c.start()), t(c.end()));
            let lo = a.min(b).max(0.0);
            let hi = a.max(b).min(1.0);
            (hi - lo > TOLERANCE / len).then_some((lo, hi))
        })
        .collect();
    covered.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut kept = Vec::new();
    let mut cursor = 0.0;
    for (lo, hi) in covered {
        if lo > cursor + T_EPS {
            kept.push((cursor, lo));
        }
        cursor = f64::max(cursor, hi);
    }
    if cursor < 1.0 - T_EPS {
        kept.push((cursor, 1.0));
    }
    kept
}
