// File: crates/koch-core/src/koch.rs
// Summary: Recursive Koch edge subdivision.

use std::f64::consts::FRAC_PI_3;

use crate::geometry::{add, rotate, scale, sub};
use crate::types::{Depth, Edge, Point};

/// Number of points `subdivide_edge` returns for one edge: 4^depth + 1.
pub const fn edge_point_count(depth: Depth) -> usize {
    4usize.pow(depth.get() as u32) + 1
}

/// Trace the Koch curve from `edge.start` to `edge.end`.
///
/// Depth 0 yields exactly the two endpoints. Each further level replaces
/// every segment with four, bumping the middle third out to the left of the
/// direction of travel as seen on screen (y down). A triangle walked
/// clockwise on screen, as [`crate::snowflake_outline`] does, grows outward.
pub fn subdivide_edge(edge: Edge, depth: Depth) -> Vec<Point> {
    let mut out = Vec::with_capacity(edge_point_count(depth));
    push_open(&mut out, edge.start, edge.end, depth.get());
    out.push(edge.end);
    out
}

/// Appends every point of the subdivided segment except `end`, so that
/// consecutive segments share their junction exactly once.
pub(crate) fn push_open(out: &mut Vec<Point>, start: Point, end: Point, depth: u8) {
    if depth == 0 {
        out.push(start);
        return;
    }

    let third = scale(sub(end, start), 1.0 / 3.0);
    let p1 = add(start, third);
    let p2 = sub(end, third);
    let peak = add(p1, rotate(third, -FRAC_PI_3));

    let next = depth - 1;
    push_open(out, start, p1, next);
    push_open(out, p1, peak, next);
    push_open(out, peak, p2, next);
    push_open(out, p2, end, next);
}
