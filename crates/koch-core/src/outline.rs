// File: crates/koch-core/src/outline.rs
// Summary: Closed snowflake outline assembled from three subdivided triangle sides.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::Result;
use crate::geometry::{approx_eq, distance, polar, Bounds};
use crate::koch::{edge_point_count, push_open};
use crate::params::SnowflakeParams;
use crate::types::{Depth, Point};

/// Closed, ordered point sequence; the first point is repeated at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    /// Expected point count for a snowflake at `depth`: 3 * 4^depth + 1.
    pub const fn point_count(depth: Depth) -> usize {
        3 * (edge_point_count(depth) - 1) + 1
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points without the closing repeat.
    pub fn unique_points(&self) -> &[Point] {
        &self.points[..self.points.len().saturating_sub(1)]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => self.points.len() > 1 && approx_eq(a, b, tol),
            _ => false,
        }
    }

    /// Total length of the polyline, closing segment included.
    pub fn perimeter(&self) -> f64 {
        self.points.windows(2).map(|w| distance(w[0], w[1])).sum()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl AsRef<[Point]> for Outline {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Corner points of the base triangle at -90, 30 and 150 degrees.
pub fn triangle_corners(center: Point, size: f64) -> [Point; 3] {
    let start = -FRAC_PI_2;
    let step = 2.0 * PI / 3.0;
    [
        polar(center, size, start),
        polar(center, size, start + step),
        polar(center, size, start + 2.0 * step),
    ]
}

/// Build the Koch snowflake around `center` with corner radius `size`.
///
/// Rejects a non-finite center and a size that is not a positive finite number.
pub fn snowflake_outline(center: Point, size: f64, depth: Depth) -> Result<Outline> {
    SnowflakeParams::with_depth(center, size, depth).map(|p| p.outline())
}

/// Unchecked assembly; inputs were validated by [`SnowflakeParams`].
pub(crate) fn assemble(center: Point, size: f64, depth: Depth) -> Outline {
    let corners = triangle_corners(center, size);
    let mut points = Vec::with_capacity(Outline::point_count(depth));
    for i in 0..3 {
        push_open(&mut points, corners[i], corners[(i + 1) % 3], depth.get());
    }
    points.push(corners[0]);
    Outline { points }
}
