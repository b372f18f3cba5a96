// File: crates/koch-core/src/geometry.rs
// Summary: Lightweight vector helpers and bounding boxes for point math.

use crate::types::Point;

#[inline]
pub fn add(a: Point, b: Point) -> Point {
    Point::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn sub(a: Point, b: Point) -> Point {
    Point::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn scale(v: Point, k: f64) -> Point {
    Point::new(v.x * k, v.y * k)
}

/// Rotate vector `v` by `angle` radians (positive turns +x toward +y).
#[inline]
pub fn rotate(v: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    Point::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Point at `radius` from `center` along `angle` radians.
#[inline]
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    Point::new(center.x + radius * c, center.y + radius * s)
}

#[inline]
pub fn approx_eq(a: Point, b: Point, tol: f64) -> bool {
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box holding every point; `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        Some(points.iter().skip(1).fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 { self.max_x - self.min_x }
    pub fn height(&self) -> f64 { self.max_y - self.min_y }

    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotate_quarter_turn() {
        let r = rotate(Point::new(1.0, 0.0), FRAC_PI_2);
        assert!(approx_eq(r, Point::new(0.0, 1.0), 1e-12));
    }

    #[test]
    fn bounds_of_points() {
        let pts = [Point::new(1.0, -2.0), Point::new(-3.0, 4.0), Point::new(0.5, 0.5)];
        let b = Bounds::from_points(&pts).unwrap();
        assert_eq!(b, Bounds { min_x: -3.0, min_y: -2.0, max_x: 1.0, max_y: 4.0 });
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 6.0);
        assert!(Bounds::from_points(&[]).is_none());
    }
}
