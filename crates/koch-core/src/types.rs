// File: crates/koch-core/src/types.rs
// Summary: Shared value types (points, edges, validated depth) and constants.

use std::fmt;
use std::str::FromStr;

use crate::error::{FractalError, Result};

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Deepest recursion accepted. A snowflake at this depth has 3 * 4^6 + 1 points.
pub const MAX_DEPTH: u8 = 6;

/// A 2-D coordinate. Screen convention: y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Ordered segment to be subdivided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Recursion depth, guaranteed to lie in `0..=MAX_DEPTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u8);

impl Depth {
    pub const ZERO: Depth = Depth(0);
    pub const MAX: Depth = Depth(MAX_DEPTH);

    /// Checked constructor; rejects negative or too-deep values.
    pub fn new(depth: i64) -> Result<Self> {
        if (0..=MAX_DEPTH as i64).contains(&depth) {
            Ok(Self(depth as u8))
        } else {
            Err(FractalError::InvalidDepth(depth))
        }
    }

    /// Clamp any integer into range, for slider-style inputs.
    pub fn clamped(depth: i64) -> Self {
        Self(depth.clamp(0, MAX_DEPTH as i64) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// One level shallower, saturating at zero.
    pub const fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl TryFrom<i64> for Depth {
    type Error = FractalError;

    fn try_from(value: i64) -> Result<Self> {
        Depth::new(value)
    }
}

impl FromStr for Depth {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let n = trimmed
            .parse::<i64>()
            .map_err(|_| FractalError::DepthParse(trimmed.to_string()))?;
        Depth::new(n)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_accepts_full_range() {
        for d in 0..=MAX_DEPTH as i64 {
            assert_eq!(Depth::new(d).unwrap().get() as i64, d);
        }
    }

    #[test]
    fn depth_rejects_out_of_range() {
        assert_eq!(Depth::new(-1), Err(FractalError::InvalidDepth(-1)));
        assert_eq!(Depth::new(7), Err(FractalError::InvalidDepth(7)));
    }

    #[test]
    fn depth_parses_text() {
        assert_eq!(" 3 ".parse::<Depth>().unwrap().get(), 3);
        assert!(matches!("2.5".parse::<Depth>(), Err(FractalError::DepthParse(_))));
        assert!(matches!("abc".parse::<Depth>(), Err(FractalError::DepthParse(_))));
        assert_eq!("-2".parse::<Depth>(), Err(FractalError::InvalidDepth(-2)));
    }

    #[test]
    fn depth_clamps() {
        assert_eq!(Depth::clamped(-5), Depth::ZERO);
        assert_eq!(Depth::clamped(99), Depth::MAX);
        assert_eq!(Depth::clamped(4).get(), 4);
        assert_eq!(Depth::ZERO.decrement(), Depth::ZERO);
    }
}
