// File: crates/koch-core/src/params.rs
// Summary: Validated snowflake parameters; all input checks happen here, before recursion.

use crate::error::{FractalError, Result};
use crate::outline::{assemble, Outline};
use crate::types::{Depth, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowflakeParams {
    center: Point,
    size: f64,
    depth: Depth,
}

impl SnowflakeParams {
    /// Validate raw caller input.
    pub fn new(center: Point, size: f64, depth: i64) -> Result<Self> {
        Self::with_depth(center, size, Depth::new(depth)?)
    }

    pub fn with_depth(center: Point, size: f64, depth: Depth) -> Result<Self> {
        if !center.is_finite() {
            return Err(FractalError::InvalidCenter { x: center.x, y: center.y });
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(FractalError::InvalidSize(size));
        }
        Ok(Self { center, size, depth })
    }

    pub fn center(&self) -> Point { self.center }
    pub fn size(&self) -> f64 { self.size }
    pub fn depth(&self) -> Depth { self.depth }

    pub fn outline(&self) -> Outline {
        assemble(self.center, self.size, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_size() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(SnowflakeParams::new(c, 0.0, 1), Err(FractalError::InvalidSize(0.0)));
        assert_eq!(SnowflakeParams::new(c, -3.0, 1), Err(FractalError::InvalidSize(-3.0)));
        assert!(matches!(SnowflakeParams::new(c, f64::NAN, 1), Err(FractalError::InvalidSize(_))));
        assert!(matches!(SnowflakeParams::new(c, f64::INFINITY, 1), Err(FractalError::InvalidSize(_))));
    }

    #[test]
    fn rejects_bad_depth_before_size() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(SnowflakeParams::new(c, 10.0, -1), Err(FractalError::InvalidDepth(-1)));
        assert_eq!(SnowflakeParams::new(c, 10.0, 40), Err(FractalError::InvalidDepth(40)));
    }

    #[test]
    fn rejects_non_finite_center() {
        let err = SnowflakeParams::new(Point::new(f64::NAN, 0.0), 10.0, 0).unwrap_err();
        assert!(matches!(err, FractalError::InvalidCenter { .. }));
    }

    #[test]
    fn builds_outline() {
        let p = SnowflakeParams::new(Point::new(5.0, 5.0), 2.0, 2).unwrap();
        assert_eq!(p.outline().len(), Outline::point_count(p.depth()));
    }
}
