// File: crates/koch-core/src/layout.rs
// Summary: Fits a snowflake (plus its inner decorative outline) into a viewport.

use crate::error::{FractalError, Result};
use crate::outline::Outline;
use crate::params::SnowflakeParams;
use crate::types::{Depth, Point};

/// Corner radius as a fraction of the viewport's shorter side.
pub const SIZE_FRACTION: f64 = 0.25;
/// Inner outline radius relative to the main outline.
pub const INNER_SCALE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !(ok(width) && ok(height)) {
            return Err(FractalError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn snowflake_size(&self) -> f64 {
        self.width.min(self.height) * SIZE_FRACTION
    }
}

/// A laid-out snowflake ready for a renderer.
#[derive(Clone, Debug)]
pub struct Snowflake {
    pub params: SnowflakeParams,
    pub outline: Outline,
    /// Smaller, one-level-shallower outline drawn inside the main one; present when depth > 1.
    pub inner: Option<Outline>,
}

impl Snowflake {
    pub fn from_params(params: SnowflakeParams) -> Result<Self> {
        let outline = params.outline();
        let inner = if params.depth().get() > 1 {
            let inner_params = SnowflakeParams::with_depth(
                params.center(),
                params.size() * INNER_SCALE,
                params.depth().decrement(),
            )?;
            Some(inner_params.outline())
        } else {
            None
        };
        tracing::debug!(
            depth = params.depth().get(),
            size = params.size(),
            points = outline.len(),
            inner = inner.is_some(),
            "snowflake laid out"
        );
        Ok(Self { params, outline, inner })
    }

    /// Center the snowflake in `viewport`, sized to a quarter of its shorter side.
    pub fn fit(viewport: Viewport, depth: Depth) -> Result<Self> {
        let params = SnowflakeParams::with_depth(viewport.center(), viewport.snowflake_size(), depth)?;
        Self::from_params(params)
    }
}
