// File: crates/koch-core/src/error.rs
// Summary: Validation errors raised at the boundary before any geometry is computed.

use thiserror::Error;

use crate::types::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    #[error("depth {0} is outside the supported range 0..={max}", max = MAX_DEPTH)]
    InvalidDepth(i64),

    #[error("depth '{0}' is not a non-negative integer")]
    DepthParse(String),

    #[error("size must be a positive finite number, got {0}")]
    InvalidSize(f64),

    #[error("center ({x}, {y}) is not a finite coordinate")]
    InvalidCenter { x: f64, y: f64 },

    #[error("viewport {width}x{height} must have a positive width and height")]
    InvalidViewport { width: f64, height: f64 },

    #[error("color '{0}' is not a #rrggbb hex string")]
    InvalidColor(String),

    #[error("fill mode '{0}' is not one of solid, stroke")]
    InvalidFillMode(String),
}

pub type Result<T> = std::result::Result<T, FractalError>;
