// File: crates/koch-core/src/lib.rs
// Summary: Core library entry point; exports the Koch curve generator, layout and paint model.

pub mod error;
pub mod types;
pub mod geometry;
pub mod koch;
pub mod outline;
pub mod params;
pub mod layout;
pub mod style;
pub mod sink;

pub use error::FractalError;
pub use types::{Depth, Edge, Point, MAX_DEPTH};
pub use geometry::Bounds;
pub use koch::{edge_point_count, subdivide_edge};
pub use outline::{snowflake_outline, Outline};
pub use params::SnowflakeParams;
pub use layout::{Snowflake, Viewport};
pub use style::{FillMode, PaintStyle, Rgba};
pub use sink::{OutlineSink, SvgPathBuilder};
