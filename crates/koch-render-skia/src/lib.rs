// File: crates/koch-render-skia/src/lib.rs
// Summary: Skia renderer crate; draws laid-out snowflakes onto CPU raster surfaces.

pub mod theme;
pub mod render;

pub use render::{RenderOptions, SkiaSink, SnowflakeRenderer};
pub use theme::Theme;
