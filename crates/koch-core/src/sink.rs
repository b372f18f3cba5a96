// File: crates/koch-core/src/sink.rs
// Summary: Renderer seam (outline + paint style) and an SVG path builder implementing it.

use std::fmt::Write as _;

use crate::layout::Snowflake;
use crate::outline::Outline;
use crate::style::PaintStyle;
use crate::types::Point;

/// Anything that can turn an outline into strokes/fills.
pub trait OutlineSink {
    fn draw_outline(&mut self, outline: &Outline, style: &PaintStyle);

    /// Main outline first, then the inner decorative outline on top.
    fn draw_snowflake(&mut self, snowflake: &Snowflake, style: &PaintStyle) {
        self.draw_outline(&snowflake.outline, style);
        if let Some(inner) = &snowflake.inner {
            self.draw_outline(inner, &style.inner());
        }
    }
}

/// SVG path data for a closed outline: `M x y L x y ... Z`.
pub fn svg_path_data(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        // Writing into a String cannot fail.
        let _ = write!(d, "{cmd}{:.3} {:.3} ", p.x, p.y);
    }
    if !points.is_empty() {
        d.push('Z');
    }
    d
}

/// Collects `<path>` elements and wraps them in an `<svg>` document.
#[derive(Default)]
pub struct SvgPathBuilder {
    elements: Vec<String>,
}

impl SvgPathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn finish(self, width: u32, height: u32) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        for e in &self.elements {
            doc.push_str("  ");
            doc.push_str(e);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

impl OutlineSink for SvgPathBuilder {
    fn draw_outline(&mut self, outline: &Outline, style: &PaintStyle) {
        let fill = match style.fill_color() {
            Some(c) => format!("fill=\"{}\" fill-opacity=\"{:.3}\"", c.to_hex(), c.a as f64 / 255.0),
            None => "fill=\"none\"".to_string(),
        };
        let stroke = style.stroke_color();
        self.elements.push(format!(
            "<path d=\"{}\" {fill} stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{}\"/>",
            svg_path_data(outline.points()),
            stroke.to_hex(),
            stroke.a as f64 / 255.0,
            style.stroke_width,
        ));
    }
}
