// File: crates/koch-core/src/style.rs
// Summary: Renderer-agnostic paint model (colour, fill mode, stroke) for snowflake outlines.

use std::str::FromStr;

use crate::error::{FractalError, Result};

/// Per-step channel factor for `darker`/`brighter`.
const SHADE_STEP: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let t = s.trim();
        let hex = t.strip_prefix('#').unwrap_or(t);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FractalError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| FractalError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 255))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scale RGB by 0.7^k.
    pub fn darker(&self, k: f64) -> Self {
        self.shade(SHADE_STEP.powf(k))
    }

    /// Scale RGB by (1/0.7)^k, saturating at 255.
    pub fn brighter(&self, k: f64) -> Self {
        self.shade((1.0 / SHADE_STEP).powf(k))
    }

    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Alpha from a 0..=1 opacity.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    fn shade(&self, factor: f64) -> Self {
        let f = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self { r: f(self.r), g: f(self.g), b: f(self.b), a: self.a }
    }
}

impl FromStr for Rgba {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        Rgba::from_hex(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Solid,
    /// Outline only, no fill.
    Stroke,
}

impl FromStr for FillMode {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(FillMode::Solid),
            "stroke" | "none" => Ok(FillMode::Stroke),
            _ => Err(FractalError::InvalidFillMode(s.trim().to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    pub color: Rgba,
    pub fill: FillMode,
    pub stroke_width: f32,
    pub fill_opacity: f64,
    /// Explicit stroke colour; `None` strokes with `color.darker(0.3)`.
    pub stroke: Option<Rgba>,
}

impl PaintStyle {
    pub fn new(color: Rgba, fill: FillMode) -> Self {
        Self { color, fill, ..Self::default() }
    }

    /// Fill colour, or `None` in stroke-only mode.
    pub fn fill_color(&self) -> Option<Rgba> {
        match self.fill {
            FillMode::Solid => Some(self.color.with_opacity(self.fill_opacity)),
            FillMode::Stroke => None,
        }
    }

    pub fn stroke_color(&self) -> Rgba {
        self.stroke.unwrap_or_else(|| self.color.darker(0.3))
    }

    /// Thin, lighter, unfilled style for the inner decorative outline.
    pub fn inner(&self) -> Self {
        let color = self.color.brighter(1.0).with_opacity(0.8);
        Self {
            color,
            fill: FillMode::Stroke,
            stroke_width: 1.0,
            fill_opacity: 0.0,
            stroke: Some(color),
        }
    }
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: Rgba::new(0x4a, 0x90, 0xe2, 255),
            fill: FillMode::Solid,
            stroke_width: 2.0,
            fill_opacity: 0.7,
            stroke: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Rgba::from_hex("#4a90e2").unwrap(), Rgba::new(0x4a, 0x90, 0xe2, 255));
        assert_eq!("FF0080".parse::<Rgba>().unwrap(), Rgba::new(255, 0, 128, 255));
        assert!(Rgba::from_hex("#abc").is_err());
        assert!(Rgba::from_hex("#zzzzzz").is_err());
        assert_eq!(Rgba::new(1, 2, 255, 9).to_hex(), "#0102ff");
    }

    #[test]
    fn shades() {
        let c = Rgba::new(100, 200, 50, 255);
        assert_eq!(c.darker(1.0), Rgba::new(70, 140, 35, 255));
        assert_eq!(c.brighter(1.0), Rgba::new(143, 255, 71, 255));
        assert_eq!(c.darker(0.0), c);
    }

    #[test]
    fn stroke_mode_has_no_fill() {
        let s = PaintStyle::new(Rgba::new(10, 20, 30, 255), FillMode::Stroke);
        assert!(s.fill_color().is_none());
        assert_eq!(PaintStyle::default().fill_color().unwrap().a, 179);
        assert_eq!(s.inner().fill, FillMode::Stroke);
        assert_eq!("Solid".parse::<FillMode>(), Ok(FillMode::Solid));
        assert_eq!(
            "gradient".parse::<FillMode>(),
            Err(FractalError::InvalidFillMode("gradient".to_string()))
        );
    }

    #[test]
    fn inner_strokes_with_brightened_colour() {
        let base = PaintStyle::new(Rgba::new(100, 200, 50, 255), FillMode::Solid);
        assert_eq!(base.stroke_color(), Rgba::new(100, 200, 50, 255).darker(0.3));

        let inner = base.inner();
        assert_eq!(inner.stroke_color(), Rgba::new(143, 255, 71, 204));
        assert!(inner.fill_color().is_none());
    }
}
