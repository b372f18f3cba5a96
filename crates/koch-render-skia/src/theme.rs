// File: crates/koch-render-skia/src/theme.rs
// Summary: Light/Dark background presets and default snowflake colours.

use koch_core::Rgba;
use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub snowflake: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            snowflake: Rgba::new(0x7f, 0xc8, 0xff, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            snowflake: Rgba::new(0x4a, 0x90, 0xe2, 255),
        }
    }

    pub fn winter() -> Self {
        Self {
            name: "winter",
            background: skia::Color::from_argb(255, 0x0b, 0x1d, 0x3a),
            snowflake: Rgba::new(0xe8, 0xf4, 0xff, 255),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::winter()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
