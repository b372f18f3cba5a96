// File: crates/koch-render-skia/tests/determinism.rs
// Purpose: Repeat renders are byte-identical, and the encoded PNG carries exactly the rasterized pixels.

use koch_core::{Depth, FillMode, PaintStyle, Rgba};
use koch_render_skia::{RenderOptions, SnowflakeRenderer, Theme};

fn opts() -> RenderOptions {
    RenderOptions { width: 320, height: 320, theme: Theme::light(), draw_inner: true }
}

fn renderer(depth: i64) -> SnowflakeRenderer {
    let style = PaintStyle::new(Rgba::from_hex("#4a90e2").unwrap(), FillMode::Solid);
    SnowflakeRenderer::fit(&opts(), Depth::new(depth).unwrap(), style).expect("layout")
}

#[test]
fn rendering_is_deterministic() {
    for depth in [0, 2, 4] {
        let r = renderer(depth);
        assert_eq!(
            r.render_to_png_bytes(&opts()).expect("render bytes"),
            r.render_to_png_bytes(&opts()).expect("render bytes"),
            "depth {depth}"
        );
    }
}

#[test]
fn png_matches_rgba_readback() {
    let r = renderer(3);
    let png = r.render_to_png_bytes(&opts()).expect("render bytes");
    let (px, w, h, _) = r.render_to_rgba8(&opts()).expect("rgba render");

    let decoded = image::load_from_memory(&png).expect("decode png").to_rgba8();
    assert_eq!((decoded.width(), decoded.height()), (w, h));
    assert_eq!(decoded.as_raw(), &px);
}
