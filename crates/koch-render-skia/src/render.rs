// File: crates/koch-render-skia/src/render.rs
// Summary: Headless snowflake rendering pipeline using Skia CPU raster surfaces (PNG bytes/file, RGBA8).

use anyhow::{Context, Result};
use skia_safe as skia;

use koch_core::types::{HEIGHT, WIDTH};
use koch_core::{Depth, Outline, OutlineSink, PaintStyle, Rgba, Snowflake, Viewport};

use crate::theme::Theme;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_inner: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::dark(),
            draw_inner: true,
        }
    }
}

impl RenderOptions {
    pub fn viewport(&self) -> Result<Viewport> {
        Ok(Viewport::new(self.width as f64, self.height as f64)?)
    }
}

#[inline]
fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn outline_path(outline: &Outline) -> Option<skia::Path> {
    let (first, rest) = outline.points().split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first.x as f32, first.y as f32));
    for p in rest {
        path.line_to((p.x as f32, p.y as f32));
    }
    path.close();
    Some(path)
}

/// Draws outlines straight onto a Skia canvas.
pub struct SkiaSink<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSink<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

impl OutlineSink for SkiaSink<'_> {
    fn draw_outline(&mut self, outline: &Outline, style: &PaintStyle) {
        let Some(path) = outline_path(outline) else { return };

        if let Some(fill) = style.fill_color() {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(to_skia(fill));
            self.canvas.draw_path(&path, &paint);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.stroke_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(to_skia(style.stroke_color()));
        self.canvas.draw_path(&path, &stroke);
    }
}

pub struct SnowflakeRenderer {
    pub snowflake: Snowflake,
    pub style: PaintStyle,
}

impl SnowflakeRenderer {
    pub fn new(snowflake: Snowflake, style: PaintStyle) -> Self {
        Self { snowflake, style }
    }

    /// Lay out a snowflake of `depth` centered in the surface described by `opts`.
    pub fn fit(opts: &RenderOptions, depth: Depth, style: PaintStyle) -> Result<Self> {
        let snowflake = Snowflake::fit(opts.viewport()?, depth)
            .with_context(|| format!("laying out depth {depth} snowflake"))?;
        Ok(Self::new(snowflake, style))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        let mut sink = SkiaSink::new(canvas);
        if opts.draw_inner {
            sink.draw_snowflake(&self.snowflake, &self.style);
        } else {
            sink.draw_outline(&self.snowflake.outline, &self.style);
        }
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), opts);
        tracing::debug!(
            width = opts.width,
            height = opts.height,
            theme = opts.theme.name,
            points = self.snowflake.outline.len(),
            "snowflake rasterized"
        );
        Ok(surface)
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the snowflake to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8; returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}
