// File: crates/koch-demo/src/main.rs
// Summary: Renders Koch snowflakes at the configured depths to dated PNG and/or SVG files, with a CSV of outline points beside each.

mod config;

use anyhow::{Context, Result};
use koch_core::{Depth, Outline, OutlineSink, PaintStyle, Snowflake, SvgPathBuilder};
use koch_render_skia::{theme, RenderOptions, SnowflakeRenderer};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;

fn main() -> Result<()> {
    let mut config = Config::from_env()?;
    config.apply_args(std::env::args().skip(1))?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    let theme = theme::find(&config.theme);
    let opts = RenderOptions {
        width: config.width,
        height: config.height,
        theme,
        draw_inner: true,
    };
    let style = PaintStyle::new(config.color.unwrap_or(theme.snowflake), config.fill);
    let stamp = chrono::Local::now().format("%Y-%m-%d").to_string();

    info!(
        depths = ?config.depths.iter().map(|d| d.get()).collect::<Vec<_>>(),
        theme = theme.name,
        color = %style.color.to_hex(),
        format = ?config.format,
        out_dir = %config.out_dir.display(),
        "rendering snowflakes"
    );

    for &depth in &config.depths {
        let renderer = SnowflakeRenderer::fit(&opts, depth, style)?;

        if config.format.png() {
            let png = out_name(&config.out_dir, depth, &stamp, "png");
            renderer.render_to_png(&opts, &png)?;
            info!(depth = depth.get(), png = %png.display(), "wrote png");
        }

        if config.format.svg() {
            let svg = out_name(&config.out_dir, depth, &stamp, "svg");
            write_svg(&renderer.snowflake, &style, opts.width as u32, opts.height as u32, &svg)
                .with_context(|| format!("failed to write '{}'", svg.display()))?;
            info!(depth = depth.get(), svg = %svg.display(), "wrote svg");
        }

        let csv_path = out_name(&config.out_dir, depth, &stamp, "csv");
        write_points_csv(&renderer.snowflake.outline, &csv_path)
            .with_context(|| format!("failed to write '{}'", csv_path.display()))?;

        info!(
            depth = depth.get(),
            points = renderer.snowflake.outline.len(),
            perimeter = renderer.snowflake.outline.perimeter(),
            csv = %csv_path.display(),
            "wrote snowflake"
        );
    }
    Ok(())
}

/// Output file name like target/out/koch_snowflake_d3_2026-10-19.png
fn out_name(dir: &Path, depth: Depth, stamp: &str, ext: &str) -> PathBuf {
    dir.join(format!("koch_snowflake_d{depth}_{stamp}.{ext}"))
}

fn write_svg(snowflake: &Snowflake, style: &PaintStyle, width: u32, height: u32, path: &Path) -> Result<()> {
    let mut svg = SvgPathBuilder::new();
    svg.draw_snowflake(snowflake, style);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg.finish(width, height))?;
    Ok(())
}

fn write_points_csv(outline: &Outline, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["index", "x", "y"])?;
    for (i, p) in outline.points().iter().enumerate() {
        wtr.write_record([i.to_string(), format!("{:.6}", p.x), format!("{:.6}", p.y)])?;
    }
    wtr.flush()?;
    Ok(())
}
