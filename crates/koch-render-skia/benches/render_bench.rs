use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use koch_core::{Depth, PaintStyle};
use koch_render_skia::{RenderOptions, SnowflakeRenderer};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for d in [3i64, 6] {
        group.bench_function(format!("depth_{d}"), |b| {
            let opts = RenderOptions::default();
            let renderer = SnowflakeRenderer::fit(&opts, Depth::new(d).expect("depth"), PaintStyle::default())
                .expect("layout");
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
