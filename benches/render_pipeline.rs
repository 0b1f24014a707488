use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fractal_viewer::core::colour_mapping::palette::builder::build_palette;
use fractal_viewer::core::colour_mapping::palette::curated::CURATED_STOPS;
use fractal_viewer::{ExplorerConfig, FrameSize, RenderContext, Viewport};

fn config(width: u32, height: u32, fast_eval: bool) -> ExplorerConfig {
    ExplorerConfig {
        frame_size: FrameSize::new(width, height).unwrap(),
        viewport: Viewport::new(-0.5, 0.0, 1.0),
        fast_eval,
        ..Default::default()
    }
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.sample_size(20);

    for fast_eval in [false, true] {
        let mut context = RenderContext::new(config(800, 600, fast_eval)).unwrap();
        // prime the iteration history so fast-eval has something to reuse
        context.render_frame();

        group.bench_with_input(
            BenchmarkId::new("800x600", if fast_eval { "fast_eval" } else { "full" }),
            &fast_eval,
            |b, _| b.iter(|| black_box(context.render_frame())),
        );
    }

    group.finish();
}

fn bench_build_palette(c: &mut Criterion) {
    c.bench_function("build_palette_300", |b| {
        b.iter(|| build_palette(black_box(&CURATED_STOPS), black_box(300)).unwrap())
    });
}

criterion_group!(benches, bench_render_frame, bench_build_palette);
criterion_main!(benches);
