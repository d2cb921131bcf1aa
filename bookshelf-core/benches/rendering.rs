//! Rendering benchmarks

use bookshelf_core::render::{renderer_for_format, Renderer};
use bookshelf_core::App;
use criterion::{criterion_group, criterion_main, Criterion};

fn rendering_benchmark(c: &mut Criterion) {
    let app = App::default();

    c.bench_function("app_view", |b| b.iter(|| std::hint::black_box(app.render())));

    let view = app.render();
    for format in ["html", "text", "json"] {
        let renderer = match renderer_for_format(format) {
            Some(renderer) => renderer,
            None => continue,
        };
        c.bench_function(&format!("render_{}", format), |b| {
            b.iter(|| std::hint::black_box(renderer.render_to_string(&view)))
        });
    }
}

criterion_group!(benches, rendering_benchmark);
criterion_main!(benches);
