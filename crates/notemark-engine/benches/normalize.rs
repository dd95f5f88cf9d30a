use criterion::{Criterion, criterion_group, criterion_main};
use notemark_engine::{normalize_for_save, read_markup, render_for_display, render_markdown};
use std::hint::black_box;
mod common;

fn bench_render_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_markdown");
    group.sample_size(20);

    let content = common::generate_markdown_content(100);
    group.bench_function("100_sections", |b| {
        b.iter(|| black_box(render_markdown(black_box(&content))));
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.sample_size(20);

    let legacy = common::generate_legacy_divs(400);
    group.bench_function("legacy_divs_display", |b| {
        b.iter(|| black_box(render_for_display(black_box(&legacy))));
    });

    let structured = render_markdown(&common::generate_markdown_content(50));
    group.bench_function("structured_save", |b| {
        b.iter(|| black_box(normalize_for_save(black_box(&structured))));
    });
    group.bench_function("read_markup", |b| {
        b.iter(|| black_box(read_markup(black_box(&structured))));
    });

    group.finish();
}

criterion_group!(benches, bench_render_markdown, bench_normalize);
criterion_main!(benches);
