//! Benchmarks for section parsing and diagram rendering.

use bxui_layout::sections::parse_sections;
use bxui_layout::{render_by_sections, TrayLayout};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_parse(c: &mut Criterion) {
    let spec = "10:20/4:5*8:100/10:3.5*12";
    c.bench_function("parse_sections/mixed", |b| {
        b.iter(|| parse_sections(black_box(spec)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_sections");
    for n in [1usize, 8, 32] {
        let lengths = vec![12.5; n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &lengths, |b, lengths| {
            b.iter(|| render_by_sections(black_box(lengths), black_box(lengths)))
        });
    }
    group.finish();
}

fn bench_read_back(c: &mut Criterion) {
    let text = render_by_sections(&[20.0; 16], &[15.0; 16]);
    c.bench_function("tray_layout/parse_16x16", |b| {
        b.iter(|| TrayLayout::parse(black_box(&text)))
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_read_back);
criterion_main!(benches);
