//! Benchmarks for glyph lookup, measurement and layout

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nxgfx_render::{Canvas, Color};
use nxgfx_test_utils::{FakeGlyphProvider, MockTarget};
use nxgfx_text::{FontSystem, NO_WRAP, TextConfig, TextWrap};

fn setup() -> FontSystem {
    let mut fonts = FontSystem::with_provider(FakeGlyphProvider::new(), TextConfig::default());
    fonts.add_color_directive('*', Color::RED);
    fonts
}

fn bench_measure(c: &mut Criterion) {
    let mut fonts = setup();
    let mut group = c.benchmark_group("measure_width");

    let long_text = "Lorem ipsum dolor sit amet. ".repeat(20);
    let texts: Vec<(&str, &str)> = vec![
        ("single_char", "A"),
        ("single_word", "Hello"),
        ("short_sentence", "Hello, World!"),
        ("with_directives", "A *highlighted* word and *another*"),
        ("cjk", "日本語のテキスト、そして中文。"),
        ("long_text", &long_text),
    ];

    for (name, content) in texts {
        // Warm the cache so the loop measures hits only.
        fonts.measure_width(16, content);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(fonts.measure_width(16, black_box(content))));
        });
    }

    group.finish();
}

fn bench_glyph_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph_miss");

    for size in [8u32, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                setup,
                |mut fonts| {
                    fonts.resize(size);
                    black_box(fonts.find_or_load_glyph('W'))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_render_wrapped(c: &mut Criterion) {
    let mut fonts = setup();
    let mut group = c.benchmark_group("render_wrapped");
    let paragraph = "The quick brown fox jumps over the lazy dog. ".repeat(10);

    for width in [120, 320, 1280] {
        group.bench_with_input(BenchmarkId::new("mock", width), &width, |b, &width| {
            let mut target = MockTarget::new(1280, 720);
            b.iter(|| {
                target.clear_calls();
                fonts
                    .render(&mut target, 0, 0, 16, TextWrap::Width(width), Color::WHITE, &paragraph)
                    .unwrap()
            });
        });
    }

    group.bench_function("canvas", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| {
            fonts
                .render(&mut canvas, 0, 0, 16, NO_WRAP, Color::WHITE, "Hello, *World*!")
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_measure, bench_glyph_miss, bench_render_wrapped);
criterion_main!(benches);
