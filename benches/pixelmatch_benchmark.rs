//! Benchmarks for the pixel diff.
//!
//! Run with: cargo bench
//!
//! Page sizes match US Letter rendered at 100 dpi.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use pdfdiff::{pixelmatch, PixelmatchOptions};

const WIDTH: u32 = 850;
const HEIGHT: u32 = 1100;

/// White page with horizontal black "text lines".
fn create_test_page(line_offset: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([255, 255, 255, 255]));
    for line in 0..40 {
        let y = 60 + line * 24 + line_offset;
        for dy in 0..8 {
            for x in 80..(WIDTH - 80) {
                if (x / 6) % 4 != 3 {
                    img.put_pixel(x, y + dy, Rgba([0, 0, 0, 255]));
                }
            }
        }
    }
    img
}

/// Benchmark the identical-page fast path.
fn bench_identical(c: &mut Criterion) {
    let a = create_test_page(0);
    let b = a.clone();
    let options = PixelmatchOptions::default();

    c.bench_function("pixelmatch_identical", |bench| {
        let mut out = RgbaImage::new(WIDTH, HEIGHT);
        bench.iter(|| pixelmatch(black_box(&a), black_box(&b), Some(&mut out), &options).unwrap());
    });
}

/// Benchmark pages where every text line moved.
fn bench_shifted(c: &mut Criterion) {
    let a = create_test_page(0);
    let b = create_test_page(2);
    let options = PixelmatchOptions::default();

    let mut group = c.benchmark_group("pixelmatch_shifted");
    group.bench_function("with_output", |bench| {
        let mut out = RgbaImage::new(WIDTH, HEIGHT);
        bench.iter(|| pixelmatch(black_box(&a), black_box(&b), Some(&mut out), &options).unwrap());
    });
    group.bench_function("count_only", |bench| {
        bench.iter(|| pixelmatch(black_box(&a), black_box(&b), None, &options).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_identical, bench_shifted);
criterion_main!(benches);
