//! Benchmarks for gray-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use gray_core::{PackedImage, PixelStore};
use gray_io::pgm;
use gray_ops::draw;

fn gradient(size: usize) -> PackedImage {
    let mut image = PackedImage::new("gradient", size, size, 255).unwrap();
    for row in 0..size {
        for col in 0..size {
            image.set_point(row, col, ((row + col) % 256) as u8).unwrap();
        }
    }
    image
}

/// Benchmark packed pixel access.
fn bench_pixels(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixels");

    for size in [64usize, 256, 1024].iter() {
        let mut image = gradient(*size);
        group.throughput(Throughput::Elements((*size * *size) as u64));

        group.bench_with_input(BenchmarkId::new("get_point", size), size, |b, &n| {
            b.iter(|| {
                let mut sum = 0u64;
                for row in 0..n {
                    for col in 0..n {
                        sum += image.get_point(black_box(row), black_box(col)).unwrap() as u64;
                    }
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("set_point", size), size, |b, &n| {
            b.iter(|| {
                for row in 0..n {
                    for col in 0..n {
                        image.set_point(row, col, black_box(col as u8)).unwrap();
                    }
                }
            })
        });
    }

    group.finish();
}

/// Benchmark the P2 writer and reader.
fn bench_pgm(c: &mut Criterion) {
    let mut group = c.benchmark_group("pgm");

    for size in [64usize, 256, 1024].iter() {
        let image = gradient(*size);
        let encoded = pgm::write_to_memory(&image).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("write", size), &image, |b, img| {
            b.iter(|| pgm::write_to_memory(black_box(img)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("read", size), &encoded, |b, data| {
            b.iter(|| pgm::read_from_memory(black_box(data)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark the rasterizer.
fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    let mut image = PackedImage::new("canvas", 1024, 1024, 255).unwrap();

    group.bench_function("line_shallow", |b| {
        b.iter(|| draw::line(&mut image, 0, 0, black_box(1023), black_box(300), 255).unwrap())
    });

    group.bench_function("line_steep", |b| {
        b.iter(|| draw::line(&mut image, 0, 0, black_box(300), black_box(1023), 255).unwrap())
    });

    group.bench_function("triangle_shape", |b| {
        b.iter(|| {
            draw::triangle_shape(&mut image, 337, 337, 901, 901, 0, 614, black_box(0)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pixels, bench_pgm, bench_draw);
criterion_main!(benches);
