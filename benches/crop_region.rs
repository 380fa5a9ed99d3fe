use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use displayio_pixels::core::{Dimensions, FrameBuffer, Rectangle, Rgba};

/// Buffer with a non-uniform pattern so copies are not trivially elided
fn patterned(dims: Dimensions) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(dims);
    for y in 0..dims.height {
        for x in 0..dims.width {
            buffer.set_pixel(x, y, Rgba::new(x as u8, y as u8, (x ^ y) as u8, 255));
        }
    }
    buffer
}

/// Benchmark: full-screen crop at common panel sizes
fn bench_crop_full_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop_full_screen");

    for (width, height) in [(128, 64), (320, 240), (800, 480)] {
        let buffer = patterned(Dimensions::new(width, height));
        let area = Rectangle::new(0, 0, width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &area,
            |b, area| b.iter(|| black_box(buffer.crop_region(black_box(area)))),
        );
    }

    group.finish();
}

/// Benchmark: many small dirty rectangles, as produced by sprite movement
fn bench_crop_small_regions(c: &mut Criterion) {
    let buffer = patterned(Dimensions::new(320, 240));
    let areas: Vec<Rectangle> = (0..16)
        .map(|i| Rectangle::new((i * 19) % 300, (i * 13) % 220, 17, 17))
        .collect();

    c.bench_function("crop_16_sprites", |b| {
        b.iter(|| {
            for area in &areas {
                black_box(buffer.crop_region(black_box(area)).ok());
            }
        })
    });
}

criterion_group!(benches, bench_crop_full_screen, bench_crop_small_regions);
criterion_main!(benches);
