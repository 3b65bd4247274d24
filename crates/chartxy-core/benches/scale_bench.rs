//! Benchmarks for the data→pixel transform hot path.

use chartxy_core::{AxisRange, LinearScale};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_to_px(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 100.0, 25.0, 315.0);
    c.bench_function("scale_to_px_1k", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for i in 0..1000 {
                acc = acc.wrapping_add(scale.to_px(black_box(i as f32 * 0.1)));
            }
            acc
        })
    });
}

fn bench_ticks(c: &mut Criterion) {
    let range = AxisRange::new(0.0, 100.0, 0.1).unwrap();
    c.bench_function("ticks_1k", |b| {
        b.iter(|| black_box(range.ticks().sum::<f32>()))
    });
}

criterion_group!(benches, bench_to_px, bench_ticks);
criterion_main!(benches);
