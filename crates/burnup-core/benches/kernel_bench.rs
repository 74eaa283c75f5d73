use burnup_core::{intersect, linear_reg, Point, Segment};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_burnup(n: usize) -> Vec<Point> {
    let mut v = Vec::with_capacity(n);
    let mut y = 0.0f64;
    for i in 0..n {
        // cumulative progress with uneven steps
        y += 1.0 + (i as f64 * 0.37).sin().abs();
        v.push(Point::new(i as f64 * 8.0, y));
    }
    v
}

fn bench_linear_reg(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_reg");
    for &n in &[16usize, 256, 4_096] {
        let data = gen_burnup(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter_batched(
                || data.clone(),
                |d| { let _ = black_box(linear_reg(&d)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let total = Segment::from_coords(0.0, 100.0, 1920.0, 100.0);
    let done = Segment::from_coords(0.0, 0.0, 1920.0, 1920.0);
    c.bench_function("intersect", |b| {
        b.iter(|| black_box(intersect(black_box(&total), black_box(&done))))
    });
}

criterion_group!(benches, bench_linear_reg, bench_intersect);
criterion_main!(benches);
