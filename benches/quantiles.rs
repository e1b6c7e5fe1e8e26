/// Benchmarks for ensemble quantile computation.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use searise::stats::{ensemble_quantiles, DEFAULT_QUANTILES};

fn criterion_benchmark(c: &mut Criterion) {
    for (time_steps, members) in [(101, 100), (101, 1000), (101, 10000), (301, 1000)] {
        let values = Array2::from_shape_fn((time_steps, members), |(step, member)| {
            (step as f64 * 0.01) + ((member * 37 % members) as f64 / members as f64)
        });
        let name = format!("quantiles({}x{})", time_steps, members);
        c.bench_function(&name, |b| {
            b.iter(|| {
                ensemble_quantiles(black_box(values.view()), &DEFAULT_QUANTILES).unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
