//! Benchmarks for the per-region metrics calculation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use telemetry_core::{Dataset, Sample};
use telemetry_metrics::{MetricsCalculator, MetricsQuery};

fn synthetic_samples(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let latency = 100.0 + ((i * 37) % 250) as f64;
            let uptime = 0.9 + ((i * 13) % 100) as f64 / 1000.0;
            Sample::new(latency, uptime)
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for size in [10, 1_000, 100_000] {
        let samples = synthetic_samples(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| MetricsCalculator::compute(black_box(samples), black_box(180.0)))
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let dataset = Dataset::from_iter(
        ["amer", "apac", "emea", "latam"]
            .iter()
            .map(|r| (r.to_string(), synthetic_samples(500))),
    );
    let query = MetricsQuery::new(
        vec!["emea".to_string(), "apac".to_string(), "unknown".to_string()],
        180.0,
    );

    c.bench_function("query_three_regions", |b| {
        b.iter(|| query.evaluate(black_box(&dataset)))
    });
}

criterion_group!(benches, bench_compute, bench_query);
criterion_main!(benches);
