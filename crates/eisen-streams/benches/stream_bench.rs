//! Benchmarks for the stream operations and the delta-grid audit.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eisen_rings::EisensteinFraction;
use eisen_streams::{audit_grid, combine, deinterleave_odd, interleave, split, StreamConfig};

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");
    let delta_a = EisensteinFraction::new(1, 2);
    let delta_b = EisensteinFraction::new(1, 1);

    for probe_len in [40, 400] {
        let config = StreamConfig::with_probe_len(probe_len).expect("positive probe length");
        let a: Vec<u64> = (0..=probe_len as u64).collect();
        let b: Vec<u64> = (0..=probe_len as u64).collect();

        group.bench_with_input(BenchmarkId::new("merge", probe_len), &probe_len, |bench, _| {
            bench.iter(|| black_box(interleave(&a, &delta_a, &b, &delta_b, &config)))
        });

        let (merged, delta_c) = interleave(&a, &delta_a, &b, &delta_b, &config).expect("valid deltas");
        group.bench_with_input(BenchmarkId::new("deinterleave_odd", probe_len), &probe_len, |bench, _| {
            bench.iter(|| black_box(deinterleave_odd(&merged, &delta_c, &delta_b, &config)))
        });
    }

    group.finish();
}

fn bench_combine_split(c: &mut Criterion) {
    let config = StreamConfig::default();
    let delta_a = EisensteinFraction::new(1, 2);
    let delta_b = EisensteinFraction::new(1, 1);
    let a: Vec<u64> = (0..64).collect();
    let b: Vec<u64> = (0..64).collect();

    c.bench_function("combine", |bench| {
        bench.iter(|| black_box(combine(&a, &delta_a, &b, &delta_b, &config)))
    });

    let (pairs, _) = combine(&a, &delta_a, &b, &delta_b, &config).expect("non-zero deltas");
    c.bench_function("split", |bench| {
        bench.iter(|| black_box(split(&pairs, &delta_a, &delta_b, &config)))
    });
}

fn bench_audit(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit_grid");
    group.sample_size(10);

    for range in [2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |bench, &range| {
            bench.iter(|| black_box(audit_grid(range, &StreamConfig::default())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interleave, bench_combine_split, bench_audit);
criterion_main!(benches);
