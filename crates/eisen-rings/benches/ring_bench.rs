//! Benchmarks for Eisenstein Euclidean division and GCD.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eisen_rings::{gcd, Eisenstein, EisensteinFraction};

/// A product of `k` small primes of Z[ω], so GCDs have real work to do.
fn smooth(k: usize, twist: i64) -> Eisenstein {
    let primes = [
        Eisenstein::new(2, 1),
        Eisenstein::new(3, 1),
        Eisenstein::new(2, 0),
        Eisenstein::new(4, 1),
        Eisenstein::new(5, 3),
    ];
    (0..k).fold(Eisenstein::new(1, twist), |acc, i| &acc * &primes[i % primes.len()])
}

fn bench_floor_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor_div");

    for k in [4, 16, 64] {
        let x = smooth(k, 1);
        let y = smooth(k / 2, 0);
        group.bench_with_input(BenchmarkId::new("exact", k), &k, |b, _| {
            b.iter(|| black_box(x.floor_div(&y)))
        });
    }

    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("eisenstein_gcd");

    for k in [4, 16, 64] {
        let x = smooth(k, 1);
        let y = smooth(k, 2);
        group.bench_with_input(BenchmarkId::new("smooth", k), &k, |b, _| {
            b.iter(|| black_box(gcd(&x, &y)))
        });
    }

    group.finish();
}

fn bench_fraction_inverse(c: &mut Criterion) {
    let x = EisensteinFraction::from(smooth(16, 1));

    c.bench_function("fraction_inverse", |b| b.iter(|| black_box(x.inverse())));
}

criterion_group!(benches, bench_floor_div, bench_gcd, bench_fraction_inverse);
criterion_main!(benches);
